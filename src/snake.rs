use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit grid step. Up decreases `y`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    SelfCollision,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// Normal move: head prepended, tail dropped.
    Moved { new_head: Cell },
    /// Head landed on the food: head prepended, tail kept.
    Grew { new_head: Cell },
    /// Nothing was mutated.
    Crashed(Crash),
}

/// Occupied cells, head first, plus the heading.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    // Direction of the last committed move; reversals are checked against it too.
    moved: Direction,
}

impl Snake {
    pub fn new(head: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Snake { body, direction, moved: direction }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn move_step(&mut self, grid: &Grid, food: Cell) -> MoveResult {
        let new_head = self.head().offset(self.direction);

        if !grid.is_in_bounds(new_head) {
            return Crashed(Crash::Wall);
        }
        if self.occupies(new_head) {
            return Crashed(Crash::SelfCollision);
        }

        self.body.push_front(new_head);
        self.moved = self.direction;

        if new_head == food {
            Grew { new_head }
        } else {
            self.body.pop_back();
            Moved { new_head }
        }
    }

    /// Returns whether the heading changed. Reversals are ignored.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() || new_direction == self.moved.opposite() {
            return false;
        }

        let changed = new_direction != self.direction;
        self.direction = new_direction;
        changed
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }
}
