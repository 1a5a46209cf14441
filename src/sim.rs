use log::{debug, info};
use rand::rngs::StdRng;

use crate::food;
use crate::grid::{Cell, Grid};
use crate::input::{InputSnapshot, Key};
use crate::snake::{Crash, Direction, MoveResult, Snake};

/// Simulated seconds between two moves.
pub const MOVE_INTERVAL: f32 = 0.1;
pub const FOOD_REWARD: u32 = 10;
pub const INITIAL_DIRECTION: Direction = Direction::Right;

const STEERING: [(Key, Direction); 4] = [
    (Key::Up, Direction::Up),
    (Key::Down, Direction::Down),
    (Key::Left, Direction::Left),
    (Key::Right, Direction::Right),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The move timer has not run out yet.
    Idle,
    Moved,
    Ate,
    Crashed(Crash),
}

/// Snake, food, score and move timer of one round.
pub struct Simulation {
    grid: Grid,
    rng: StdRng,
    snake: Snake,
    food: Cell,
    score: u32,
    timer: f32,
}

impl Simulation {
    pub fn new(grid: Grid, mut rng: StdRng) -> Self {
        let snake = Snake::new(grid.center(), INITIAL_DIRECTION);
        let food = place_food(&grid, &snake, &mut rng);
        Simulation { grid, rng, snake, food, score: 0, timer: 0.0 }
    }

    /// Back to a single segment at the start cell, score 0, fresh food.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid.center(), INITIAL_DIRECTION);
        self.score = 0;
        self.timer = 0.0;
        self.food = place_food(&self.grid, &self.snake, &mut self.rng);
        info!("Initialized snake at {:?}, food at {:?}", self.snake.head(), self.food);
    }

    pub fn steer(&mut self, direction: Direction) -> bool {
        let changed = self.snake.set_direction(direction);
        if changed {
            debug!("Direction changed: {:?}", direction);
        }
        changed
    }

    /// One frame of play: sample steering, then run a tick if the move timer ran out.
    pub fn advance(&mut self, dt: f32, input: &InputSnapshot) -> StepOutcome {
        for &(key, direction) in STEERING.iter() {
            if input.is_down(key) {
                self.steer(direction);
            }
        }

        if dt.is_finite() && dt > 0.0 {
            self.timer += dt;
        }
        if self.timer < MOVE_INTERVAL {
            return StepOutcome::Idle;
        }

        self.timer = 0.0;
        self.tick()
    }

    /// Moves the snake one cell regardless of the timer.
    pub fn tick(&mut self) -> StepOutcome {
        match self.snake.move_step(&self.grid, self.food) {
            MoveResult::Crashed(crash) => {
                info!("Game over: {:?} at score {}", crash, self.score);
                StepOutcome::Crashed(crash)
            }
            MoveResult::Grew { new_head } => {
                self.score += FOOD_REWARD;
                self.food = place_food(&self.grid, &self.snake, &mut self.rng);
                info!("Food eaten at {:?}, score {}", new_head, self.score);
                StepOutcome::Ate
            }
            MoveResult::Moved { new_head, .. } => {
                debug!("Moved snake head to {:?}", new_head);
                StepOutcome::Moved
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, snake: Snake, food: Cell) {
        self.snake = snake;
        self.food = food;
    }
}

// Prefers a cell the snake is not on; only a full grid falls back to anywhere.
fn place_food(grid: &Grid, snake: &Snake, rng: &mut StdRng) -> Cell {
    match food::spawn_avoiding(grid, |cell| snake.occupies(cell), rng) {
        Some(cell) => cell,
        None => food::spawn(grid, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn sim(width: u32, height: u32) -> Simulation {
        Simulation::new(Grid::new(width, height), StdRng::seed_from_u64(42))
    }

    fn no_input() -> InputSnapshot {
        InputSnapshot::new()
    }

    #[test]
    fn starts_with_one_segment_at_the_center() {
        let sim = sim(40, 30);

        assert_eq!(sim.snake().len(), 1);
        assert_eq!(sim.snake().head(), Cell::new(20, 15));
        assert_eq!(sim.snake().get_direction(), Direction::Right);
        assert_eq!(sim.score(), 0);
        assert_ne!(sim.food(), sim.snake().head());
    }

    #[test]
    fn no_move_until_the_interval_elapses() {
        let mut sim = sim(40, 30);
        sim.place(Snake::new(Cell::new(5, 5), Direction::Right), Cell::new(0, 0));

        assert_eq!(sim.advance(0.04, &no_input()), StepOutcome::Idle);
        assert_eq!(sim.advance(0.04, &no_input()), StepOutcome::Idle);
        assert_eq!(sim.snake().head(), Cell::new(5, 5));

        assert_eq!(sim.advance(0.04, &no_input()), StepOutcome::Moved);
        assert_eq!(sim.snake().head(), Cell::new(6, 5));
    }

    #[test]
    fn at_most_one_move_per_frame() {
        let mut sim = sim(40, 30);
        sim.place(Snake::new(Cell::new(5, 5), Direction::Right), Cell::new(0, 0));

        assert_eq!(sim.advance(1.0, &no_input()), StepOutcome::Moved);
        assert_eq!(sim.snake().head(), Cell::new(6, 5));
        // Timer was reset, the surplus is not carried over.
        assert_eq!(sim.advance(0.0, &no_input()), StepOutcome::Idle);
    }

    #[test]
    fn bogus_deltas_are_ignored() {
        let mut sim = sim(40, 30);

        assert_eq!(sim.advance(-5.0, &no_input()), StepOutcome::Idle);
        assert_eq!(sim.advance(f32::NAN, &no_input()), StepOutcome::Idle);
        assert_eq!(sim.advance(0.05, &no_input()), StepOutcome::Idle);
    }

    #[test]
    fn steering_is_sampled_between_ticks() {
        let mut sim = sim(40, 30);
        sim.place(Snake::new(Cell::new(5, 5), Direction::Right), Cell::new(0, 0));

        assert_eq!(sim.advance(0.01, &InputSnapshot::new().with(Key::Down)), StepOutcome::Idle);
        assert_eq!(sim.snake().get_direction(), Direction::Down);

        assert_eq!(sim.advance(MOVE_INTERVAL, &no_input()), StepOutcome::Moved);
        assert_eq!(sim.snake().head(), Cell::new(5, 6));
    }

    #[test]
    fn reverse_input_is_rejected() {
        let mut sim = sim(40, 30);
        sim.place(Snake::new(Cell::new(5, 5), Direction::Right), Cell::new(0, 0));

        sim.advance(0.0, &InputSnapshot::new().with(Key::Left));

        assert_eq!(sim.snake().get_direction(), Direction::Right);
    }

    #[test]
    fn eating_scores_and_grows() {
        let mut sim = sim(40, 30);
        sim.place(Snake::new(Cell::new(5, 5), Direction::Right), Cell::new(6, 5));

        assert_eq!(sim.tick(), StepOutcome::Ate);
        assert_eq!(sim.score(), FOOD_REWARD);
        assert_eq!(sim.snake().len(), 2);
        assert_ne!(sim.food(), Cell::new(6, 5));
        assert!(!sim.snake().occupies(sim.food()));
    }

    #[test]
    fn wall_crash_reports_and_keeps_length() {
        let mut sim = sim(40, 30);
        sim.place(Snake::new(Cell::new(39, 3), Direction::Right), Cell::new(0, 0));

        assert_eq!(sim.tick(), StepOutcome::Crashed(Crash::Wall));
        assert_eq!(sim.snake().len(), 1);
        assert_eq!(sim.snake().head(), Cell::new(39, 3));
    }

    #[test]
    fn reset_restores_the_start_state() {
        let mut sim = sim(40, 30);
        sim.place(Snake::new(Cell::new(5, 5), Direction::Right), Cell::new(6, 5));
        sim.tick();
        sim.steer(Direction::Up);

        sim.reset();

        assert_eq!(sim.score(), 0);
        assert_eq!(sim.snake().len(), 1);
        assert_eq!(sim.snake().head(), Cell::new(20, 15));
        assert_eq!(sim.snake().get_direction(), Direction::Right);
    }

    #[test]
    fn food_falls_back_to_any_cell_when_the_grid_is_full() {
        // A 2x1 grid: the snake fills it after one meal.
        let mut sim = sim(2, 1);
        sim.place(Snake::new(Cell::new(0, 0), Direction::Right), Cell::new(1, 0));

        assert_eq!(sim.tick(), StepOutcome::Ate);
        assert!(sim.grid().is_in_bounds(sim.food()));
        assert!(sim.snake().occupies(sim.food()));
    }
}
