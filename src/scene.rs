use crate::grid::Cell;
use crate::snake::Direction;

pub const TITLE: &str = "SNAKE GAME";
pub const GAME_OVER_TITLE: &str = "GAME OVER";

/// What the host should draw this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scene {
    Playing {
        /// Head first.
        snake: Vec<Cell>,
        heading: Direction,
        food: Cell,
        score: u32,
    },
    Menu {
        title: &'static str,
        /// Final score, on the game over screen only.
        score: Option<u32>,
        options: &'static [&'static str],
        selected: usize,
    },
}
