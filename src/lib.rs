//! Core of a grid snake game: the screen state machine and the per-tick
//! simulation. No I/O happens here; a host feeds [`InputSnapshot`]s and frame
//! deltas into [`Game::update`] and draws the [`Scene`] it gets back.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod menu;
pub mod scene;
pub mod sim;
pub mod snake;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, ScreenState};
pub use grid::{Cell, Grid};
pub use input::{InputSnapshot, Key};
pub use scene::Scene;
pub use snake::Direction;
