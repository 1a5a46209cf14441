use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::grid::{Cell, Grid};

/// Uniformly random cell anywhere on the grid, snake or not.
pub fn spawn<R: Rng>(grid: &Grid, rng: &mut R) -> Cell {
    let cell = Cell {
        x: rng.gen_range(0..grid.width()),
        y: rng.gen_range(0..grid.height()),
    };
    debug!("New food position: {:?}", cell);
    cell
}

/// Uniformly random cell among the free ones. `None` once the grid is full.
pub fn spawn_avoiding<R, F>(grid: &Grid, is_occupied: F, rng: &mut R) -> Option<Cell>
where
    R: Rng,
    F: Fn(Cell) -> bool,
{
    let res = grid.cells().filter(|cell| !is_occupied(*cell)).choose(rng);
    if let Some(cell) = res {
        debug!("New food position: {:?}", cell);
    }
    res
}
