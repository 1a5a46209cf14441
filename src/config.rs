use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::grid::Grid;

pub const SEGMENT_SIZE: u32 = 20;
pub const FIELD_WIDTH: u32 = 800;
pub const FIELD_HEIGHT: u32 = 600;
/// Largest accepted grid side, in cells.
pub const MAX_GRID_SIDE: u32 = 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("segment size must be non-zero")]
    ZeroSegmentSize,
    #[error("play field {axis} {value}px is not a positive multiple of the {segment}px segment size")]
    UnalignedField { axis: &'static str, value: u32, segment: u32 },
    #[error("a {width}x{height} grid leaves no room for food next to the snake")]
    GridTooSmall { width: u32, height: u32 },
    #[error("a {width}x{height} grid is larger than the {max}x{max} cell limit")]
    GridTooLarge { width: u32, height: u32, max: u32 },
}

/// Play field geometry in pixels, plus an optional RNG seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub segment_size: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            segment_size: SEGMENT_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let segment = self.segment_size;
        if segment == 0 {
            return Err(ConfigError::ZeroSegmentSize);
        }

        for &(axis, value) in &[("width", self.field_width), ("height", self.field_height)] {
            if value == 0 || value % segment != 0 {
                return Err(ConfigError::UnalignedField { axis, value, segment });
            }
        }

        let (width, height) = (self.field_width / segment, self.field_height / segment);
        if width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge { width, height, max: MAX_GRID_SIDE });
        }

        let grid = Grid::from_play_field(self.field_width, self.field_height, segment);
        if grid.area() < 2 {
            return Err(ConfigError::GridTooSmall { width, height });
        }

        Ok(grid)
    }

    /// Food RNG, from the seed when one is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_a_40_by_30_grid() {
        let grid = GameConfig::default().validate().unwrap();

        assert_eq!((grid.width(), grid.height()), (40, 30));
    }

    #[test]
    fn rejects_zero_segment_size() {
        let config = GameConfig { segment_size: 0, ..GameConfig::default() };

        assert_eq!(config.validate(), Err(ConfigError::ZeroSegmentSize));
    }

    #[test]
    fn rejects_fields_that_are_not_whole_cells() {
        let config = GameConfig { field_height: 610, ..GameConfig::default() };

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnalignedField { axis: "height", value: 610, segment: 20 })
        );
    }

    #[test]
    fn rejects_grids_past_the_size_limit() {
        let config = GameConfig { field_width: 70_000, field_height: 70_000, segment_size: 1, seed: None };

        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooLarge { width: 70_000, height: 70_000, max: MAX_GRID_SIDE })
        );
    }

    #[test]
    fn one_side_over_the_limit_is_enough_to_reject() {
        let config = GameConfig { field_width: 20, field_height: 20 * (MAX_GRID_SIDE + 1), ..GameConfig::default() };

        assert!(matches!(config.validate(), Err(ConfigError::GridTooLarge { height, .. }) if height == MAX_GRID_SIDE + 1));
    }

    #[test]
    fn largest_grid_is_accepted() {
        let config = GameConfig { field_width: MAX_GRID_SIDE, field_height: MAX_GRID_SIDE, segment_size: 1, seed: None };
        let grid = config.validate().unwrap();

        assert_eq!((grid.width(), grid.height()), (MAX_GRID_SIDE as i32, MAX_GRID_SIDE as i32));
    }

    #[test]
    fn seeded_configs_give_the_same_rng() {
        use rand::Rng;

        let config = GameConfig { seed: Some(5), ..GameConfig::default() };

        assert_eq!(config.rng().gen::<u64>(), config.rng().gen::<u64>());
    }

    #[test]
    fn rejects_single_cell_grids() {
        let config = GameConfig { field_width: 20, field_height: 20, ..GameConfig::default() };

        assert_eq!(config.validate(), Err(ConfigError::GridTooSmall { width: 1, height: 1 }));
    }
}
