//! Run configuration, validation, and error types.
//!
//! [`LifeConfig`] collects the board geometry, seeding parameters, and
//! dispatch strategy for a run. [`validate()`](LifeConfig::validate)
//! checks every structural invariant before any board is allocated.

use std::error::Error;
use std::fmt;

use conway_arena::{ArenaConfig, ArenaError};
use conway_space::{SpaceError, Square8, TileGrid};

/// Default board width.
pub const DEFAULT_WIDTH: u32 = 64;
/// Default board height.
pub const DEFAULT_HEIGHT: u32 = 64;
/// Default probability that a seeded cell starts alive.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;
/// Default tile edge for [`DispatchMode::Tiled`].
pub const DEFAULT_TILE_EDGE: u32 = 16;
/// Default number of generations for a run.
pub const DEFAULT_GENERATIONS: u64 = 1_000_000;

// ── DispatchMode ───────────────────────────────────────────────────

/// How a generation step is fanned out over the board.
///
/// All modes produce bit-identical boards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// Single-threaded row-major loop.
    Serial,
    /// Rayon pool over bands of `tile_edge` rows, tile by tile.
    #[default]
    Tiled,
    /// Rayon parallel iterator with one task per cell.
    PerCell,
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "serial"),
            Self::Tiled => write!(f, "tiled"),
            Self::PerCell => write!(f, "per-cell"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`LifeConfig`] or building a world.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Board geometry or tiling is invalid.
    Space(SpaceError),
    /// Board allocation failed or exceeded its budget.
    Arena(ArenaError),
    /// `alive_probability` is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// The invalid value.
        value: f64,
    },
    /// An explicit thread count of zero was requested.
    ZeroThreads,
    /// The rayon worker pool could not be built.
    ThreadPool {
        /// Description from the pool builder.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::InvalidProbability { value } => {
                write!(f, "alive_probability must be within [0, 1], got {value}")
            }
            Self::ZeroThreads => write!(f, "threads must be at least 1"),
            Self::ThreadPool { reason } => write!(f, "thread pool build failed: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── LifeConfig ─────────────────────────────────────────────────────

/// Complete configuration for a run.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    /// Board width in cells. Default: 64.
    pub width: u32,
    /// Board height in cells. Default: 64.
    pub height: u32,
    /// Probability that a seeded cell starts alive. Default: 0.3.
    pub alive_probability: f64,
    /// Tile edge length for tiled dispatch. Need not divide the
    /// dimensions; edge tiles are clipped. Default: 16.
    pub tile_edge: u32,
    /// Generations to run. Default: 1,000,000.
    pub generations: u64,
    /// RNG seed for the initial board. `None` derives one from the clock.
    pub seed: Option<u64>,
    /// Dispatch strategy. Default: [`DispatchMode::Tiled`].
    pub dispatch: DispatchMode,
    /// Worker threads for parallel dispatch. `None` uses the rayon
    /// default (`RAYON_NUM_THREADS` or the number of logical CPUs).
    pub threads: Option<usize>,
    /// Render every intermediate generation. Default: off.
    pub render_each_generation: bool,
    /// Board allocation budget.
    pub arena: ArenaConfig,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            tile_edge: DEFAULT_TILE_EDGE,
            generations: DEFAULT_GENERATIONS,
            seed: None,
            dispatch: DispatchMode::default(),
            threads: None,
            render_each_generation: false,
            arena: ArenaConfig::default(),
        }
    }
}

impl LifeConfig {
    /// The board geometry described by this config.
    pub fn space(&self) -> Result<Square8, ConfigError> {
        Ok(Square8::new(self.width, self.height)?)
    }

    /// The tiling used by [`DispatchMode::Tiled`].
    pub fn tiles(&self) -> Result<TileGrid, ConfigError> {
        Ok(TileGrid::new(self.space()?, self.tile_edge)?)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Geometry and tiling.
        let tiles = self.tiles()?;
        // 2. Both boards must fit the allocation budget.
        let cells = tiles.space().cell_count() as u64;
        if cells > self.arena.max_cells {
            return Err(ConfigError::Arena(ArenaError::CapacityExceeded {
                requested: cells,
                capacity: self.arena.max_cells,
            }));
        }
        // 3. Probability in [0, 1]; NaN fails both comparisons.
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::InvalidProbability {
                value: self.alive_probability,
            });
        }
        // 4. Explicit thread count >= 1.
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 64);
        assert_eq!(config.tile_edge, 16);
        assert_eq!(config.alive_probability, 0.3);
        assert!(!config.render_each_generation);
        assert_eq!(config.dispatch, DispatchMode::Tiled);
    }

    #[test]
    fn zero_width_rejected() {
        let config = LifeConfig {
            width: 0,
            ..LifeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Space(SpaceError::EmptySpace))
        );
    }

    #[test]
    fn zero_tile_edge_rejected() {
        let config = LifeConfig {
            tile_edge: 0,
            ..LifeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Space(SpaceError::InvalidTileEdge { edge: 0 }))
        );
    }

    #[test]
    fn non_divisible_dimensions_accepted() {
        let config = LifeConfig {
            width: 50,
            height: 37,
            tile_edge: 16,
            ..LifeConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.tiles().unwrap().is_exact());
    }

    #[test]
    fn probability_out_of_range_rejected() {
        for value in [-0.1, 1.5, f64::NAN] {
            let config = LifeConfig {
                alive_probability: value,
                ..LifeConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidProbability { .. })
            ));
        }
    }

    #[test]
    fn probability_extremes_accepted() {
        for value in [0.0, 1.0] {
            let config = LifeConfig {
                alive_probability: value,
                ..LifeConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn zero_threads_rejected() {
        let config = LifeConfig {
            threads: Some(0),
            ..LifeConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroThreads));
    }

    #[test]
    fn over_budget_board_rejected() {
        let config = LifeConfig {
            arena: ArenaConfig::new(100),
            ..LifeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Arena(ArenaError::CapacityExceeded { .. }))
        ));
    }

    #[test]
    fn error_source_chains_to_space_error() {
        let err = ConfigError::from(SpaceError::EmptySpace);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "space: grid must have at least one cell");
    }
}
