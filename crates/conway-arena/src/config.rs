//! Arena configuration parameters.

use conway_core::CellState;

/// Configuration for board allocation.
///
/// Caps how many cells a single board may hold so that an oversized
/// grid is rejected with [`ArenaError::CapacityExceeded`](crate::ArenaError)
/// before any memory is requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Maximum number of cells per board.
    ///
    /// Default: 2^30 (1 GiB per board at one byte per cell).
    pub max_cells: u64,
}

impl ArenaConfig {
    /// Default per-board cell budget.
    pub const DEFAULT_MAX_CELLS: u64 = 1 << 30;

    /// Create a config with the given per-board cell budget.
    pub fn new(max_cells: u64) -> Self {
        Self { max_cells }
    }

    /// Bytes needed to store `cells` cells.
    pub fn bytes_for(cells: usize) -> usize {
        cells.saturating_mul(std::mem::size_of::<CellState>())
    }

}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CELLS)
    }
}
