//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use conway_space::SpaceError;

/// Errors that can occur while allocating or addressing boards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The allocator could not provide the board buffer.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// The board would exceed the configured cell budget.
    CapacityExceeded {
        /// Number of cells requested.
        requested: u64,
        /// Configured per-board maximum.
        capacity: u64,
    },
    /// A write targeted a coordinate outside the board.
    CoordOutOfBounds {
        /// The offending `(x, y)`.
        coord: (i32, i32),
        /// `(width, height)` of the board.
        dimensions: (u32, u32),
    },
    /// A cell buffer does not have `width * height` elements.
    LengthMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// Two boards that must share dimensions do not.
    DimensionMismatch {
        /// `(width, height)` expected.
        expected: (u32, u32),
        /// `(width, height)` supplied.
        actual: (u32, u32),
    },
    /// Grid construction failed.
    Space(SpaceError),
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "board allocation failed: requested {requested} bytes")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "board capacity exceeded: requested {requested} cells, capacity {capacity} cells"
                )
            }
            Self::CoordOutOfBounds { coord, dimensions } => write!(
                f,
                "coordinate {coord:?} outside {}x{} board",
                dimensions.0, dimensions.1
            ),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ArenaError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
