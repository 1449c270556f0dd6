//! Error types for space operations.

use std::fmt;

/// Errors arising from grid or tiling construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// The tile edge length must be at least 1.
    InvalidTileEdge {
        /// The rejected edge length.
        edge: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::InvalidTileEdge { edge } => {
                write!(f, "tile edge must be at least 1 (got {edge})")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
