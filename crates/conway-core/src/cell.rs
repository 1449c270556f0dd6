//! The binary cell state.

use std::fmt;

/// State of a single cell: alive (1) or dead (0).
///
/// `#[repr(u8)]` keeps a board buffer at one byte per cell, and the
/// discriminants double as the value summed by neighbour counting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellState {
    /// Dead cell. Also the value of every out-of-bounds coordinate.
    #[default]
    Dead = 0,
    /// Live cell.
    Alive = 1,
}

impl CellState {
    /// Returns `true` for [`CellState::Alive`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// `1` for alive, `0` for dead.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<CellState> for bool {
    fn from(state: CellState) -> Self {
        state.is_alive()
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "dead"),
            Self::Alive => write!(f, "alive"),
        }
    }
}
