//! Strongly-typed generation counter.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// Generation 0 is the initial (seeded) board. Incremented each time
/// the engine publishes a completed step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The initial generation.
    pub const ZERO: Self = Self(0);

    /// The following generation, or `None` on `u64` overflow.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
