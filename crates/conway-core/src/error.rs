//! Error types for generation steps.

use std::error::Error;
use std::fmt;

use crate::id::Generation;

/// Errors from the update engine during a generation step.
///
/// A step either completes for every cell or returns one of these
/// before the next buffer is published; there is no partial step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The current and next boards do not have identical dimensions.
    DimensionMismatch {
        /// `(width, height)` of the board being read.
        current: (u32, u32),
        /// `(width, height)` of the board being written.
        next: (u32, u32),
    },
    /// The generation counter cannot advance past `u64::MAX`.
    GenerationOverflow {
        /// The last generation that was published.
        last: Generation,
    },
    /// The double buffer was driven out of order
    /// (e.g. publish without a step in progress).
    InvalidState {
        /// Description of the misuse.
        reason: String,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { current, next } => write!(
                f,
                "board dimension mismatch: current is {}x{}, next is {}x{}",
                current.0, current.1, next.0, next.1
            ),
            Self::GenerationOverflow { last } => {
                write!(f, "generation counter overflow after generation {last}")
            }
            Self::InvalidState { reason } => write!(f, "invalid step state: {reason}"),
        }
    }
}

impl Error for StepError {}
