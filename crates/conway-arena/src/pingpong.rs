//! Double-buffered ping-pong board pair.
//!
//! [`PingPongBoards`] owns two boards of identical dimensions that
//! alternate between "current" (read-only during a step) and "next"
//! (write-only during a step). On [`PingPongBoards::publish`] the next
//! board becomes current and the old current board becomes the next
//! write target. No cell data is copied.
//!
//! The lifecycle per generation is:
//! 1. `begin_step()`: borrow current (shared) and next (exclusive)
//! 2. The update engine writes every cell of next from reads of current
//! 3. `publish()`: swap roles, advance the generation counter

use conway_core::{Generation, StepError};

use crate::board::Board;
use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// Which physical buffer plays a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferSlot {
    /// The first buffer (holds the initial board).
    A,
    /// The second buffer (allocated zeroed).
    B,
}

/// Split borrow of the pair for the duration of one step.
///
/// Created by [`PingPongBoards::begin_step()`] and dropped before
/// [`PingPongBoards::publish()`]. Holding `&mut` to the next board and
/// `&` to the current board makes it impossible to write the buffer
/// being read.
#[must_use]
pub struct StepGuard<'a> {
    /// The generation being read.
    pub current: &'a Board,
    /// The generation being written.
    pub next: &'a mut Board,
}

/// Two boards with alternating current/next roles.
///
/// # Buffer layout
///
/// ```text
/// buffer_a: Board  ←─── current (even generations) / next (odd)
/// buffer_b: Board  ←─── next (even generations) / current (odd)
/// ```
pub struct PingPongBoards {
    /// Buffer A; holds the initial board.
    buffer_a: Board,
    /// Buffer B; allocated zeroed as the first write target.
    buffer_b: Board,
    /// Which buffer is current (false = A current, true = B current).
    b_is_current: bool,
    /// Last published generation.
    generation: Generation,
    /// Whether `begin_step()` was called without a matching `publish()`.
    step_in_progress: bool,
}

impl PingPongBoards {
    /// Build a pair from the initial board, allocating a zeroed partner.
    ///
    /// Returns `Err(ArenaError)` if the partner board cannot be allocated
    /// or the initial board exceeds `config.max_cells`.
    pub fn new(initial: Board, config: ArenaConfig) -> Result<Self, ArenaError> {
        let space = initial.space();
        if space.cell_count() as u64 > config.max_cells {
            return Err(ArenaError::CapacityExceeded {
                requested: space.cell_count() as u64,
                capacity: config.max_cells,
            });
        }
        let buffer_b = Board::zeroed_with(space, &config)?;
        Ok(Self {
            buffer_a: initial,
            buffer_b,
            b_is_current: false,
            generation: Generation::ZERO,
            step_in_progress: false,
        })
    }

    /// Borrow current (shared) and next (exclusive) for one step.
    ///
    /// Calling this again before `publish()` discards the partially
    /// written next board; it is fully rewritten by the following step.
    ///
    /// Returns `Err(StepError::GenerationOverflow)` if no further
    /// generation can be published.
    pub fn begin_step(&mut self) -> Result<StepGuard<'_>, StepError> {
        if self.generation.checked_next().is_none() {
            return Err(StepError::GenerationOverflow {
                last: self.generation,
            });
        }
        self.step_in_progress = true;
        let (current, next) = if self.b_is_current {
            (&self.buffer_b, &mut self.buffer_a)
        } else {
            (&self.buffer_a, &mut self.buffer_b)
        };
        Ok(StepGuard { current, next })
    }

    /// Publish the next board, making it current.
    ///
    /// Returns `Err(StepError::InvalidState)` if `begin_step()` was not
    /// called first or if `publish()` is called twice in a row.
    pub fn publish(&mut self) -> Result<Generation, StepError> {
        if !self.step_in_progress {
            return Err(StepError::InvalidState {
                reason: "publish() called without a preceding begin_step()".into(),
            });
        }
        let next_gen = self
            .generation
            .checked_next()
            .ok_or(StepError::GenerationOverflow {
                last: self.generation,
            })?;
        self.b_is_current = !self.b_is_current;
        self.generation = next_gen;
        self.step_in_progress = false;
        Ok(next_gen)
    }

    /// The current (last published) board.
    pub fn current(&self) -> &Board {
        if self.b_is_current {
            &self.buffer_b
        } else {
            &self.buffer_a
        }
    }

    /// Which buffer currently holds the published board.
    pub fn current_slot(&self) -> BufferSlot {
        if self.b_is_current {
            BufferSlot::B
        } else {
            BufferSlot::A
        }
    }

    /// Last published generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Reset to generation 0 with `initial` as the current board.
    ///
    /// Reuses both buffers in place. Returns
    /// `Err(ArenaError::DimensionMismatch)` if `initial` has different
    /// dimensions from this pair.
    pub fn reset(&mut self, initial: &Board) -> Result<(), ArenaError> {
        self.buffer_a.copy_from(initial)?;
        self.buffer_b.clear();
        self.b_is_current = false;
        self.generation = Generation::ZERO;
        self.step_in_progress = false;
        Ok(())
    }

    /// Heap bytes held by both buffers.
    pub fn memory_bytes(&self) -> usize {
        self.buffer_a.memory_bytes() + self.buffer_b.memory_bytes()
    }

}

impl std::fmt::Debug for PingPongBoards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PingPongBoards")
            .field("generation", &self.generation)
            .field("current", &self.current_slot())
            .field("step_in_progress", &self.step_in_progress)
            .finish()
    }
}
