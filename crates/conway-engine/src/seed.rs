//! Random initial boards.
//!
//! Each cell is independently alive with probability `p`: a uniform
//! draw in `[0, 1)` at or above the threshold `1 - p` makes it alive
//! (so the default `p = 0.3` is a draw above `0.7`). The RNG is a
//! ChaCha8 stream seeded once per board, so a fixed seed reproduces the
//! same board on every platform.

use std::time::{SystemTime, UNIX_EPOCH};

use conway_arena::{ArenaConfig, ArenaError, Board};
use conway_core::CellState;
use conway_space::Square8;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seed derived from the wall clock, for runs that should differ.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Allocate a board and fill it randomly.
///
/// `alive_probability` is clamped into `[0, 1]`; `0.0` gives an all-dead
/// board and `1.0` an all-alive one.
pub fn random_board(
    space: Square8,
    alive_probability: f64,
    seed: u64,
    config: &ArenaConfig,
) -> Result<Board, ArenaError> {
    let mut board = Board::zeroed_with(space, config)?;
    fill_random(&mut board, alive_probability, seed);
    Ok(board)
}

/// Refill an existing board in place.
pub fn fill_random(board: &mut Board, alive_probability: f64, seed: u64) {
    let threshold = 1.0 - alive_probability.clamp(0.0, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for cell in board.cells_mut() {
        let draw: f64 = rng.random();
        *cell = CellState::from(draw >= threshold);
    }
}
