//! The Game of Life transition rules.
//!
//! A cell's next state depends only on its own current state and the
//! number of live cells among its eight neighbours. Neighbour lookups go
//! through [`CellReader::get`], so positions beyond the edge count as dead.

use conway_core::{CellReader, CellState};
use conway_space::OFFSETS_8;

/// Number of live cells among the 8 neighbours of `(x, y)`, self excluded.
///
/// Always in `0..=8`. Out-of-bounds neighbours contribute 0.
#[inline]
pub fn count_live_neighbours<R: CellReader + ?Sized>(board: &R, x: i32, y: i32) -> u8 {
    let mut live = 0;
    for (dx, dy) in OFFSETS_8 {
        live += board.get(x.wrapping_add(dx), y.wrapping_add(dy)).as_u8();
    }
    live
}

/// Apply the transition rules to one cell.
///
/// - fewer than 2 live neighbours: dies (under-population)
/// - more than 3: dies (overcrowding)
/// - exactly 3 and dead: becomes alive (reproduction)
/// - otherwise the state carries over (a live cell survives on 2 or 3,
///   a dead cell with 2 stays dead)
#[inline]
pub fn next_state(current: CellState, live_neighbours: u8) -> CellState {
    match (current, live_neighbours) {
        (_, 0..=1) => CellState::Dead,
        (_, 4..) => CellState::Dead,
        (CellState::Dead, 3) => CellState::Alive,
        (state, _) => state,
    }
}

/// Next state of the cell at `(x, y)` on `board`.
#[inline]
pub fn evolve_cell<R: CellReader + ?Sized>(board: &R, x: i32, y: i32) -> CellState {
    next_state(board.get(x, y), count_live_neighbours(board, x, y))
}
