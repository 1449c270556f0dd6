//! Test utilities and pattern fixtures for Conway development.
//!
//! Provides [`parse_board`] for writing boards as ASCII art in tests,
//! and [`patterns`] with the standard still lifes, oscillators, and
//! spaceships used across the workspace's test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;

use conway_arena::{ArenaError, Board};
use conway_core::CellState;
use conway_space::Square8;

/// Build a board from rows of ASCII art.
///
/// `#`, `O`, `*` and `1` are alive; every other character is dead. All
/// rows must have the same length.
pub fn parse_board(rows: &[&str]) -> Result<Board, ArenaError> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let space = Square8::new(width, height)?;

    let mut cells = Vec::with_capacity(space.cell_count());
    for row in rows {
        let before = cells.len();
        cells.extend(row.chars().map(|ch| CellState::from(matches!(ch, '#' | 'O' | '*' | '1'))));
        if cells.len() - before != width as usize {
            return Err(ArenaError::LengthMismatch {
                expected: width as usize,
                actual: cells.len() - before,
            });
        }
    }
    Board::from_cells(space, cells)
}

/// Coordinates of every live cell, row-major.
pub fn live_cells(board: &Board) -> Vec<(i32, i32)> {
    board
        .space()
        .canonical_ordering()
        .filter(|&(x, y)| board.get(x, y).is_alive())
        .collect()
}
