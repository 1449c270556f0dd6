//! Standard Life patterns placed on otherwise dead boards.

use conway_arena::{ArenaError, Board};
use conway_core::CellState;
use conway_space::Square8;

/// Place live cells at `offset + (dx, dy)` for each of `cells`.
pub fn place(
    width: u32,
    height: u32,
    offset: (i32, i32),
    cells: &[(i32, i32)],
) -> Result<Board, ArenaError> {
    let mut board = Board::zeroed(Square8::new(width, height)?)?;
    for &(dx, dy) in cells {
        board.set(offset.0 + dx, offset.1 + dy, CellState::Alive)?;
    }
    Ok(board)
}

/// 2x2 block (still life) with its top-left cell at `(x, y)`.
pub fn block(width: u32, height: u32, x: i32, y: i32) -> Result<Board, ArenaError> {
    place(width, height, (x, y), &[(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// Horizontal 3-cell blinker centred on the board.
pub fn blinker(width: u32, height: u32) -> Result<Board, ArenaError> {
    let (cx, cy) = (width as i32 / 2, height as i32 / 2);
    place(width, height, (cx, cy), &[(-1, 0), (0, 0), (1, 0)])
}

/// Vertical 3-cell blinker centred on the board (phase 2 of [`blinker`]).
pub fn blinker_vertical(width: u32, height: u32) -> Result<Board, ArenaError> {
    let (cx, cy) = (width as i32 / 2, height as i32 / 2);
    place(width, height, (cx, cy), &[(0, -1), (0, 0), (0, 1)])
}

/// South-east travelling glider with its bounding box's top-left at `(x, y)`.
///
/// ```text
/// .#.
/// ..#
/// ###
/// ```
pub fn glider(width: u32, height: u32, x: i32, y: i32) -> Result<Board, ArenaError> {
    place(
        width,
        height,
        (x, y),
        &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    )
}

/// Beehive (still life) with its bounding box's top-left at `(x, y)`.
///
/// ```text
/// .##.
/// #..#
/// .##.
/// ```
pub fn beehive(width: u32, height: u32, x: i32, y: i32) -> Result<Board, ArenaError> {
    place(
        width,
        height,
        (x, y),
        &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    )
}

/// Toad (period-2 oscillator) with its bounding box's top-left at `(x, y)`.
///
/// ```text
/// .###
/// ###.
/// ```
pub fn toad(width: u32, height: u32, x: i32, y: i32) -> Result<Board, ArenaError> {
    place(
        width,
        height,
        (x, y),
        &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populations() {
        assert_eq!(block(4, 4, 1, 1).unwrap().population(), 4);
        assert_eq!(blinker(5, 5).unwrap().population(), 3);
        assert_eq!(glider(8, 8, 0, 0).unwrap().population(), 5);
        assert_eq!(beehive(6, 5, 1, 1).unwrap().population(), 6);
        assert_eq!(toad(6, 6, 1, 2).unwrap().population(), 6);
    }

    #[test]
    fn out_of_bounds_placement_fails() {
        assert!(matches!(
            block(4, 4, 3, 3),
            Err(ArenaError::CoordOutOfBounds { .. })
        ));
    }
}
