//! Read access to a grid of cells.

use crate::cell::CellState;

/// Boundary-safe read access to a bounded 2D grid of cells.
///
/// Implementors must return [`CellState::Dead`] for every coordinate
/// outside `[0, width) x [0, height)`; this is the dead-boundary policy
/// the update rules rely on. Coordinates are signed so that the
/// neighbours of edge cells (`x - 1` at `x == 0`) are expressible.
pub trait CellReader {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// State at `(x, y)`, or dead when out of bounds. Never panics.
    fn get(&self, x: i32, y: i32) -> CellState;

    /// `(width, height)`.
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Number of live cells, scanning every in-bounds coordinate.
    fn population(&self) -> usize {
        let mut live = 0;
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                live += self.get(x, y).as_u8() as usize;
            }
        }
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 2x2 reader with only (1, 0) alive.
    struct Tiny;

    impl CellReader for Tiny {
        fn width(&self) -> u32 {
            2
        }
        fn height(&self) -> u32 {
            2
        }
        fn get(&self, x: i32, y: i32) -> CellState {
            CellState::from(x == 1 && y == 0)
        }
    }

    #[test]
    fn default_dimensions_and_population() {
        assert_eq!(Tiny.dimensions(), (2, 2));
        assert_eq!(Tiny.population(), 1);
    }
}
