//! Flat, row-major storage for one generation of cells.

use conway_core::{CellReader, CellState};
use conway_space::Square8;

use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// A `width x height` grid of cells in one contiguous buffer.
///
/// Cell `(x, y)` lives at index `y * width + x`. Reads through
/// [`get`](Board::get) are boundary-safe: any coordinate outside the
/// grid reads as [`CellState::Dead`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    space: Square8,
    cells: Vec<CellState>,
}

impl Board {
    /// Allocate an all-dead board using the default [`ArenaConfig`].
    pub fn zeroed(space: Square8) -> Result<Self, ArenaError> {
        Self::zeroed_with(space, &ArenaConfig::default())
    }

    /// Allocate an all-dead board, enforcing `config.max_cells`.
    ///
    /// Returns `Err(ArenaError::CapacityExceeded)` when the grid is over
    /// budget and `Err(ArenaError::AllocationFailed)` when the allocator
    /// cannot provide the buffer. Never returns a short buffer.
    pub fn zeroed_with(space: Square8, config: &ArenaConfig) -> Result<Self, ArenaError> {
        let n = space.cell_count();
        if n as u64 > config.max_cells {
            return Err(ArenaError::CapacityExceeded {
                requested: n as u64,
                capacity: config.max_cells,
            });
        }
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(n)
            .map_err(|_| ArenaError::AllocationFailed {
                requested: ArenaConfig::bytes_for(n),
            })?;
        cells.resize(n, CellState::Dead);
        Ok(Self { space, cells })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `Err(ArenaError::LengthMismatch)` unless
    /// `cells.len() == width * height`.
    pub fn from_cells(space: Square8, cells: Vec<CellState>) -> Result<Self, ArenaError> {
        if cells.len() != space.cell_count() {
            return Err(ArenaError::LengthMismatch {
                expected: space.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { space, cells })
    }

    /// Allocate a board and fill each cell from `f(x, y)`, row-major.
    pub fn from_fn(
        space: Square8,
        mut f: impl FnMut(i32, i32) -> CellState,
    ) -> Result<Self, ArenaError> {
        let mut board = Self::zeroed(space)?;
        let w = space.width() as usize;
        for (i, cell) in board.cells.iter_mut().enumerate() {
            *cell = f((i % w) as i32, (i / w) as i32);
        }
        Ok(board)
    }

    /// Grid geometry.
    pub fn space(&self) -> Square8 {
        self.space
    }

    /// State at `(x, y)`, or dead when out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> CellState {
        match self.space.index(x, y) {
            Some(i) => self.cells[i],
            None => CellState::Dead,
        }
    }

    /// Write the cell at `(x, y)`.
    ///
    /// Returns `Err(ArenaError::CoordOutOfBounds)` for coordinates
    /// outside the grid; the buffer is left untouched.
    pub fn set(&mut self, x: i32, y: i32, value: CellState) -> Result<(), ArenaError> {
        let i = self
            .space
            .index(x, y)
            .ok_or(ArenaError::CoordOutOfBounds {
                coord: (x, y),
                dimensions: (self.space.width(), self.space.height()),
            })?;
        self.cells[i] = value;
        Ok(())
    }

    /// The whole buffer, row-major.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Mutable access to the whole buffer, row-major.
    ///
    /// Used by dispatchers to split the buffer into disjoint chunks.
    pub fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[CellState]> {
        if y >= self.space.height() {
            return None;
        }
        let w = self.space.width() as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterator over all rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, CellState> {
        self.cells.chunks_exact(self.space.width() as usize)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Overwrite this board with the contents of `other`.
    ///
    /// Returns `Err(ArenaError::DimensionMismatch)` if the grids differ.
    pub fn copy_from(&mut self, other: &Board) -> Result<(), ArenaError> {
        if self.space != other.space {
            return Err(ArenaError::DimensionMismatch {
                expected: (self.space.width(), self.space.height()),
                actual: (other.space.width(), other.space.height()),
            });
        }
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Heap bytes held by the cell buffer.
    pub fn memory_bytes(&self) -> usize {
        ArenaConfig::bytes_for(self.cells.capacity())
    }
}

impl CellReader for Board {
    fn width(&self) -> u32 {
        self.space.width()
    }

    fn height(&self) -> u32 {
        self.space.height()
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> CellState {
        Board::get(self, x, y)
    }

    fn population(&self) -> usize {
        Board::population(self)
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.space.width())
            .field("height", &self.space.height())
            .field("population", &self.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn space(w: u32, h: u32) -> Square8 {
        Square8::new(w, h).unwrap()
    }

    #[test]
    fn zeroed_board_is_all_dead() {
        let b = Board::zeroed(space(8, 4)).unwrap();
        assert_eq!(b.cells().len(), 32);
        assert_eq!(b.population(), 0);
    }

    #[test]
    fn set_then_get() {
        let mut b = Board::zeroed(space(4, 4)).unwrap();
        b.set(2, 1, CellState::Alive).unwrap();
        assert_eq!(b.get(2, 1), CellState::Alive);
        assert_eq!(b.cells()[4 + 2], CellState::Alive);
        assert_eq!(b.population(), 1);
    }

    #[test]
    fn out_of_bounds_reads_are_dead() {
        let b = Board::from_fn(space(3, 3), |_, _| CellState::Alive).unwrap();
        assert_eq!(b.get(-1, 0), CellState::Dead);
        assert_eq!(b.get(0, -1), CellState::Dead);
        assert_eq!(b.get(3, 0), CellState::Dead);
        assert_eq!(b.get(0, 3), CellState::Dead);
        assert_eq!(b.get(-1, -1), CellState::Dead);
        assert_eq!(b.get(i32::MAX, i32::MIN), CellState::Dead);
    }

    #[test]
    fn out_of_bounds_set_is_rejected() {
        let mut b = Board::zeroed(space(3, 3)).unwrap();
        assert_eq!(
            b.set(3, 0, CellState::Alive),
            Err(ArenaError::CoordOutOfBounds {
                coord: (3, 0),
                dimensions: (3, 3),
            })
        );
        assert_eq!(b.population(), 0);
    }

    #[test]
    fn capacity_budget_is_enforced() {
        let config = ArenaConfig::new(15);
        assert_eq!(
            Board::zeroed_with(space(4, 4), &config),
            Err(ArenaError::CapacityExceeded {
                requested: 16,
                capacity: 15,
            })
        );
        assert!(Board::zeroed_with(space(3, 5), &config).is_ok());
    }

    #[test]
    fn from_cells_checks_length() {
        let err = Board::from_cells(space(2, 2), vec![CellState::Dead; 3]).unwrap_err();
        assert_eq!(
            err,
            ArenaError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn rows_are_row_major() {
        let b = Board::from_fn(space(3, 2), |x, y| CellState::from(x == y)).unwrap();
        let rows: Vec<_> = b.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            &[CellState::Dead, CellState::Alive, CellState::Dead]
        );
        assert_eq!(b.row(1), Some(rows[1]));
        assert_eq!(b.row(2), None);
    }

    #[test]
    fn copy_from_requires_same_dimensions() {
        let src = Board::from_fn(space(2, 2), |_, _| CellState::Alive).unwrap();
        let mut dst = Board::zeroed(space(2, 2)).unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(dst, src);

        let mut wrong = Board::zeroed(space(2, 3)).unwrap();
        assert!(matches!(
            wrong.copy_from(&src),
            Err(ArenaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn clear_kills_everything() {
        let mut b = Board::from_fn(space(4, 4), |_, _| CellState::Alive).unwrap();
        b.clear();
        assert_eq!(b.population(), 0);
    }

    proptest! {
        #[test]
        fn get_matches_flat_buffer(w in 1u32..20, h in 1u32..20, x in -3i32..23, y in -3i32..23) {
            let b = Board::from_fn(space(w, h), |x, y| CellState::from((x * 7 + y * 3) % 5 == 0)).unwrap();
            let expected = if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                b.cells()[(y as u32 * w + x as u32) as usize]
            } else {
                CellState::Dead
            };
            prop_assert_eq!(b.get(x, y), expected);
        }
    }
}
