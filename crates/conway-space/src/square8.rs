//! Bounded 2D square grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::error::SpaceError;
use crate::grid2d;

/// All 8 offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// A bounded two-dimensional grid with 8-connected neighbourhood.
///
/// Each cell has coordinate `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`, stored row-major at `y * width + x`. Edge cells
/// simply have fewer neighbours: corners have 3, other edge cells 5,
/// interior cells 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square8 {
    width: u32,
    height: u32,
}

impl Square8 {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new `width x height` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        grid2d::resolve_axis(x, self.width).is_some()
            && grid2d::resolve_axis(y, self.height).is_some()
    }

    /// Flat row-major index of `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Row-major canonical ordering: `(0,0), (1,0), ..., (width-1, height-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = (i32, i32)> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}
