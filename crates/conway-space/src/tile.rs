//! Decomposition of a grid into square tiles for parallel dispatch.
//!
//! Tiles are `edge x edge` blocks laid out row-major. When a dimension
//! is not a multiple of `edge`, the last tile in that direction is
//! clipped to the grid, so every cell belongs to exactly one tile
//! whatever the grid size.

use std::ops::Range;

use crate::error::SpaceError;
use crate::square8::Square8;

/// One rectangular block of cells, `[x0, x0 + width) x [y0, y0 + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Leftmost column.
    pub x0: u32,
    /// Top row.
    pub y0: u32,
    /// Number of columns (at most the tile edge).
    pub width: u32,
    /// Number of rows (at most the tile edge).
    pub height: u32,
}

impl Tile {
    /// Column range covered by this tile.
    pub fn columns(&self) -> Range<u32> {
        self.x0..self.x0 + self.width
    }

    /// Row range covered by this tile.
    pub fn rows(&self) -> Range<u32> {
        self.y0..self.y0 + self.height
    }

    /// Number of cells in this tile.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Row-major tiling of a [`Square8`] grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    space: Square8,
    edge: u32,
    tiles_x: u32,
    tiles_y: u32,
}

impl TileGrid {
    /// Tile `space` with square tiles of side `edge`.
    ///
    /// Returns `Err(SpaceError::InvalidTileEdge)` when `edge` is 0.
    pub fn new(space: Square8, edge: u32) -> Result<Self, SpaceError> {
        if edge == 0 {
            return Err(SpaceError::InvalidTileEdge { edge });
        }
        Ok(Self {
            space,
            edge,
            tiles_x: space.width().div_ceil(edge),
            tiles_y: space.height().div_ceil(edge),
        })
    }

    /// The tiled grid.
    pub fn space(&self) -> Square8 {
        self.space
    }

    /// Tile side length.
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Number of tile columns.
    pub fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    /// Number of tile rows (bands).
    pub fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    /// Whether both dimensions are exact multiples of the edge (no clipped tiles).
    pub fn is_exact(&self) -> bool {
        self.space.width() % self.edge == 0 && self.space.height() % self.edge == 0
    }

    /// The tile at tile-coordinate `(tx, ty)`, clipped to the grid.
    pub fn tile(&self, tx: u32, ty: u32) -> Option<Tile> {
        if tx >= self.tiles_x || ty >= self.tiles_y {
            return None;
        }
        let x0 = tx * self.edge;
        let y0 = ty * self.edge;
        Some(Tile {
            x0,
            y0,
            width: self.edge.min(self.space.width() - x0),
            height: self.edge.min(self.space.height() - y0),
        })
    }

    /// The rows covered by band `ty` (one row of tiles).
    ///
    /// Empty at the bottom edge when `ty >= tiles_y()`.
    pub fn band_rows(&self, ty: u32) -> Range<u32> {
        let height = self.space.height();
        let y0 = ty.saturating_mul(self.edge).min(height);
        let y1 = y0.saturating_add(self.edge).min(height);
        y0..y1
    }

    /// Number of cells in a full band: `edge * width`.
    ///
    /// This is the chunk length used to split a row-major buffer into
    /// bands; the last band may be shorter.
    pub fn band_len(&self) -> usize {
        self.edge as usize * self.space.width() as usize
    }

    /// Tiles in band `ty`, left to right.
    pub fn band(&self, ty: u32) -> impl Iterator<Item = Tile> + '_ {
        (0..self.tiles_x).filter_map(move |tx| self.tile(tx, ty))
    }

    /// Every tile, row-major.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.tiles_y).flat_map(move |ty| self.band(ty))
    }
}
