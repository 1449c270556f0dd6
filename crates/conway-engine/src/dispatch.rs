//! Fan-out strategies for one generation step.
//!
//! A [`Dispatcher`] is a "parallel map over all grid coordinates": it
//! evaluates [`evolve_cell`] for every cell of the current board and
//! stores the result in the next board. Implementations differ only in
//! how the work is split. Each cell's output index is written by exactly
//! one task and the current board is only read, so every strategy gives
//! the same board.

use conway_arena::Board;
use conway_core::{CellState, StepError};
use conway_space::TileGrid;
use rayon::prelude::*;

use crate::config::{ConfigError, DispatchMode, LifeConfig};
use crate::rules::evolve_cell;

/// Computes the next generation of a board.
pub trait Dispatcher: Send + Sync {
    /// Short name used in logs and benchmarks.
    fn name(&self) -> &str;

    /// Write the successor of `current` into `next`.
    ///
    /// Every cell of `next` is overwritten; its previous contents are
    /// irrelevant. Returns `Err(StepError::DimensionMismatch)` if the
    /// boards differ in size, in which case `next` is untouched.
    fn step(&self, current: &Board, next: &mut Board) -> Result<(), StepError>;
}

/// Build the dispatcher selected by `config`.
pub fn from_config(config: &LifeConfig) -> Result<Box<dyn Dispatcher>, ConfigError> {
    Ok(match config.dispatch {
        DispatchMode::Serial => Box::new(SerialDispatch),
        DispatchMode::Tiled => Box::new(TiledDispatch::new(config.tile_edge, config.threads)?),
        DispatchMode::PerCell => Box::new(PerCellDispatch::new(config.threads)?),
    })
}

fn check_dimensions(current: &Board, next: &Board) -> Result<(), StepError> {
    if current.space() != next.space() {
        let c = current.space();
        let n = next.space();
        return Err(StepError::DimensionMismatch {
            current: (c.width(), c.height()),
            next: (n.width(), n.height()),
        });
    }
    Ok(())
}

fn build_pool(threads: Option<usize>) -> Result<rayon::ThreadPool, ConfigError> {
    if threads == Some(0) {
        return Err(ConfigError::ZeroThreads);
    }
    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|i| format!("conway-worker-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| ConfigError::ThreadPool {
        reason: e.to_string(),
    })
}

// ── SerialDispatch ─────────────────────────────────────────────────

/// Single-threaded row-major loop. The reference decomposition.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialDispatch;

impl Dispatcher for SerialDispatch {
    fn name(&self) -> &str {
        "serial"
    }

    fn step(&self, current: &Board, next: &mut Board) -> Result<(), StepError> {
        check_dimensions(current, next)?;
        let w = current.space().width() as usize;
        for (y, row) in next.cells_mut().chunks_exact_mut(w).enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = evolve_cell(current, x as i32, y as i32);
            }
        }
        Ok(())
    }
}

// ── TiledDispatch ──────────────────────────────────────────────────

/// Rayon pool over bands of `tile_edge` rows.
///
/// The next buffer is split into disjoint `&mut` bands of
/// `tile_edge * width` cells (the last band may be shorter). Each band
/// is walked tile by tile; tiles at the right and bottom edges are
/// clipped when the dimensions are not multiples of `tile_edge`.
pub struct TiledDispatch {
    tile_edge: u32,
    pool: rayon::ThreadPool,
}

impl TiledDispatch {
    /// Build a tiled dispatcher with its own worker pool.
    ///
    /// `threads: None` uses the rayon default thread count.
    pub fn new(tile_edge: u32, threads: Option<usize>) -> Result<Self, ConfigError> {
        if tile_edge == 0 {
            return Err(ConfigError::Space(
                conway_space::SpaceError::InvalidTileEdge { edge: tile_edge },
            ));
        }
        Ok(Self {
            tile_edge,
            pool: build_pool(threads)?,
        })
    }

    /// Tile side length.
    pub fn tile_edge(&self) -> u32 {
        self.tile_edge
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Dispatcher for TiledDispatch {
    fn name(&self) -> &str {
        "tiled"
    }

    fn step(&self, current: &Board, next: &mut Board) -> Result<(), StepError> {
        check_dimensions(current, next)?;
        let tiles = TileGrid::new(current.space(), self.tile_edge).map_err(|e| {
            StepError::InvalidState {
                reason: e.to_string(),
            }
        })?;
        let w = current.space().width() as usize;
        let band_len = tiles.band_len();

        self.pool.install(|| {
            next.cells_mut()
                .par_chunks_mut(band_len)
                .enumerate()
                .for_each(|(ty, band)| {
                    let ty = ty as u32;
                    let y0 = tiles.band_rows(ty).start;
                    for tile in tiles.band(ty) {
                        evolve_tile(current, band, y0, w, tile.rows(), tile.columns());
                    }
                });
        });
        Ok(())
    }
}

/// Evolve the cells of one tile into `band`, a row-major slice whose
/// first row is grid row `y0`.
#[inline]
fn evolve_tile(
    current: &Board,
    band: &mut [CellState],
    y0: u32,
    width: usize,
    rows: std::ops::Range<u32>,
    columns: std::ops::Range<u32>,
) {
    for y in rows {
        let row_start = (y - y0) as usize * width;
        for x in columns.clone() {
            band[row_start + x as usize] = evolve_cell(current, x as i32, y as i32);
        }
    }
}

impl std::fmt::Debug for TiledDispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TiledDispatch")
            .field("tile_edge", &self.tile_edge)
            .field("threads", &self.threads())
            .finish()
    }
}

// ── PerCellDispatch ────────────────────────────────────────────────

/// Rayon parallel iterator with one logical task per cell.
///
/// Mirrors a one-worker-per-cell kernel launch; rayon batches the
/// tasks onto its pool.
pub struct PerCellDispatch {
    pool: rayon::ThreadPool,
}

impl PerCellDispatch {
    /// Build a per-cell dispatcher with its own worker pool.
    pub fn new(threads: Option<usize>) -> Result<Self, ConfigError> {
        Ok(Self {
            pool: build_pool(threads)?,
        })
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Dispatcher for PerCellDispatch {
    fn name(&self) -> &str {
        "per-cell"
    }

    fn step(&self, current: &Board, next: &mut Board) -> Result<(), StepError> {
        check_dimensions(current, next)?;
        let w = current.space().width() as usize;
        self.pool.install(|| {
            next.cells_mut()
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, cell)| {
                    *cell = evolve_cell(current, (i % w) as i32, (i / w) as i32);
                });
        });
        Ok(())
    }
}

impl std::fmt::Debug for PerCellDispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerCellDispatch")
            .field("threads", &self.threads())
            .finish()
    }
}
