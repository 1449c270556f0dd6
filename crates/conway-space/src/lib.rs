//! Spatial geometry for the Conway generation engine.
//!
//! The only topology is a finite, bounded 2D square grid with an
//! 8-connected neighbourhood. Cells beyond the edge do not exist: they
//! are never neighbours and read as dead. There is no wraparound.
//!
//! - [`Square8`]: grid dimensions, coordinate/index mapping, the 8 neighbour offsets
//! - [`TileGrid`]: decomposition of a grid into `edge x edge` tiles, with
//!   remainder tiles clipped at the right and bottom edges

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod grid2d;
pub mod square8;
pub mod tile;

pub use error::SpaceError;
pub use square8::{Square8, OFFSETS_8};
pub use tile::{Tile, TileGrid};
