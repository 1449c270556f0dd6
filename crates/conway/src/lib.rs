//! Conway's Game of Life on a bounded grid, stepped by parallel per-cell
//! update kernels over a pair of ping-pong boards.
//!
//! This is the facade crate that re-exports the public API of the
//! `conway-*` sub-crates and hosts the `conway` command-line binary.
//!
//! # Quick start
//!
//! ```rust
//! use conway::prelude::*;
//!
//! let config = LifeConfig {
//!     width: 32,
//!     height: 24,
//!     seed: Some(7),
//!     ..LifeConfig::default()
//! };
//! let mut world = LifeWorld::seeded(&config).unwrap();
//! let summary = world.run_silent(10).unwrap();
//! assert_eq!(summary.final_generation, Generation(10));
//! println!("{}", conway::engine::render::render(world.current()));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `conway-core` | Cell state, generation id, step errors, [`types::CellReader`] |
//! | [`space`] | `conway-space` | Bounded 8-neighbour geometry and tiling |
//! | [`arena`] | `conway-arena` | Board storage and the ping-pong buffer pair |
//! | [`engine`] | `conway-engine` | Rules, dispatchers, seeding, the generation loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;

/// Board storage and double buffering (`conway-arena`).
pub use conway_arena as arena;

/// Core types and traits (`conway-core`).
pub use conway_core as types;

/// Grid geometry and tile decomposition (`conway-space`).
///
/// [`space::Square8`] answers bounds and neighbour queries;
/// [`space::TileGrid`] splits a board into clipped square tiles.
pub use conway_space as space;

/// Generation engine (`conway-engine`).
///
/// [`engine::LifeWorld`] drives generations through any
/// [`engine::Dispatcher`].
pub use conway_engine as engine;

/// Common imports for typical usage.
pub mod prelude {
    // Core
    pub use conway_core::{CellReader, CellState, Generation, StepError};

    // Space
    pub use conway_space::{Square8, TileGrid};

    // Arena
    pub use conway_arena::{ArenaConfig, ArenaError, Board, PingPongBoards};

    // Engine
    pub use conway_engine::{
        ConfigError, DispatchMode, Dispatcher, LifeConfig, LifeWorld, RunSummary, StepMetrics,
        StepResult,
    };
}
