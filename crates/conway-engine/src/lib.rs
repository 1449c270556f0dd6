//! Parallel generation engine for Conway's Game of Life.
//!
//! Provides the per-cell update rules, the [`Dispatcher`] strategies that
//! fan those rules out over a board (serial, rayon tiled, rayon per-cell),
//! and [`LifeWorld`], the generation loop that drives a
//! [`PingPongBoards`](conway_arena::PingPongBoards) pair.
//!
//! Every dispatcher reads only the current board and writes each cell of
//! the next board exactly once, so all of them produce bit-identical
//! generations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod hash;
pub mod metrics;
pub mod render;
pub mod rules;
pub mod seed;
pub mod world;

pub use config::{ConfigError, DispatchMode, LifeConfig};
pub use dispatch::{Dispatcher, PerCellDispatch, SerialDispatch, TiledDispatch};
pub use metrics::{RunSummary, StepMetrics};
pub use world::{LifeWorld, StepResult};
