//! Board storage and double buffering for the Conway generation engine.
//!
//! # Architecture
//!
//! ```text
//! PingPongBoards (orchestrator)
//! ├── Board × 2 (alternating current/next)
//! │   └── Vec<CellState> (row-major, one byte per cell)
//! └── Generation counter (advanced on publish)
//! ```
//!
//! Both boards are allocated once at construction and reused in place
//! every generation. A step borrows the current board shared and the
//! next board exclusively through a [`StepGuard`]; [`PingPongBoards::publish`]
//! flips which buffer is current without copying any cell data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod error;
pub mod pingpong;

pub use board::Board;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use pingpong::{BufferSlot, PingPongBoards, StepGuard};
