//! Core types and traits for the Conway generation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: the
//! binary [`CellState`], the [`Generation`] counter, step error types,
//! and the [`CellReader`] trait implemented by every board view.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::CellState;
pub use error::StepError;
pub use id::Generation;
pub use traits::CellReader;
