//! Instrumented sorting and grid-search engines.
//!
//! Each engine runs its algorithm to completion on a private working copy of
//! the input and returns the full [`Trace`] of micro-operations it performed.
//! Inputs are validated up front: a run either fails before recording any step
//! or yields a complete trace ending in a single `complete` record.
//!
//! - [`sort::run`] drives the five comparison sorts.
//! - [`search::run`] drives breadth-first and depth-first grid search.
//! - [`input`] holds the conveniences used by the CLI and server (seeded
//!   random arrays, manual text parsing, JSON decoding of arrays, grids and
//!   positions).

pub mod input;
pub mod search;
pub mod sort;

pub use algoviz_core::{
    Grid, Position, SearchAlgorithm, SortAlgorithm, StepRecord, Trace, TraceError,
};
