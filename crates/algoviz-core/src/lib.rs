//! Shared data model for the instrumented algorithm engines.
//!
//! Both trace producers (sorting and grid search) emit the same closed set of
//! [`StepRecord`] variants into a [`Trace`]. This crate defines that vocabulary
//! together with the search domain ([`Grid`], [`Position`]), the algorithm
//! selectors, and the error taxonomy shared by every entry point.

pub mod algorithm;
pub mod error;
pub mod grid;
pub mod position;
pub mod step;
pub mod trace;

// Re-export commonly used types
pub use algorithm::{SearchAlgorithm, SortAlgorithm};
pub use error::{Endpoint, TraceError};
pub use grid::{Cell, Grid, DIRECTIONS};
pub use position::Position;
pub use step::StepRecord;
pub use trace::{Trace, TraceRecorder, TraceStats};
