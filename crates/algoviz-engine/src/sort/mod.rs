//! Instrumented comparison sorts.
//!
//! [`run`] validates the input, copies it into a private working array, and
//! hands that array to the selected algorithm together with a
//! [`TraceRecorder`]. Every algorithm ends by marking each index `sorted`
//! exactly once; `run` then appends the terminal `complete`.
//!
//! The per-algorithm emission order is fixed; playback layers depend on it
//! step for step.

mod bubble;
mod heap;
mod insertion;
mod quick;
mod selection;

use algoviz_core::{SortAlgorithm, Trace, TraceError, TraceRecorder};

/// Sorts a private copy of `values` with `algorithm`, recording every step.
///
/// The caller's slice is never mutated. Fails with
/// [`TraceError::InvalidInput`] before recording anything when a value is
/// NaN or infinite.
pub fn run(algorithm: SortAlgorithm, values: &[f64]) -> Result<Trace, TraceError> {
    validate(values)?;

    let mut array = values.to_vec();
    let mut rec = TraceRecorder::new();

    if !array.is_empty() {
        match algorithm {
            SortAlgorithm::Bubble => bubble::sort(&mut array, &mut rec),
            SortAlgorithm::Selection => selection::sort(&mut array, &mut rec),
            SortAlgorithm::Insertion => insertion::sort(&mut array, &mut rec),
            SortAlgorithm::Quick => quick::sort(&mut array, &mut rec),
            SortAlgorithm::Heap => heap::sort(&mut array, &mut rec),
        }
    }

    Ok(rec.finish())
}

/// Parses the selector and runs it. Convenience for string-keyed callers.
pub fn run_named(algorithm: &str, values: &[f64]) -> Result<Trace, TraceError> {
    run(algorithm.parse()?, values)
}

fn validate(values: &[f64]) -> Result<(), TraceError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TraceError::invalid_input(format!(
            "element {} is {}, expected a finite number",
            index, values[index]
        ))),
        None => Ok(()),
    }
}
