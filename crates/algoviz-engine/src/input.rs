//! Input conveniences for engine runs.
//!
//! These sit in front of [`crate::sort::run`] and [`crate::search::run`]: a
//! seeded random array generator, a parser for comma-separated manual input,
//! and decoders for loosely typed JSON arrays, grids and positions. Malformed
//! values are [`TraceError::InvalidInput`]; a well-formed position with a
//! negative coordinate is [`TraceError::InvalidPosition`].

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use algoviz_core::{Endpoint, Grid, Position, TraceError};

/// Length of a generated array when none is requested.
pub const DEFAULT_RANDOM_LEN: usize = 10;

/// Generated values fall in `RANDOM_MIN..RANDOM_MAX`.
pub const RANDOM_MIN: i64 = 10;
pub const RANDOM_MAX: i64 = 110;

/// Generates `len` integers in `RANDOM_MIN..RANDOM_MAX`.
///
/// The same `seed` always produces the same array.
pub fn random_values(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.gen_range(RANDOM_MIN..RANDOM_MAX) as f64)
        .collect()
}

/// Parses comma-separated numbers, e.g. `"5, 3, 8"`.
///
/// Blank input is an empty array. Surrounding whitespace on each token is
/// ignored; an empty or non-numeric token is rejected.
pub fn parse_values(text: &str) -> Result<Vec<f64>, TraceError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            match token.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(TraceError::invalid_input(format!(
                    "element {} ('{}') is not a number",
                    i, token
                ))),
            }
        })
        .collect()
}

/// Borrows the elements of a JSON value that must be an array.
pub fn json_array<'a>(value: &'a Value, what: &str) -> Result<&'a [Value], TraceError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| TraceError::invalid_input(format!("{} is {}, expected an array", what, value)))
}

/// Coerces JSON array elements into numbers.
///
/// Only JSON numbers are accepted; strings, booleans, nulls and nested
/// values are rejected with the offending index.
pub fn values_from_json(values: &[Value]) -> Result<Vec<f64>, TraceError> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            value.as_f64().ok_or_else(|| {
                TraceError::invalid_input(format!("element {} is {}, expected a number", i, value))
            })
        })
        .collect()
}

/// Decodes a `(0|1)[][]` occupancy matrix.
///
/// Every cell must be the integer `0` or `1`; anything else, including
/// negative or out-of-byte values, is rejected with the cell's coordinates.
pub fn grid_from_json(value: &Value) -> Result<Grid, TraceError> {
    let rows = json_array(value, "grid")?
        .iter()
        .enumerate()
        .map(|(r, row)| {
            json_array(row, &format!("grid row {}", r))?
                .iter()
                .enumerate()
                .map(|(c, cell)| match cell.as_u64() {
                    Some(v @ 0..=1) => Ok(v as u8),
                    _ => Err(TraceError::invalid_input(format!(
                        "grid cell ({}, {}) has value {}, expected 0 (open) or 1 (wall)",
                        r, c, cell
                    ))),
                })
                .collect::<Result<Vec<u8>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_rows(rows)
}

/// Decodes a `[row, col]` pair for `endpoint`.
///
/// Anything other than two integers is [`TraceError::InvalidInput`]. A
/// negative coordinate cannot name a cell of `grid` and is reported as
/// [`TraceError::InvalidPosition`]; bounds and walls are checked by the
/// search engine itself.
pub fn position_from_json(endpoint: Endpoint, value: &Value, grid: &Grid) -> Result<Position, TraceError> {
    let malformed =
        || TraceError::invalid_input(format!("{} is {}, expected [row, col] integers", endpoint, value));

    let (row, col) = match value.as_array().map(Vec::as_slice) {
        Some([row, col]) => (
            row.as_i64().ok_or_else(malformed)?,
            col.as_i64().ok_or_else(malformed)?,
        ),
        _ => return Err(malformed()),
    };

    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(r), Ok(c)) => Ok(Position(r, c)),
        _ => Err(TraceError::InvalidPosition {
            endpoint,
            row,
            col,
            reason: format!("outside a {}x{} grid", grid.rows(), grid.cols()),
        }),
    }
}
