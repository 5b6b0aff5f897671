//! Grid search request types.

use serde::Deserialize;
use serde_json::Value;

/// `POST /pathfind/{algorithm}` body.
///
/// Fields are taken as raw JSON and decoded by the engine's input helpers,
/// so a negative coordinate or a cell such as `300` is reported as a trace
/// error rather than a generic body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct PathfindRequest {
    /// Occupancy matrix: `1` is a wall, `0` an open cell.
    pub grid: Value,
    /// `[row, col]`
    pub start: Value,
    /// `[row, col]`
    pub end: Value,
}
