//! TraceService: the coordinator between HTTP handlers and the engines.
//!
//! Each call parses the algorithm selector, enforces the configured size
//! limits, converts the request into engine input, and runs the engine to
//! completion. Nothing is shared between calls.

use algoviz_core::{Endpoint, SearchAlgorithm, SortAlgorithm};
use algoviz_engine::{input, search, sort};
use serde_json::Value;

use crate::config::Limits;
use crate::error::ApiError;
use crate::schema::common::{AlgorithmsResponse, TraceResponse};
use crate::schema::pathfind::PathfindRequest;
use crate::schema::sort::SortRequest;

pub struct TraceService {
    limits: Limits,
}

impl TraceService {
    pub fn new(limits: Limits) -> Self {
        TraceService { limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Runs a sort engine over the request array.
    pub fn sort(&self, algorithm: &str, request: SortRequest) -> Result<TraceResponse, ApiError> {
        let algorithm: SortAlgorithm = algorithm.parse()?;
        let elements = input::json_array(&request.array, "array")?;

        let len = elements.len();
        if len > self.limits.max_array_len {
            tracing::warn!(%algorithm, len, "rejected oversized sort input");
            return Err(ApiError::PayloadTooLarge(format!(
                "array has {} elements, limit is {}",
                len, self.limits.max_array_len
            )));
        }

        let values = input::values_from_json(elements)?;
        let trace = sort::run(algorithm, &values)?;

        tracing::debug!(%algorithm, len, steps = trace.len(), "sort trace computed");
        Ok(TraceResponse { steps: trace })
    }

    /// Runs a search engine over the request grid.
    pub fn pathfind(
        &self,
        algorithm: &str,
        request: PathfindRequest,
    ) -> Result<TraceResponse, ApiError> {
        let algorithm: SearchAlgorithm = algorithm.parse()?;

        let cells: usize = request
            .grid
            .as_array()
            .map_or(0, |rows| rows.iter().filter_map(Value::as_array).map(Vec::len).sum());
        if cells > self.limits.max_grid_cells {
            tracing::warn!(%algorithm, cells, "rejected oversized grid");
            return Err(ApiError::PayloadTooLarge(format!(
                "grid has {} cells, limit is {}",
                cells, self.limits.max_grid_cells
            )));
        }

        let grid = input::grid_from_json(&request.grid)?;
        let start = input::position_from_json(Endpoint::Start, &request.start, &grid)?;
        let end = input::position_from_json(Endpoint::End, &request.end, &grid)?;
        let trace = search::run(algorithm, &grid, start, end)?;

        tracing::debug!(
            %algorithm,
            rows = grid.rows(),
            cols = grid.cols(),
            steps = trace.len(),
            "search trace computed"
        );
        Ok(TraceResponse { steps: trace })
    }

    pub fn algorithms(&self) -> AlgorithmsResponse {
        AlgorithmsResponse {
            sort: SortAlgorithm::ALL.iter().map(SortAlgorithm::name).collect(),
            pathfind: SearchAlgorithm::ALL.iter().map(SearchAlgorithm::name).collect(),
        }
    }
}
