//! Response types shared across endpoints.

use serde::{Deserialize, Serialize};

use algoviz_core::Trace;

/// Body of every successful trace request: `{ "steps": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceResponse {
    pub steps: Trace,
}

/// Selectors accepted by each trace endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmsResponse {
    pub sort: Vec<&'static str>,
    pub pathfind: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}
