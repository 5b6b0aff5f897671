//! Health and discovery handlers.

use axum::extract::State;
use axum::Json;

use crate::schema::common::{AlgorithmsResponse, HealthResponse};
use crate::state::AppState;

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Algorithm Visualizer API is running",
    })
}

/// `GET /algorithms`
pub async fn list_algorithms(State(state): State<AppState>) -> Json<AlgorithmsResponse> {
    Json(state.service.algorithms())
}
