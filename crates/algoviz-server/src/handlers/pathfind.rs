//! Grid search trace handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::common::TraceResponse;
use crate::schema::pathfind::PathfindRequest;
use crate::state::AppState;

/// Runs a search engine and returns its trace.
///
/// `POST /pathfind/{algorithm}`
pub async fn pathfind(
    State(state): State<AppState>,
    Path(algorithm): Path<String>,
    payload: Result<Json<PathfindRequest>, JsonRejection>,
) -> Result<Json<TraceResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.pathfind(&algorithm, req)?;
    Ok(Json(response))
}
