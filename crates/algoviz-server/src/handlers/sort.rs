//! Sort trace handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::common::TraceResponse;
use crate::schema::sort::SortRequest;
use crate::state::AppState;

/// Runs a sort engine and returns its trace. Body rejections are reported
/// through [`ApiError`] so every failure uses the same envelope.
///
/// `POST /sort/{algorithm}`
pub async fn sort(
    State(state): State<AppState>,
    Path(algorithm): Path<String>,
    payload: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<TraceResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.sort(&algorithm, req)?;
    Ok(Json(response))
}
