//! Router assembly for the algoviz HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// Every route is served both at the root and under `/api`.
/// CORS is permissive (playback front ends run on other origins).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/sort/{algorithm}", post(handlers::sort::sort))
        .route("/pathfind/{algorithm}", post(handlers::pathfind::pathfind))
        .route("/algorithms", get(handlers::meta::list_algorithms))
        .route("/health", get(handlers::meta::health));

    Router::new()
        .nest("/api", routes.clone())
        .merge(routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
