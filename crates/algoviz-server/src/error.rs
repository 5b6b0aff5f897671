//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use algoviz_core::TraceError;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details (e.g., the engine error kind).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The engine rejected the request before running. Unknown algorithms
    /// map to 404, malformed input and positions to 400.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// Input exceeds the configured size limits (413).
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// The body is not JSON or lacks a required field. Syntax and shape
    /// errors map to 400; other rejections keep axum's status.
    #[error(transparent)]
    Rejected(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Trace(err) => {
                let (status, code) = match err {
                    TraceError::InvalidAlgorithm { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    TraceError::InvalidInput { .. } | TraceError::InvalidPosition { .. } => {
                        (StatusCode::BAD_REQUEST, "BAD_REQUEST")
                    }
                };
                (
                    status,
                    ApiErrorDetail {
                        code: code.to_string(),
                        message: err.to_string(),
                        details: Some(serde_json::json!({ "kind": err.kind() })),
                    },
                )
            }
            ApiError::Rejected(rejection) => {
                let status = match rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    other => other.status(),
                };
                let code = match status {
                    StatusCode::BAD_REQUEST => "BAD_REQUEST",
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                    StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                    _ => "INVALID_BODY",
                };
                (
                    status,
                    ApiErrorDetail {
                        code: code.to_string(),
                        message: rejection.body_text(),
                        details: Some(serde_json::json!({ "kind": "InvalidInput" })),
                    },
                )
            }
            ApiError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ApiErrorDetail {
                    code: "PAYLOAD_TOO_LARGE".to_string(),
                    message: msg.clone(),
                    details: None,
                },
            ),
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}
