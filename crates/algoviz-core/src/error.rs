//! Error types shared by the trace engines.
//!
//! Every variant is detected before the first step is recorded, so callers
//! either receive a complete trace or one of these errors, never both.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which end of a search request a position error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Errors produced while validating an engine invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// The sort values or the search grid are malformed.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A search endpoint lies outside the grid or on a wall. Coordinates are
    /// signed so that negative request values can be reported as given.
    #[error("invalid {endpoint} position ({row}, {col}): {reason}")]
    InvalidPosition {
        endpoint: Endpoint,
        row: i64,
        col: i64,
        reason: String,
    },

    /// The algorithm selector names no known algorithm.
    #[error("unknown algorithm: '{name}'")]
    InvalidAlgorithm { name: String },
}

impl TraceError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        TraceError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TraceError::InvalidInput { .. } => "InvalidInput",
            TraceError::InvalidPosition { .. } => "InvalidPosition",
            TraceError::InvalidAlgorithm { .. } => "InvalidAlgorithm",
        }
    }
}
