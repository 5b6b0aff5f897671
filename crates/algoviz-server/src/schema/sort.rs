//! Sort request types.

use serde::Deserialize;

/// `POST /sort/{algorithm}` body.
///
/// `array` is taken as raw JSON so that a non-array value or a non-numeric
/// element is reported as an engine input error rather than a generic body
/// rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SortRequest {
    pub array: serde_json::Value,
}
