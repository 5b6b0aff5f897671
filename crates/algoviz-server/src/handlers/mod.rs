//! HTTP handler modules for the algoviz API.
//!
//! Handlers parse the request, delegate to [`crate::service::TraceService`],
//! and return JSON responses. No algorithm logic lives in handlers.

pub mod meta;
pub mod pathfind;
pub mod sort;
