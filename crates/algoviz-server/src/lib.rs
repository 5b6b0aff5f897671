//! HTTP/JSON transport for the algorithm trace engines.
//!
//! Exposes the sort and grid-search engines as `POST` endpoints returning
//! `{ "steps": [...] }`. This crate contains the router, request/response
//! schema, error mapping, configuration, and the thin service layer that
//! enforces input-size limits before invoking an engine.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
