//! Application state shared by all handlers.
//!
//! The engines keep no state between runs, so [`AppState`] only carries the
//! [`TraceService`] and its limits behind an `Arc`; no lock is needed.

use std::sync::Arc;

use crate::config::Limits;
use crate::service::TraceService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TraceService>,
}

impl AppState {
    pub fn new(limits: Limits) -> Self {
        AppState {
            service: Arc::new(TraceService::new(limits)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Limits::default())
    }
}
