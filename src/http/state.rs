use crate::upstream::TranscriptionBackend;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream backend, present only when a server credential is
    /// configured. `None` turns every relay request into a 500.
    pub upstream: Option<Arc<dyn TranscriptionBackend>>,
}

impl AppState {
    pub fn new(upstream: Option<Arc<dyn TranscriptionBackend>>) -> Self {
        Self { upstream }
    }
}
