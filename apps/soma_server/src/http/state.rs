//! Application state for the HTTP server.

use soma_engine::{EphemerisOracle, PositionClassifier};
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: PositionClassifier,
}

impl AppState {
    /// Build state around an already initialized oracle.
    pub fn new(oracle: Arc<dyn EphemerisOracle>) -> Self {
        Self {
            classifier: PositionClassifier::new(oracle),
        }
    }
}
