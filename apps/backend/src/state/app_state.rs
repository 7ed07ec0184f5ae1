use std::sync::Arc;

use crate::oracle::ModelOracle;

/// Application state containing shared resources.
///
/// The oracle handle is the only process-wide state: constructed once at
/// startup, shared read-only across concurrent requests, torn down with
/// the process. It is optional so tests can boot the app without a
/// provider key; `oracle::require_oracle` turns the absence into a 503.
#[derive(Clone)]
pub struct AppState {
    oracle: Option<Arc<dyn ModelOracle>>,
}

impl AppState {
    pub fn new(oracle: Arc<dyn ModelOracle>) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    pub fn without_oracle() -> Self {
        Self { oracle: None }
    }

    pub fn oracle(&self) -> Option<Arc<dyn ModelOracle>> {
        self.oracle.clone()
    }
}
