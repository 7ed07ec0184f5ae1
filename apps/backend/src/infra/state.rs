use std::sync::Arc;

use crate::oracle::ModelOracle;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main).
pub struct StateBuilder {
    oracle: Option<Arc<dyn ModelOracle>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { oracle: None }
    }

    pub fn with_oracle(mut self, oracle: Arc<dyn ModelOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn build(self) -> AppState {
        match self.oracle {
            Some(oracle) => AppState::new(oracle),
            None => AppState::without_oracle(),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
