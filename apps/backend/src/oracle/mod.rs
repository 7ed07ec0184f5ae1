//! Model oracle - the external language model behind every generation
//! operation.
//!
//! The trait seam keeps handlers and services oblivious to the concrete
//! provider, and lets tests substitute scripted replies. The only real
//! implementation talks to the Mistral chat-completions API.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::AppError;
use crate::state::app_state::AppState;

mod mistral;
pub mod parse;

pub use mistral::MistralOracle;

/// Errors from the oracle client itself. Reply-parsing failures are a
/// separate concern and live with the callers.
#[derive(Error, Debug)]
pub enum OracleError {
    /// Network-level failure (connect, timeout, TLS, body read)
    #[error("model oracle transport error: {0}")]
    Transport(String),
    /// Provider answered with a non-success status
    #[error("model oracle rejected the request (HTTP {status}): {detail}")]
    Api { status: u16, detail: String },
    /// Provider answered 2xx but the completion carried no content
    #[error("model oracle returned an empty completion")]
    EmptyCompletion,
}

/// The request/response seam to the language model: one prompt in, the
/// raw completion text out. Implementations own their retry budget.
#[async_trait]
pub trait ModelOracle: Send + Sync + Debug {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError>;
}

/// Fetch the process-wide oracle handle, or fail with a 503 if this
/// process was started without one.
pub fn require_oracle(state: &AppState) -> Result<Arc<dyn ModelOracle>, AppError> {
    state.oracle().ok_or_else(AppError::oracle_unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::state::build_state;

    #[test]
    fn require_oracle_fails_without_a_handle() {
        let state = build_state().build();
        let err = require_oracle(&state).unwrap_err();
        assert_eq!(err.code(), crate::errors::ErrorCode::OracleUnavailable);
    }
}
