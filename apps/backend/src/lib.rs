#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod oracle;
pub mod prompts;
pub mod routes;
pub mod services;
pub mod state;
pub mod test_support;
pub mod web;

// Re-exports for public API
pub use config::oracle::OracleConfig;
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::validated_json::ValidatedJson;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use oracle::{require_oracle, MistralOracle, ModelOracle, OracleError};
pub use state::app_state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::errors::*;
    pub use super::infra::*;
    pub use super::oracle::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
