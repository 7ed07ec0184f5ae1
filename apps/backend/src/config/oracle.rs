//! Model-oracle configuration.
//!
//! The provider API key is the single secret, read from the process
//! environment at startup. Model name and sampling temperature are
//! compile-time constants in the client, not configuration.

use std::env;

use crate::error::AppError;

pub const API_KEY_VAR: &str = "MISTRAL_API_KEY";

#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub api_key: String,
}

impl OracleConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Read the provider key from the environment; a missing or empty
    /// value is a startup configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| AppError::config(format!("{API_KEY_VAR} must be set")))?;
        if api_key.trim().is_empty() {
            return Err(AppError::config(format!("{API_KEY_VAR} must not be empty")));
        }
        Ok(Self { api_key })
    }
}
