//! Mistral chat-completions client.
//!
//! One blocking-style network round trip per `complete` call, with a
//! small fixed retry budget for transport failures and retryable HTTP
//! statuses (429 and 5xx). Model name and sampling temperature are
//! deliberate constants; the only configuration is the API key.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ModelOracle, OracleError};
use crate::config::oracle::OracleConfig;

const CHAT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
const MODEL: &str = "mistral-small";
const SAMPLING_TEMPERATURE: f32 = 0.9;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Retries after the first attempt; the total attempt count is this + 1.
const MAX_RETRIES: u32 = 2;
const BACKOFF_BASE_MS: u64 = 200;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug)]
pub struct MistralOracle {
    http: reqwest::Client,
    api_key: String,
}

impl MistralOracle {
    pub fn new(config: OracleConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key: config.api_key,
        }
    }

    async fn attempt(&self, prompt: &str) -> Result<String, OracleError> {
        let body = ChatCompletionRequest {
            model: MODEL,
            temperature: SAMPLING_TEMPERATURE,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(CHAT_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(OracleError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(OracleError::EmptyCompletion)?;

        if content.trim().is_empty() {
            return Err(OracleError::EmptyCompletion);
        }

        Ok(content)
    }
}

fn is_retryable(err: &OracleError) -> bool {
    match err {
        OracleError::Transport(_) => true,
        OracleError::Api { status, .. } => *status == 429 || *status >= 500,
        OracleError::EmptyCompletion => false,
    }
}

/// Exponential backoff with a little jitter so concurrent requests do not
/// retry in lockstep.
fn backoff_delay(attempt: u32) -> Duration {
    let base = BACKOFF_BASE_MS << attempt;
    let jitter = rand::rng().random_range(0..BACKOFF_BASE_MS);
    Duration::from_millis(base + jitter)
}

#[async_trait]
impl ModelOracle for MistralOracle {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let mut attempt = 0;
        loop {
            match self.attempt(prompt).await {
                Ok(content) => {
                    debug!(attempt, chars = content.len(), "oracle completion received");
                    return Ok(content);
                }
                Err(err) if attempt < MAX_RETRIES && is_retryable(&err) => {
                    let delay = backoff_delay(attempt);
                    warn!(attempt, error = %err, delay_ms = delay.as_millis() as u64, "oracle call failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_retryable() {
        assert!(is_retryable(&OracleError::Transport("reset".into())));
    }

    #[test]
    fn rate_limit_and_server_errors_are_retryable() {
        assert!(is_retryable(&OracleError::Api {
            status: 429,
            detail: String::new()
        }));
        assert!(is_retryable(&OracleError::Api {
            status: 503,
            detail: String::new()
        }));
    }

    #[test]
    fn auth_failures_are_not_retryable() {
        assert!(!is_retryable(&OracleError::Api {
            status: 401,
            detail: "bad key".into()
        }));
    }

    #[test]
    fn backoff_grows_with_attempts() {
        let first = backoff_delay(0);
        let third = backoff_delay(2);
        assert!(first < Duration::from_millis(2 * BACKOFF_BASE_MS));
        assert!(third >= Duration::from_millis(4 * BACKOFF_BASE_MS));
    }
}
