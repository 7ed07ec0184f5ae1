//! Oracle doubles: canned completions without network I/O.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::oracle::{ModelOracle, OracleError};

/// Replays a fixed queue of completions in order. Draining the queue is
/// a test bug and fails the call loudly.
#[derive(Debug)]
pub struct ScriptedOracle {
    replies: Mutex<VecDeque<Result<String, OracleError>>>,
}

impl ScriptedOracle {
    pub fn new(replies: impl IntoIterator<Item = Result<String, OracleError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }

    /// Convenience: a script of successful completions.
    pub fn replying(replies: impl IntoIterator<Item = String>) -> Self {
        Self::new(replies.into_iter().map(Ok))
    }
}

#[async_trait]
impl ModelOracle for ScriptedOracle {
    async fn complete(&self, _prompt: &str) -> Result<String, OracleError> {
        self.replies
            .lock()
            .expect("scripted oracle lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(OracleError::Transport(
                    "scripted oracle ran out of replies".to_string(),
                ))
            })
    }
}

/// Always fails with the given transport message; simulates an
/// unreachable or timing-out provider.
#[derive(Debug)]
pub struct FailingOracle {
    message: String,
}

impl FailingOracle {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ModelOracle for FailingOracle {
    async fn complete(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::Transport(self.message.clone()))
    }
}
