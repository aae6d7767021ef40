// src/services/provider.rs
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

/// The messages sent for one completion request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub messages: Vec<ConversationMessage>,
}

impl Conversation {
    /// A conversation holding exactly one user message.
    pub fn single_turn(content: impl Into<String>) -> Self {
        Self {
            messages: vec![ConversationMessage { role: Role::User, content: content.into() }],
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to provider failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("provider did not answer within the configured timeout")]
    Timeout,
    /// The response body is dropped: providers echo credentials in error text.
    #[error("provider returned status {status}")]
    Status { status: u16 },
    #[error("provider response could not be parsed: {0}")]
    MalformedResponse(String),
    #[error("provider response contained no choices")]
    EmptyChoices,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Transport(err)
        }
    }
}

/// A chat-completion backend. Implementations are long-lived and shared by
/// every request, so they must not keep per-conversation state.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the generated text of the first choice, unmodified.
    async fn complete(&self, conversation: &Conversation) -> Result<String, ProviderError>;

    /// Short label used in logs, e.g. `deepseek/deepseek-chat`.
    fn describe(&self) -> String;
}

impl fmt::Debug for dyn CompletionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompletionProvider({})", self.describe())
    }
}
