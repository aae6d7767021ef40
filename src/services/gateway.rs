// src/services/gateway.rs
use std::sync::Arc;

use tracing::{error, info};

use super::provider::{CompletionProvider, Conversation};
use crate::error::AppError;
use crate::message::DEFAULT_MESSAGE;

/// Relays one user message to the configured provider.
#[derive(Clone, Debug)]
pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
    max_message_chars: usize,
}

impl CompletionGateway {
    /// The limit never drops below the default message, so an empty request
    /// is always forwarded.
    pub fn new(provider: Arc<dyn CompletionProvider>, max_message_chars: usize) -> Self {
        let floor = DEFAULT_MESSAGE.chars().count();
        Self { provider, max_message_chars: max_message_chars.max(floor) }
    }

    /// Sends `message` as a single-turn conversation and returns the first
    /// choice's text as-is. Provider failures are logged here and surface to
    /// the caller only as [`AppError::Upstream`].
    pub async fn complete(&self, message: &str) -> Result<String, AppError> {
        let chars = message.chars().count();
        if chars > self.max_message_chars {
            return Err(AppError::BadRequest("Message is too long".to_string()));
        }

        let conversation = Conversation::single_turn(message);
        match self.provider.complete(&conversation).await {
            Ok(text) => {
                info!(provider = %self.provider.describe(), chars, "completion succeeded");
                Ok(text)
            }
            Err(err) => {
                error!(provider = %self.provider.describe(), error = %err, "completion failed");
                Err(AppError::Upstream)
            }
        }
    }
}
