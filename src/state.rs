// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gateway::CompletionGateway;
use crate::services::openai_compat::OpenAiCompatibleProvider;
use crate::services::provider::{CompletionProvider, ProviderError};

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub gateway: CompletionGateway,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, max_message_chars: usize) -> Self {
        Self {
            gateway: CompletionGateway::new(provider, max_message_chars),
        }
    }

    /// Builds the provider client once; every request shares it.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let provider = OpenAiCompatibleProvider::new(&config.provider)?;
        Ok(Self::new(Arc::new(provider), config.max_message_chars))
    }
}
