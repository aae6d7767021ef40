// src/services/openai_compat.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider::{CompletionProvider, Conversation, ConversationMessage, ProviderError};
use crate::config::ProviderConfig;

const COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ConversationMessage],
}

/// Subset of the chat-completions response that is read.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    content: Option<String>,
}

/// Client for any server speaking the OpenAI chat-completions protocol
/// (DeepSeek, OpenAI, Mistral, local gateways).
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    label: String,
}

impl OpenAiCompatibleProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProviderError::Transport)?;

        Ok(Self {
            client,
            url: format!("{}{}", config.base_url.trim_end_matches('/'), COMPLETIONS_PATH),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            label: format!("{}/{}", config.kind, config.model),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatibleProvider {
    async fn complete(&self, conversation: &Conversation) -> Result<String, ProviderError> {
        let request = ApiRequest { model: &self.model, messages: &conversation.messages };

        debug!(url = %self.url, model = %self.model, "sending completion request");
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status { status: status.as_u16() });
        }
        let body = response.text().await?;

        let parsed: ApiResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let choice = parsed.choices.into_iter().next().ok_or(ProviderError::EmptyChoices)?;
        choice
            .message
            .content
            .ok_or_else(|| ProviderError::MalformedResponse("choices[0].message.content is null".into()))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
