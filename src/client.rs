// src/client.rs
use std::time::Duration;

use thiserror::Error;

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::message::{ChatRequest, ChatResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach chat server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("chat server answered {0}")]
    Status(u16),
}

/// HTTP client for a running relay's `/chat` endpoint.
#[derive(Clone, Debug)]
pub struct RelayClient {
    http: reqwest::Client,
    chat_url: String,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS + 15))
            .build()?;
        Ok(Self {
            http,
            chat_url: format!("{}/chat", base_url.trim_end_matches('/')),
        })
    }

    pub async fn send(&self, message: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.chat_url)
            .json(&ChatRequest::new(message))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.response)
    }
}
