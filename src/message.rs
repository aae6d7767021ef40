// src/message.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_MESSAGE: &str = "Hello World";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    /// The text to forward upstream. Absent or empty messages fall back to
    /// [`DEFAULT_MESSAGE`].
    pub fn resolved_message(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_MESSAGE,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_defaults() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.resolved_message(), "Hello World");
    }

    #[test]
    fn empty_message_defaults() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        assert_eq!(req.resolved_message(), DEFAULT_MESSAGE);
    }

    #[test]
    fn whitespace_is_forwarded_untouched() {
        let req = ChatRequest::new("  hi  ");
        assert_eq!(req.resolved_message(), "  hi  ");
    }
}
