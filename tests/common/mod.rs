#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chat_relay::services::provider::{CompletionProvider, Conversation, ProviderError};

pub enum StubReply {
    Text(String),
    Fail,
}

/// Records every conversation it sees and answers with a canned reply.
pub struct StubProvider {
    reply: StubReply,
    pub calls: Mutex<Vec<Conversation>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: StubReply::Text(text.to_string()), calls: Mutex::new(Vec::new()) })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { reply: StubReply::Fail, calls: Mutex::new(Vec::new()) })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_user_message(&self) -> Option<String> {
        let calls = self.calls.lock().unwrap();
        calls.last().and_then(|c| c.messages.last()).map(|m| m.content.clone())
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, conversation: &Conversation) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(conversation.clone());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Fail => Err(ProviderError::Status { status: 401 }),
        }
    }

    fn describe(&self) -> String {
        "stub/stub-model".to_string()
    }
}
