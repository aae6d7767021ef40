// src/session/mod.rs
//! Client-side chat session: transcript, typing indicator and the
//! submit-control lifecycle of one pending exchange.

pub mod composer;

use std::fmt::{self, Debug};

use chrono::Local;

pub use composer::{Composer, ComposerAction, Key};

/// Shown in place of the bot's reply whenever an exchange fails, whatever the cause.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub text: String,
    pub author: Author,
    pub timestamp: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
    AwaitingResponse,
}

/// What the view has to do, in order, after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    InputCleared,
    EntryAppended(usize),
    IndicatorShown,
    IndicatorRemoved,
    SubmitDisabled,
    SubmitEnabled,
    InputFocused,
    ScrolledToBottom,
}

/// Formats "3:07 PM" style labels from the local clock.
pub fn local_time_label() -> String {
    Local::now().format("%-I:%M %p").to_string()
}

pub struct ChatSession {
    transcript: Vec<TranscriptEntry>,
    phase: Phase,
    indicator: bool,
    submit_enabled: bool,
    clock: Box<dyn Fn() -> String + Send + Sync>,
    events: Vec<SessionEvent>,
}

impl Debug for ChatSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatSession")
            .field("phase", &self.phase)
            .field("entries", &self.transcript.len())
            .field("indicator", &self.indicator)
            .field("submit_enabled", &self.submit_enabled)
            .finish()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_clock(local_time_label)
    }

    pub fn with_clock(clock: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            transcript: Vec::new(),
            phase: Phase::Idle,
            indicator: false,
            submit_enabled: true,
            clock: Box::new(clock),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Drains the view events produced since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Starts an exchange. Returns the trimmed message to send, or `None`
    /// when the input is blank or an exchange is already pending.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.phase != Phase::Idle || !self.submit_enabled {
            return None;
        }

        self.phase = Phase::Sending;
        self.events.push(SessionEvent::InputCleared);
        self.append(text.to_string(), Author::User);

        self.phase = Phase::AwaitingResponse;
        self.indicator = true;
        self.events.push(SessionEvent::IndicatorShown);
        self.events.push(SessionEvent::ScrolledToBottom);
        self.submit_enabled = false;
        self.events.push(SessionEvent::SubmitDisabled);

        Some(text.to_string())
    }

    /// Settles the pending exchange. Every error cause renders the same
    /// [`ERROR_REPLY`]. Returns false if nothing was pending.
    pub fn settle<E>(&mut self, outcome: Result<String, E>) -> bool {
        if self.phase != Phase::AwaitingResponse {
            return false;
        }

        self.indicator = false;
        self.events.push(SessionEvent::IndicatorRemoved);

        let text = outcome.unwrap_or_else(|_| ERROR_REPLY.to_string());
        self.append(text, Author::Bot);

        self.submit_enabled = true;
        self.events.push(SessionEvent::SubmitEnabled);
        self.events.push(SessionEvent::InputFocused);
        self.phase = Phase::Idle;
        true
    }

    fn append(&mut self, text: String, author: Author) {
        let timestamp = (self.clock)();
        self.transcript.push(TranscriptEntry { text, author, timestamp });
        self.events.push(SessionEvent::EntryAppended(self.transcript.len() - 1));
        self.events.push(SessionEvent::ScrolledToBottom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChatSession {
        ChatSession::with_clock(|| "3:07 PM".to_string())
    }

    #[test]
    fn submit_trims_and_disables() {
        let mut s = session();
        assert_eq!(s.submit("  hello \n").as_deref(), Some("hello"));
        assert_eq!(s.phase(), Phase::AwaitingResponse);
        assert!(s.indicator_visible());
        assert!(!s.submit_enabled());
        assert_eq!(s.transcript()[0].text, "hello");
        assert_eq!(s.transcript()[0].timestamp, "3:07 PM");
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut s = session();
        s.submit("one");
        assert_eq!(s.submit("two"), None);
        assert_eq!(s.transcript().len(), 1);
    }

    #[test]
    fn settle_without_pending_is_noop() {
        let mut s = session();
        assert!(!s.settle::<()>(Ok("stray".into())));
        assert!(s.transcript().is_empty());
        assert!(s.take_events().is_empty());
    }

    #[test]
    fn local_label_shape() {
        let label = local_time_label();
        assert!(label.ends_with("AM") || label.ends_with("PM"));
        assert!(label.contains(':'));
    }
}
