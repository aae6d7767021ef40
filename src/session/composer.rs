// src/session/composer.rs
//! Input box model: Enter submits, Shift+Enter breaks the line, and the box
//! grows with its content up to a cap.

/// Rows the input may grow to before it scrolls.
pub const MAX_ROWS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter { shift: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerAction {
    None,
    Submit,
}

#[derive(Clone, Debug, Default)]
pub struct Composer {
    text: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle_key(&mut self, key: Key) -> ComposerAction {
        match key {
            Key::Char(c) => self.text.push(c),
            Key::Backspace => {
                self.text.pop();
            }
            Key::Enter { shift: true } => self.text.push('\n'),
            Key::Enter { shift: false } => return ComposerAction::Submit,
        }
        ComposerAction::None
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.handle_key(Key::Char(c));
        }
    }

    /// Clears the input and resets its height.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn rows(&self) -> usize {
        (self.text.matches('\n').count() + 1).min(MAX_ROWS)
    }
}
