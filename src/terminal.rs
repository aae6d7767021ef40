// src/terminal.rs
//! Line-oriented chat front end. A line ending in `\` continues the message
//! on the next line, the terminal stand-in for Shift+Enter.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::client::RelayClient;
use crate::session::{Author, ChatSession, Composer, ComposerAction, Key, SessionEvent};

const TYPING: &str = "bot is typing...";

pub async fn run(client: RelayClient) -> anyhow::Result<()> {
    let mut session = ChatSession::new();
    let mut composer = Composer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Type a message and press Enter. End a line with \\ for a new line. Ctrl-D quits.");
    prompt(&composer)?;

    while let Some(line) = lines.next_line().await? {
        let action = feed_line(&mut composer, &line);
        if action != ComposerAction::Submit {
            prompt(&composer)?;
            continue;
        }

        let Some(message) = take_submission(&mut session, &mut composer) else {
            prompt(&composer)?;
            continue;
        };
        render(&mut session)?;

        let outcome = client.send(&message).await;
        if let Err(err) = &outcome {
            warn!(error = %err, "chat exchange failed");
        }
        session.settle(outcome);
        render(&mut session)?;
        prompt(&composer)?;
    }

    Ok(())
}

/// Types one terminal line into the composer and presses the matching Enter.
pub fn feed_line(composer: &mut Composer, line: &str) -> ComposerAction {
    match line.strip_suffix('\\') {
        Some(head) => {
            composer.type_str(head);
            composer.handle_key(Key::Enter { shift: true })
        }
        None => {
            composer.type_str(line);
            composer.handle_key(Key::Enter { shift: false })
        }
    }
}

/// Hands the composed text to the session. The input is cleared when the
/// session accepts it and when it was blank, so no stray whitespace lingers.
pub fn take_submission(session: &mut ChatSession, composer: &mut Composer) -> Option<String> {
    let accepted = session.submit(composer.text());
    if accepted.is_some() || composer.text().trim().is_empty() {
        composer.clear();
    }
    accepted
}

fn render(session: &mut ChatSession) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    for event in session.take_events() {
        match event {
            SessionEvent::EntryAppended(index) => {
                let entry = &session.transcript()[index];
                let who = match entry.author {
                    Author::User => "you",
                    Author::Bot => "bot",
                };
                writeln!(out, "[{}] {}: {}", entry.timestamp, who, entry.text)?;
            }
            SessionEvent::IndicatorShown => {
                write!(out, "{TYPING}")?;
            }
            // Erase the indicator line before the reply lands.
            SessionEvent::IndicatorRemoved => {
                write!(out, "\r\x1b[2K")?;
            }
            _ => {}
        }
    }
    out.flush()
}

fn prompt(composer: &Composer) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    if composer.text().is_empty() {
        write!(out, "> ")?;
    } else {
        write!(out, ". ")?;
    }
    out.flush()
}
