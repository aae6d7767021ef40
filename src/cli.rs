use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chat-relay")]
#[command(about = "Relays chat messages from a browser page to an LLM completion API")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Serve the chat page and the /chat endpoint (default)
    Serve,
    /// Chat with a running server from the terminal
    Chat {
        /// Base URL of the server
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let args = Args::try_parse_from(["chat-relay"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn chat_takes_url() {
        let args = Args::try_parse_from(["chat-relay", "chat", "--url", "http://host:8080"]).unwrap();
        assert_eq!(args.command, Some(Command::Chat { url: "http://host:8080".into() }));
    }
}
