// src/cli/mod.rs — CLI definition (clap derive)

pub mod ask;
pub mod chat;
pub mod disclaimer;
pub mod memory;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "haqooq",
    about = "Source-backed answers about women's rights in Pakistan",
    version
)]
pub struct Cli {
    /// Answer service base URL (overrides config and HAQOOQ_SERVICE_URL)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full-screen chat (default)
    Chat,
    /// Line-oriented chat on stdin/stdout
    Repl,
    /// Ask one question and print the answer with its sources
    Ask {
        /// The question
        #[arg(trailing_var_arg = true, required = true)]
        question: Vec<String>,
        /// Print the raw service response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the answer service is up
    Health,
    /// Show the backend-side history of a conversation
    History {
        conversation_id: String,
    },
    /// Ask the backend to drop a conversation
    Forget {
        conversation_id: String,
    },
    /// List every conversation the backend remembers
    Conversations,
    /// Show the backend's memory statistics
    Stats,
    /// Show the disclaimer, or clear the "seen" flag
    Disclaimer {
        /// Show the banner again on next start
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["haqooq"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.endpoint.is_none());
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["haqooq", "ask", "What", "is", "khula?"]).unwrap();
        match cli.command {
            Some(Commands::Ask { question, json }) => {
                assert_eq!(question.join(" "), "What is khula?");
                assert!(!json);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["haqooq", "ask"]).is_err());
    }

    #[test]
    fn test_global_endpoint_after_subcommand() {
        let cli =
            Cli::try_parse_from(["haqooq", "health", "--endpoint", "http://10.0.0.5:8001"]).unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://10.0.0.5:8001"));
        assert!(matches!(cli.command, Some(Commands::Health)));
    }

    #[test]
    fn test_conversations_parses() {
        let cli = Cli::try_parse_from(["haqooq", "conversations"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Conversations)));
    }

    #[test]
    fn test_forget_takes_id() {
        let cli = Cli::try_parse_from(["haqooq", "forget", "abc123"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Forget { ref conversation_id }) if conversation_id == "abc123"
        ));
    }
}
