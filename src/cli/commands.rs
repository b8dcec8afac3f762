//! CLI subcommand definitions

use clap::Subcommand;

use crate::chat::{ChatCommand, ParsedMessage, parse_message};

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show the meals currently scheduled in Notion
    Meals,
    /// Generate this week's plan and write it to Notion
    Plan,
    /// Handle a raw chat message such as "!plan"
    Chat {
        /// Message text, including the command prefix
        message: String,
    },
}

impl Commands {
    /// Subcommands map straight to bot commands; chat text goes through the parser
    pub(crate) fn to_message(&self, prefix: &str) -> ParsedMessage {
        match self {
            Commands::Meals => ParsedMessage::Command(ChatCommand::Meals),
            Commands::Plan => ParsedMessage::Command(ChatCommand::Plan),
            Commands::Chat { message } => parse_message(message, prefix),
        }
    }

    pub(crate) fn is_chat(&self) -> bool {
        matches!(self, Commands::Chat { .. })
    }
}
