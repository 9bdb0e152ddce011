//! The chat surface: transcript rendering and the slash commands hosted
//! alongside the assistant panel.

use std::path::PathBuf;

use taxhelper_core::{ChatRole, ChatTurn};

/// Actions the chat prompt accepts besides questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Write the report as an HTML document.
    Export(PathBuf),
    /// Queue the emailed report acknowledgment.
    Email,
    /// Bump the display scale up and re-render the report.
    Bigger,
    /// Bump the display scale down and re-render the report.
    Smaller,
    Help,
    Quit,
}

pub const DEFAULT_EXPORT_PATH: &str = "tax-report.html";

pub const HELP_TEXT: &str = "\
Ask anything about taxes, savings, or documents. Commands:
  /export [path]   write the report as an HTML document
  /email           send the report acknowledgment
  /bigger /smaller adjust the report display scale
  /quit            leave the assistant";

/// Parses a slash command. Anything else is a question for the responder.
pub fn parse_command(line: &str) -> Option<ChatCommand> {
    let mut parts = line.trim().split_whitespace();
    match parts.next()? {
        "/export" => Some(ChatCommand::Export(PathBuf::from(
            parts.next().unwrap_or(DEFAULT_EXPORT_PATH),
        ))),
        "/email" => Some(ChatCommand::Email),
        "/bigger" => Some(ChatCommand::Bigger),
        "/smaller" => Some(ChatCommand::Smaller),
        "/help" => Some(ChatCommand::Help),
        "/quit" | "/exit" => Some(ChatCommand::Quit),
        _ => None,
    }
}

/// Renders one turn the way the message list shows it.
pub fn render_turn(turn: &ChatTurn) -> String {
    match turn.role {
        ChatRole::User => format!("you> {}", turn.content),
        ChatRole::Assistant => format!("assistant> {}", turn.content),
    }
}
