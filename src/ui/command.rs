//! Command deck parsing.
//!
//! The command deck is the keyboard stand-in for the original form
//! controls around file loading:
//! - `:q` or `:quit` → quit
//! - `:h` or `:help` → show the key reference
//! - `:clear` → clear the passage
//! - `@path/to/file` → load a file (plain text or PDF)
//! - `@@` → paste the clipboard

use crate::app::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Clear,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "clear" => Command::Clear,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let path = rest.trim();
        if path.is_empty() || path == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(path.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Translation layer between deck input and the App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Clear => AppEvent::ClearText,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
