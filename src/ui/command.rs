//! Command parsing for the TUI command deck
//!
//! Parses a submitted input line, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:date YYYY-MM-DD` (or `:d`) → open the prompt for a past date
//! - `:today` → back to today's prompt
//! - `:dates` → list dates that have a prompt
//! - `@@` → submit the clipboard contents as a guess
//! - anything else → a guess

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Today,
    Dates,
    Date(String),
    PasteClipboard,
    Guess(String),
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.collect::<Vec<_>>().join(" ");

        match name {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "today" => Command::Today,
            "dates" => Command::Dates,
            "d" | "date" if !arg.is_empty() => Command::Date(arg),
            _ => Command::Unknown(input.to_string()),
        }
    } else if input == "@@" {
        Command::PasteClipboard
    } else {
        Command::Guess(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Today => AppEvent::Today,
        Command::Dates => AppEvent::ListDates,
        Command::Date(date) => AppEvent::SelectDate(date),
        Command::PasteClipboard => AppEvent::PasteClipboard,
        Command::Guess(guess) => AppEvent::Guess(guess),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
