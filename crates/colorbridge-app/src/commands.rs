//! Console command parsing and help.

use colorbridge_core::{ColorValue, RgbColor};
use thiserror::Error;

/// Malformed console input. Never reaches the bridge.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid channel value: {0}")]
    Channel(String),
    #[error("Invalid JSON color: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the color in its remembered format.
    Get,
    /// Replace color and format.
    Set(ColorValue),
    /// Replace the RGB channels, as the picker would.
    Update(RgbColor),
    /// Print the canonical state as JSON.
    State,
    /// Drain and print pending notifications.
    Events,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb {
            "get" => Command::Get,
            // A bare `set` is the absent value.
            "set" if rest.is_empty() => Command::Set(ColorValue::Null),
            "set" => Command::Set(ColorValue::Text(rest.to_string())),
            "set-json" if rest.is_empty() => return Err(CommandError::Usage("set-json <json>")),
            "set-json" => Command::Set(ColorValue::from_json(rest)?),
            "update" => Command::Update(parse_rgb(rest)?),
            "state" => Command::State,
            "events" => Command::Events,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_rgb(args: &str) -> Result<RgbColor, CommandError> {
    let channels = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u8>().map_err(|_| CommandError::Channel(part.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok(RgbColor::new(*r, *g, *b)),
        _ => Err(CommandError::Usage("update <r> <g> <b>")),
    }
}

/// Help entry for one command.
#[derive(Debug, Clone)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    pub const fn new(usage: &'static str, description: &'static str) -> Self {
        Self { usage, description }
    }
}

/// Registry of all console commands.
pub struct CommandRegistry;

impl CommandRegistry {
    /// Get all registered commands.
    pub fn all() -> Vec<CommandHelp> {
        vec![
            CommandHelp::new("get", "Print the color in its remembered format"),
            CommandHelp::new("set <color>", "Set color and format from text (bare `set` clears)"),
            CommandHelp::new("set-json <json>", "Set from JSON: null, a string or an {r,g,b}/{h,s,l} object"),
            CommandHelp::new("update <r> <g> <b>", "Change RGB channels as the picker would"),
            CommandHelp::new("state", "Print the canonical state as JSON"),
            CommandHelp::new("events", "Drain pending change notifications"),
            CommandHelp::new("help", "Show this help"),
            CommandHelp::new("quit", "Exit"),
        ]
    }

    /// Format the help table.
    pub fn help_text() -> String {
        Self::all()
            .iter()
            .map(|help| format!("  {:20} {}", help.usage, help.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_set_keeps_rest_of_line() {
        assert_eq!(
            Command::parse("set rgb(1, 2, 3)").unwrap(),
            Some(Command::Set(ColorValue::Text("rgb(1, 2, 3)".to_string())))
        );
        assert_eq!(Command::parse("set").unwrap(), Some(Command::Set(ColorValue::Null)));
    }

    #[test]
    fn test_set_json() {
        let command = Command::parse(r#"set-json {"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert!(matches!(command, Some(Command::Set(ColorValue::Rgb { .. }))));
        assert!(matches!(Command::parse("set-json {"), Err(CommandError::Json(_))));
    }

    #[test]
    fn test_update() {
        assert_eq!(
            Command::parse("update 10, 20, 30").unwrap(),
            Some(Command::Update(RgbColor::new(10, 20, 30)))
        );
        assert!(matches!(Command::parse("update 1 2"), Err(CommandError::Usage(_))));
        assert!(matches!(Command::parse("update 1 2 256"), Err(CommandError::Channel(_))));
    }

    #[test]
    fn test_unknown() {
        assert!(matches!(Command::parse("paint"), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = CommandRegistry::help_text();
        for verb in ["get", "set", "set-json", "update", "state", "events", "help", "quit"] {
            assert!(help.contains(verb), "missing {}", verb);
        }
    }
}
