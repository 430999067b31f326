//! The console session: stands in for the embedding environment.

use std::io::{self, BufRead, Write};

use colorbridge_core::StateBridge;

use crate::commands::{Command, CommandRegistry};
use crate::config::AppConfig;

/// A console session around one bridge.
pub struct Console {
    bridge: StateBridge,
    config: AppConfig,
}

impl Console {
    /// Create a session, initializing the bridge from the configured value.
    pub fn new(config: AppConfig) -> Self {
        let bridge = StateBridge::initialize(config.initial.clone());
        log::info!("Initial color: {} ({})", bridge.get(), bridge.format());
        Self { bridge, config }
    }

    /// Read-only view of the bridge.
    pub fn bridge(&self) -> &StateBridge {
        &self.bridge
    }

    /// Process commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        if self.config.interactive {
            writeln!(output, "colorbridge: type `help` for commands")?;
        }

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command, &mut output)?,
                Ok(None) => {}
                Err(e) => writeln!(output, "error: {}", e)?,
            }

            if self.config.echo_events {
                self.print_events(&mut output)?;
            }
            output.flush()?;
        }

        Ok(())
    }

    /// Run one command and write its output.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        match command {
            Command::Get => writeln!(output, "{}", self.bridge.get()),
            Command::Set(value) => {
                self.bridge.set(value);
                Ok(())
            }
            Command::Update(rgb) => {
                self.bridge.update(rgb);
                Ok(())
            }
            Command::State => {
                let json = serde_json::to_string(self.bridge.state()).map_err(io::Error::other)?;
                writeln!(output, "{}", json)
            }
            Command::Events => self.print_events(output),
            Command::Help => writeln!(output, "{}", CommandRegistry::help_text()),
            Command::Quit => Ok(()),
        }
    }

    fn print_events<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        for event in self.bridge.poll_events() {
            let json = serde_json::to_string(&event).map_err(io::Error::other)?;
            writeln!(output, "{}", json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorbridge_core::{ColorValue, FormatTag};

    fn session(initial: &str, script: &str) -> (Console, String) {
        let config = AppConfig {
            initial: ColorValue::from(initial),
            interactive: false,
            ..AppConfig::default()
        };
        let mut console = Console::new(config);
        let mut output = Vec::new();
        console.run(script.as_bytes(), &mut output).unwrap();
        (console, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_get_set_update() {
        let (console, output) = session(
            "#ff0000",
            "get\nset hsl(0, 100%, 50%)\nget\nupdate 10 20 30\nget\n",
        );
        assert_eq!(output, "#ff0000\nhsl(0, 100%, 50%)\nhsl(210, 50%, 8%)\n");
        assert_eq!(console.bridge().format(), FormatTag::Hsl);
    }

    #[test]
    fn test_bare_set_resets() {
        let (_, output) = session("rgba(1, 2, 3, 0.5)", "set\nget\n");
        assert_eq!(output, "#000000\n");
    }

    #[test]
    fn test_errors_do_not_touch_state() {
        let (console, output) = session("rgb(1, 2, 3)", "update 1 2\nfrobnicate\nget\n");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("error: Usage"));
        assert!(lines[1].starts_with("error: Unknown command"));
        assert_eq!(lines[2], "rgb(1, 2, 3)");
        assert!(!console.bridge().has_pending_events());
    }

    #[test]
    fn test_events_and_quit() {
        let (_, output) = session("#000000", "update 1 2 3\nevents\nquit\nget\n");
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with(r#"{"type":"update""#));
    }

    #[test]
    fn test_state_json() {
        let (_, output) = session("#0000ff", "state\n");
        assert_eq!(
            output.trim(),
            r#"{"color":{"r":0,"g":0,"b":255,"a":1.0},"format":"hex"}"#
        );
    }
}
