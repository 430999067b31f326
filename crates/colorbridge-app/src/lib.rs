//! ColorBridge console
//!
//! A line-oriented driver playing the embedding environment: it reads and
//! writes the bridge's color through `get`/`set` and simulates picker
//! interactions with `update`.

mod commands;
mod config;
mod console;

pub use commands::{Command, CommandError, CommandHelp, CommandRegistry};
pub use config::{AppConfig, Cli};
pub use console::Console;
