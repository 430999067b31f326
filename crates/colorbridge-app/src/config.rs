//! Console configuration from command-line arguments.

use clap::Parser;
use colorbridge_core::ColorValue;

/// Drive a color bridge from the console.
#[derive(Debug, Clone, Parser)]
#[command(name = "colorbridge", version, about)]
pub struct Cli {
    /// Initial color in any supported notation (e.g. `#ff0000`, `hsl(0, 100%, 50%)`)
    #[arg(long, value_name = "COLOR", conflicts_with = "initial_json")]
    pub initial: Option<String>,

    /// Initial color as JSON (`null`, a string, or an `{r,g,b}`/`{h,s,l}`/`{h,s,v}` object)
    #[arg(long, value_name = "JSON", value_parser = parse_color_json)]
    pub initial_json: Option<ColorValue>,

    /// Print notifications after every command instead of on `events`
    #[arg(long)]
    pub echo_events: bool,

    /// Hide the prompt and banner
    #[arg(long)]
    pub quiet: bool,
}

fn parse_color_json(text: &str) -> Result<ColorValue, serde_json::Error> {
    ColorValue::from_json(text)
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Value the bridge is initialized from.
    pub initial: ColorValue,
    /// Print notifications after every command instead of on `events`.
    pub echo_events: bool,
    /// Show the prompt and banner.
    pub interactive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial: ColorValue::Null,
            echo_events: false,
            interactive: true,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let initial = match (cli.initial, cli.initial_json) {
            (Some(text), _) => ColorValue::Text(text),
            (None, Some(value)) => value,
            (None, None) => ColorValue::Null,
        };
        Self {
            initial,
            echo_events: cli.echo_events,
            interactive: !cli.quiet,
        }
    }
}
