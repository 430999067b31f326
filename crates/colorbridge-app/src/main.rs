//! Console entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use colorbridge_app::{AppConfig, Cli, Console};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting ColorBridge console");

    let config = AppConfig::from(Cli::parse());

    let mut console = Console::new(config);
    match console.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Console I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
