//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `security_headers` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Wiring stdin/stdout to the check flow
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use security_headers::initialization::init_logger_with;
use security_headers::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("security_headers error: {e}");
        process::exit(2);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    // Invalid input and request failures are already reported on stdout
    let outcome = run(&config, &mut input, &mut out)
        .await
        .context("Failed to write to the console")?;
    log::debug!("Run finished: {:?}", outcome);

    Ok(())
}
