//! security_headers library: HTTP security header checks
//!
//! This library requests a website once and reports which of five common
//! security response headers it sets, along with a coarse rating.
//!
//! # Example
//!
//! ```no_run
//! use security_headers::{check_security_headers, initialization::build_client};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = build_client(Duration::from_secs(5))?;
//! let report = check_security_headers(&client, "https://example.com").await?;
//! println!(
//!     "{}/{} security headers present",
//!     report.present_count(),
//!     report.total()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod report;
pub mod security;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{CheckError, FailureKind};
pub use run::{run, run_check, RunOutcome};
pub use security::{check_security_headers, HeaderFinding, HeaderReport, Tier};

// Internal run module (contains the prompt/check/report flow)
mod run {
    use std::io::{self, BufRead, Write};

    use log::{info, warn};

    use crate::app::{read_url, validate_and_normalize_url};
    use crate::config::Config;
    use crate::error_handling::{CheckError, FailureKind};
    use crate::initialization::init_client;
    use crate::report::{
        write_app_banner, write_check_banner, write_failure, write_report, write_separator,
        EMPTY_URL_MESSAGE, INVALID_URL_MESSAGE,
    };
    use crate::security::{check_security_headers, HeaderReport};

    /// How a run ended.
    ///
    /// Every variant is a normal end of the flow; the message for it has
    /// already been written.
    #[derive(Debug)]
    pub enum RunOutcome {
        /// No URL was entered
        EmptyInput,
        /// The entered URL failed validation
        InvalidUrl(String),
        /// The response was inspected
        Checked(HeaderReport),
        /// The request failed
        Failed(FailureKind),
    }

    /// Checks one URL and writes either the report or the failure message.
    ///
    /// Prints the "Checking security headers for" banner first. Failures are
    /// written to `out` and returned as `RunOutcome::Failed`.
    ///
    /// # Errors
    ///
    /// Only I/O errors from writing to `out` are returned.
    pub async fn run_check<W: Write>(
        config: &Config,
        url: &str,
        out: &mut W,
    ) -> io::Result<RunOutcome> {
        write_check_banner(out, url)?;

        let result = match init_client(config) {
            Ok(client) => check_security_headers(&client, url).await,
            Err(e) => Err(CheckError::from(e)),
        };

        match result {
            Ok(report) => {
                write_report(out, &report)?;
                Ok(RunOutcome::Checked(report))
            }
            Err(e) => {
                warn!("Header check for {url} failed ({}): {e}", e.kind());
                write_failure(out, &e)?;
                Ok(RunOutcome::Failed(e.kind()))
            }
        }
    }

    /// Runs the full command-line flow.
    ///
    /// Writes the banner, takes the URL from `config.url` or prompts for it on
    /// `input`, validates it, and checks it. Invalid input and request failures
    /// are reported on `out` and end the flow normally.
    ///
    /// # Errors
    ///
    /// Only I/O errors from reading `input` or writing `out` are returned.
    pub async fn run<R: BufRead, W: Write>(
        config: &Config,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<RunOutcome> {
        write_app_banner(out)?;

        let entered = match &config.url {
            Some(url) => url.trim().to_string(),
            None => read_url(input, out)?,
        };

        if entered.is_empty() {
            writeln!(out, "{EMPTY_URL_MESSAGE}")?;
            return Ok(RunOutcome::EmptyInput);
        }

        // Adds https:// when no scheme was given
        let Some(url) = validate_and_normalize_url(&entered) else {
            writeln!(out, "{INVALID_URL_MESSAGE}")?;
            return Ok(RunOutcome::InvalidUrl(entered));
        };

        info!("Checking {url}");
        let outcome = run_check(config, &url, out).await?;
        writeln!(out)?;
        write_separator(out)?;
        out.flush()?;
        Ok(outcome)
    }
}
