//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::DEFAULT_TIMEOUT_SECS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A rejected configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for {field}: {message}")]
pub struct ConfigError {
    /// Name of the offending option
    pub field: &'static str,
    /// What a valid value looks like
    pub message: String,
}

/// Checker configuration.
///
/// Parsed from the command line by the binary, or constructed directly by
/// library users.
///
/// # Examples
///
/// ```no_run
/// use security_headers::Config;
///
/// let config = Config {
///     url: Some("example.com".to_string()),
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "security_headers",
    version,
    about = "Checks a website for common HTTP security headers"
)]
pub struct Config {
    /// Website to check; prompts on stdin when omitted
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Checks option values that clap cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.url, None);
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(matches!(config.log_level, LogLevel::Warn));
        assert!(matches!(config.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_parse_without_arguments_matches_default() {
        let config = Config::try_parse_from(["security_headers"]).unwrap();
        assert_eq!(config.url, None);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert!(matches!(config.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_parse_all_options() {
        let config = Config::try_parse_from([
            "security_headers",
            "example.com",
            "--timeout-seconds",
            "12",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.url.as_deref(), Some("example.com"));
        assert_eq!(config.timeout_seconds, 12);
        assert!(matches!(config.log_level, LogLevel::Debug));
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_parse_rejects_unknown_log_level() {
        let result = Config::try_parse_from(["security_headers", "--log-level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "timeout_seconds");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(Config::default().validate().is_ok());
    }
}
