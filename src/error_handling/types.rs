//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Category of a failed header check.
///
/// One variant per failure category; used for logging and for picking the
/// console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// The request did not complete within the timeout
    Timeout,
    /// No connection could be established
    Connect,
    /// Any other request-layer failure (bad redirect, protocol error, ...)
    Request,
    /// Failure outside the request layer
    Unexpected,
}

/// A failed header check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("could not connect")]
    Connect,

    /// Any other `reqwest` failure.
    #[error("{0}")]
    Request(#[source] ReqwestError),

    /// A failure that did not come from the request itself.
    #[error("{0}")]
    Unexpected(String),
}

impl CheckError {
    /// Returns the category of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::Timeout => FailureKind::Timeout,
            CheckError::Connect => FailureKind::Connect,
            CheckError::Request(_) => FailureKind::Request,
            CheckError::Unexpected(_) => FailureKind::Unexpected,
        }
    }
}

impl From<InitializationError> for CheckError {
    fn from(e: InitializationError) -> Self {
        CheckError::Unexpected(e.to_string())
    }
}
