//! Error categorization.
//!
//! This module maps `reqwest` errors onto the failure kinds reported to the user.

use super::types::{CheckError, FailureKind};

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Timeouts take precedence over connection errors: a connect phase that runs
/// out of time reports as a timeout.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `FailureKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else {
        FailureKind::Request
    }
}

/// Converts a `reqwest::Error` into the matching `CheckError`.
pub fn classify_reqwest_error(error: reqwest::Error) -> CheckError {
    match categorize_reqwest_error(&error) {
        FailureKind::Timeout => CheckError::Timeout,
        FailureKind::Connect => CheckError::Connect,
        FailureKind::Request | FailureKind::Unexpected => CheckError::Request(error),
    }
}
