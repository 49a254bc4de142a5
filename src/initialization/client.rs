//! HTTP client initialization.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client from the configuration.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    build_client(config.timeout())
}

/// Builds an HTTP client with the given timeout.
///
/// Creates a `reqwest::Client` configured with:
/// - Total request timeout and connect timeout of `timeout`
/// - Redirect following enabled (up to `MAX_REDIRECT_HOPS` hops)
/// - No default request headers
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(client)
}
