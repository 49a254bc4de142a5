//! HTTP fetching.
//!
//! Sends the single GET request a header check needs and keeps the parts of
//! the response the check looks at. The body is never read.

use log::{debug, info};
use reqwest::header::HeaderMap;

use crate::error_handling::{classify_reqwest_error, CheckError};

/// Status, final URL, and headers of a response.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// URL of the final response after redirects
    pub final_url: String,
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
}

/// Sends a GET request to `url` with the client's timeout and redirect policy.
///
/// Non-success status codes are not errors; their headers are returned like
/// any other response.
///
/// # Errors
///
/// Returns the `CheckError` matching the `reqwest` failure category.
pub async fn fetch_response(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchedResponse, CheckError> {
    debug!("Sending GET request to {url}");
    let response = client.get(url).send().await.map_err(|e| {
        let err = classify_reqwest_error(e);
        debug!("Request to {url} failed ({}): {err:?}", err.kind());
        err
    })?;

    let final_url = response.url().to_string();
    let status = response.status();
    debug!("Final URL for {url}: {final_url}");
    info!("Received {status} from {final_url}");

    Ok(FetchedResponse {
        final_url,
        status: status.as_u16(),
        headers: response.headers().clone(),
    })
}
