//! Security header checking.
//!
//! This module requests a URL and checks the response for the headers in
//! the security header catalog:
//! - Strict-Transport-Security
//! - X-Content-Type-Options
//! - X-Frame-Options
//! - Content-Security-Policy
//! - X-XSS-Protection
//!
//! Header values are reported as-is; they are not parsed or validated.

mod analysis;
mod types;

use log::{debug, info};
use reqwest::header::HeaderMap;

use crate::error_handling::CheckError;
use crate::fetch::fetch_response;

pub use analysis::{inspect_headers, truncate_value};
pub use types::{HeaderFinding, HeaderReport, Tier};

/// Builds a report from an already received set of response headers.
pub fn build_report(url: &str, final_url: &str, status: u16, headers: &HeaderMap) -> HeaderReport {
    HeaderReport {
        url: url.to_string(),
        final_url: final_url.to_string(),
        status,
        findings: inspect_headers(headers),
    }
}

/// Requests `url` once and checks the response for the catalog headers.
///
/// # Arguments
///
/// * `client` - HTTP client; its timeout and redirect policy apply
/// * `url` - Absolute, already validated URL
///
/// # Errors
///
/// Returns a `CheckError` for timeouts, connection failures, and any other
/// request failure. The request is never retried.
pub async fn check_security_headers(
    client: &reqwest::Client,
    url: &str,
) -> Result<HeaderReport, CheckError> {
    let response = fetch_response(client, url).await?;
    let report = build_report(url, &response.final_url, response.status, &response.headers);
    info!(
        "{}: {}/{} security headers present",
        report.final_url,
        report.present_count(),
        report.total()
    );
    debug!("Tier for {}: {:?}", report.url, report.tier());
    Ok(report)
}
