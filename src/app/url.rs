//! URL validation and normalization utilities.

use log::warn;
use url::{Host, Url};

use crate::config::{DEFAULT_SCHEME_PREFIX, MAX_URL_LENGTH};

/// Prepends `https://` unless the input already starts with `http://` or `https://`.
///
/// The prefix check is case-sensitive and the input is not trimmed.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{url}")
    }
}

/// Returns `true` if the input, once normalized, is an absolute URL with a host.
///
/// The host must be an IP address or a domain made of letters, digits, `-`,
/// `_` and `.`. Parse failures yield `false`.
pub fn validate_url(url: &str) -> bool {
    let normalized = normalize_url(url);
    match Url::parse(&normalized) {
        Ok(parsed) => !parsed.scheme().is_empty() && has_valid_host(&parsed),
        Err(_) => false,
    }
}

fn has_valid_host(parsed: &Url) -> bool {
    match parsed.host() {
        Some(Host::Domain(domain)) => {
            !domain.is_empty()
                && domain
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Validates and normalizes a URL.
///
/// Trims surrounding whitespace, adds the https:// prefix if missing, then
/// validates that the URL has a host and uses the http/https scheme. Rejects
/// URLs longer than MAX_URL_LENGTH. Logs a warning and returns None if the URL
/// is invalid, too long, or uses an unsupported scheme.
///
/// # Arguments
///
/// * `url` - The URL string to validate and normalize
///
/// # Returns
///
/// `Some(normalized_url)` if the URL is valid and can be checked, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();

    // Check URL length before normalization
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return None;
    }

    let normalized = normalize_url(url);

    // Adding https:// can push the URL past the limit
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting normalized URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return None;
    }

    if !validate_url(&normalized) {
        warn!("Rejecting invalid URL: {url}");
        return None;
    }

    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Rejecting unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Rejecting invalid URL: {url}");
            None
        }
    }
}
