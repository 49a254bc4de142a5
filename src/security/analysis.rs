//! Header inspection.

use reqwest::header::{HeaderMap, HeaderValue};

use super::types::HeaderFinding;
use crate::config::SECURITY_HEADER_CATALOG;

/// Looks up every catalog header in `headers`.
///
/// Lookup is case-insensitive. When a header appears more than once, the
/// first value is reported.
///
/// # Returns
///
/// One finding per catalog entry, in catalog order.
pub fn inspect_headers(headers: &HeaderMap) -> Vec<HeaderFinding> {
    SECURITY_HEADER_CATALOG
        .iter()
        .map(|&(name, description)| HeaderFinding {
            name,
            description,
            value: headers.get(name).map(header_value_to_string),
        })
        .collect()
}

/// Converts a header value to text, replacing invalid UTF-8 sequences.
pub(crate) fn header_value_to_string(value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
    }
}

/// Returns at most the first `max_chars` characters of `value`.
///
/// The second element is `true` if anything was cut off.
pub fn truncate_value(value: &str, max_chars: usize) -> (&str, bool) {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => (&value[..idx], true),
        None => (value, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value_short_value_untouched() {
        assert_eq!(truncate_value("nosniff", 50), ("nosniff", false));
    }

    #[test]
    fn test_truncate_value_exact_length_untouched() {
        let value = "a".repeat(50);
        assert_eq!(truncate_value(&value, 50), (value.as_str(), false));
    }

    #[test]
    fn test_truncate_value_long_value() {
        let value = "b".repeat(51);
        let (shown, truncated) = truncate_value(&value, 50);
        assert_eq!(shown.len(), 50);
        assert!(truncated);
    }

    #[test]
    fn test_truncate_value_counts_characters_not_bytes() {
        let value = "é".repeat(60);
        let (shown, truncated) = truncate_value(&value, 50);
        assert_eq!(shown.chars().count(), 50);
        assert!(truncated);
    }

    #[test]
    fn test_header_value_lossy_conversion() {
        let value = HeaderValue::from_bytes(b"caf\xe9").unwrap();
        assert_eq!(header_value_to_string(&value), "caf\u{fffd}");
    }

    #[test]
    fn test_inspect_headers_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
        let findings = inspect_headers(&headers);
        let frame = findings
            .iter()
            .find(|f| f.name == "X-Frame-Options")
            .unwrap();
        assert_eq!(frame.value.as_deref(), Some("DENY"));
    }

    #[test]
    fn test_inspect_headers_first_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append("x-frame-options", HeaderValue::from_static("DENY"));
        headers.append("x-frame-options", HeaderValue::from_static("SAMEORIGIN"));
        let findings = inspect_headers(&headers);
        assert_eq!(findings[2].value.as_deref(), Some("DENY"));
    }

    #[test]
    fn test_inspect_headers_ignores_unrelated_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("server", HeaderValue::from_static("nginx"));
        headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
        let findings = inspect_headers(&headers);
        assert_eq!(findings.len(), 5);
        assert!(findings.iter().all(|f| !f.is_present()));
    }
}
