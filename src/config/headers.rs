//! Security header catalog.
//!
//! The headers checked on every response, paired with a short description of
//! the attack each one mitigates. Report order follows this list.

/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// X-XSS-Protection header
pub const HEADER_X_XSS_PROTECTION: &str = "X-XSS-Protection";

/// Security headers and their purposes, in report order.
/// To add/remove headers, modify this array.
pub const SECURITY_HEADER_CATALOG: &[(&str, &str)] = &[
    (
        HEADER_STRICT_TRANSPORT_SECURITY,
        "Forces HTTPS connections (prevents downgrade attacks)",
    ),
    (
        HEADER_X_CONTENT_TYPE_OPTIONS,
        "Prevents MIME-type sniffing attacks",
    ),
    (HEADER_X_FRAME_OPTIONS, "Prevents clickjacking attacks"),
    (
        HEADER_CONTENT_SECURITY_POLICY,
        "Prevents XSS and code injection attacks",
    ),
    (HEADER_X_XSS_PROTECTION, "Enables browser XSS filter"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_five_entries_in_order() {
        let names: Vec<&str> = SECURITY_HEADER_CATALOG.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "Strict-Transport-Security",
                "X-Content-Type-Options",
                "X-Frame-Options",
                "Content-Security-Policy",
                "X-XSS-Protection",
            ]
        );
    }

    #[test]
    fn test_catalog_names_are_unique_and_valid_header_names() {
        let mut seen = HashSet::new();
        for (name, description) in SECURITY_HEADER_CATALOG {
            assert!(seen.insert(name.to_ascii_lowercase()), "duplicate {name}");
            assert!(
                reqwest::header::HeaderName::from_bytes(name.as_bytes()).is_ok(),
                "{name} should be a valid header name"
            );
            assert!(!description.is_empty());
        }
    }
}
