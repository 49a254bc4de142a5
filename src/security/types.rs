//! Header check result types.

use crate::config::GOOD_TIER_MAX_MISSING;

/// Coarse rating of a response derived from how many catalog headers it lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Every catalog header is present
    Excellent,
    /// At most two catalog headers are missing
    Good,
    /// More than two catalog headers are missing
    Warning,
}

impl Tier {
    /// Classifies a missing-header count.
    pub fn from_missing_count(missing: usize) -> Self {
        if missing == 0 {
            Tier::Excellent
        } else if missing <= GOOD_TIER_MAX_MISSING {
            Tier::Good
        } else {
            Tier::Warning
        }
    }

    /// Returns the summary line printed for this tier.
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => "✓ Excellent! All critical security headers are configured.",
            Tier::Good => "⚠ Good, but some security headers are missing.",
            Tier::Warning => "✗ Warning: Multiple security headers are missing.",
        }
    }
}

/// Presence of one catalog header in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFinding {
    /// Canonical header name from the catalog
    pub name: &'static str,
    /// What the header protects against
    pub description: &'static str,
    /// Header value, `None` when the header is missing
    pub value: Option<String>,
}

impl HeaderFinding {
    /// Returns `true` if the response carried this header.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// Outcome of checking one URL against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderReport {
    /// URL that was requested
    pub url: String,
    /// URL of the final response after redirects
    pub final_url: String,
    /// HTTP status code of the final response
    pub status: u16,
    /// One finding per catalog entry, in catalog order
    pub findings: Vec<HeaderFinding>,
}

impl HeaderReport {
    /// Number of catalog headers present.
    pub fn present_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_present()).count()
    }

    /// Number of catalog headers missing.
    pub fn missing_count(&self) -> usize {
        self.total() - self.present_count()
    }

    /// Number of catalog headers checked.
    pub fn total(&self) -> usize {
        self.findings.len()
    }

    /// Rating for this report.
    pub fn tier(&self) -> Tier {
        Tier::from_missing_count(self.missing_count())
    }
}
