//! Console rendering.
//!
//! All user-facing output is line-oriented text written to any `Write`
//! implementation, so the binary writes to stdout and tests write to a buffer.

use std::io::{self, Write};

use crate::config::{MAX_HEADER_VALUE_DISPLAY_CHARS, SEPARATOR_WIDTH};
use crate::error_handling::CheckError;
use crate::security::{truncate_value, HeaderFinding, HeaderReport};

/// Title printed at startup.
pub const APP_TITLE: &str = "HTTP Security Header Checker";
/// Printed when the entered URL is empty.
pub const EMPTY_URL_MESSAGE: &str = "✗ Error: URL cannot be empty";
/// Printed when the entered URL fails validation.
pub const INVALID_URL_MESSAGE: &str = "✗ Error: Invalid URL format";
/// Printed under each missing header.
pub const MISSING_HEADER_RISK: &str = "Website may be vulnerable to related attacks";

/// Writes a rule of `=` characters.
pub fn write_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))
}

/// Writes the application title between two rules.
pub fn write_app_banner<W: Write>(out: &mut W) -> io::Result<()> {
    write_separator(out)?;
    writeln!(out, "{APP_TITLE}")?;
    write_separator(out)
}

/// Writes the line announcing which URL is being checked.
pub fn write_check_banner<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "\nChecking security headers for: {url}")?;
    write_separator(out)
}

fn write_finding<W: Write>(out: &mut W, finding: &HeaderFinding) -> io::Result<()> {
    match &finding.value {
        Some(value) => {
            let (shown, truncated) = truncate_value(value, MAX_HEADER_VALUE_DISPLAY_CHARS);
            writeln!(out, "\n✓ {}: PRESENT", finding.name)?;
            if truncated {
                writeln!(out, "  Value: {shown}...")?;
            } else {
                writeln!(out, "  Value: {shown}")?;
            }
            writeln!(out, "  Purpose: {}", finding.description)
        }
        None => {
            writeln!(out, "\n✗ {}: MISSING", finding.name)?;
            writeln!(out, "  Purpose: {}", finding.description)?;
            writeln!(out, "  Risk: {MISSING_HEADER_RISK}")
        }
    }
}

/// Writes one block per finding followed by the summary and tier line.
pub fn write_report<W: Write>(out: &mut W, report: &HeaderReport) -> io::Result<()> {
    for finding in &report.findings {
        write_finding(out, finding)?;
    }

    writeln!(out)?;
    write_separator(out)?;
    writeln!(
        out,
        "Summary: {}/{} security headers present",
        report.present_count(),
        report.total()
    )?;
    writeln!(out, "{}", report.tier().message())
}

/// Returns the console message for a failed check.
pub fn failure_message(error: &CheckError) -> String {
    match error {
        CheckError::Timeout => {
            "✗ Error: Request timed out. The website took too long to respond.".to_string()
        }
        CheckError::Connect => {
            "✗ Error: Could not connect to the website. Check the URL and your internet connection."
                .to_string()
        }
        CheckError::Request(e) => format!("✗ Error: {e}"),
        CheckError::Unexpected(msg) => format!("✗ Unexpected error: {msg}"),
    }
}

/// Writes the console message for a failed check.
pub fn write_failure<W: Write>(out: &mut W, error: &CheckError) -> io::Result<()> {
    writeln!(out, "{}", failure_message(error))
}
