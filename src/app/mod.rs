//! Command-line flow helpers.
//!
//! This module provides URL validation and normalization, and the interactive
//! prompt used by the entry point.

pub mod prompt;
pub mod url;

// Re-export public API
pub use prompt::read_url;
pub use self::url::{normalize_url, validate_and_normalize_url, validate_url};
