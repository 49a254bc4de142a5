//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the request timeout, URL limits, and console layout.

// Network
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

// URL validation
/// Scheme prepended to input that has neither `http://` nor `https://`
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";
/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;

// Console output
/// Maximum number of characters of a header value shown in the report
pub const MAX_HEADER_VALUE_DISPLAY_CHARS: usize = 50;
/// Width of the `=` rule separating report sections
pub const SEPARATOR_WIDTH: usize = 60;
/// Largest number of missing headers that still rates as "good"
pub const GOOD_TIER_MAX_MISSING: usize = 2;
