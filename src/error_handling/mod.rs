//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and header checks
//! - Categorization of `reqwest` errors into failure kinds
//!
//! Every failure of a header check maps to exactly one `FailureKind`, and each
//! kind has its own console message.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, classify_reqwest_error};
pub use types::{CheckError, FailureKind, InitializationError};
