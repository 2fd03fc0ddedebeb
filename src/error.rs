//! Error types and result type for the textkit crate.
//!
//! This module defines all error variants that can occur when unescaping
//! strings or validating arguments. It uses the `snafu` library for ergonomic
//! error handling with automatic backtrace capture.
//!
//! # Examples
//!
//! ```
//! use textkit::{Result, TextError};
//!
//! fn parse_escape() -> Result<String> {
//!     // Return an error
//!     Err(TextError::malformed_escape("Truncated \\u sequence"))
//! }
//!
//! fn handle_error() {
//!     match parse_escape() {
//!         Ok(data) => println!("Success: {}", data),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`TextError::MalformedEscape`]: an escape sequence started but cannot be parsed
//! - [`TextError::InvalidParameter`]: invalid function parameters or failed validation
//! - [`TextError::MissingValue`]: a required value was absent
//!
//! Note that a translator *declining* to match is not an error anywhere in
//! this crate; it is signaled by a zero-consumption return and falls through
//! to a verbatim copy.

use snafu::{Backtrace, Snafu};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the textkit crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `TextError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TextError {
    /// An escape sequence began correctly but cannot be parsed.
    ///
    /// This is fatal for the surrounding `unescape_*` call: the caller gets
    /// either a fully valid output string or this error, never corrupted
    /// output.
    #[snafu(display("Malformed escape sequence: {message}"))]
    MalformedEscape {
        message: String,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters, or a validated value
    /// failed its predicate.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// A required value was absent.
    ///
    /// Kept distinct from [`TextError::InvalidParameter`] so callers can tell
    /// "nothing was supplied" apart from "something invalid was supplied".
    #[snafu(display("Missing value: {message}"))]
    MissingValue {
        message: String,
        backtrace: Backtrace,
    },
}

/// Helper methods for creating errors without context providers.
impl TextError {
    /// Creates a `MalformedEscape` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use textkit::TextError;
    ///
    /// let error = TextError::malformed_escape("Less than 4 hex digits after \\u");
    /// ```
    pub fn malformed_escape<S: Into<String>>(message: S) -> Self {
        Self::MalformedEscape {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidParameter` error with the given message.
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `MissingValue` error with the given message.
    pub fn missing_value<S: Into<String>>(message: S) -> Self {
        Self::MissingValue {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `MalformedEscape` variant.
    pub fn is_malformed_escape(&self) -> bool {
        if let TextError::MalformedEscape { .. } = self {
            return true;
        }
        false
    }

    /// Checks if this error is a `MissingValue` variant.
    pub fn is_missing_value(&self) -> bool {
        if let TextError::MissingValue { .. } = self {
            return true;
        }
        false
    }
}

/// A specialized `Result` type for textkit operations.
///
/// This is a convenience type alias that uses [`TextError`] as the error type.
pub type Result<T> = std::result::Result<T, TextError>;
