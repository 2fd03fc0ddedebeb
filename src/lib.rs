//! # textkit - String Escaping Translators and Primitive Helpers
//!
//! This crate provides a small collection of independent utility libraries:
//! composable string escaping/unescaping translators, boolean conversion
//! helpers, and argument validation helpers.
//!
//! ## Features
//!
//! - **Escape/unescape strings**: Java, EcmaScript and JSON string literals,
//!   XML 1.0/1.1, HTML 3 and HTML 4 entities, CSV column quoting
//! - **Composable translators**: build custom escaping flavors from lookup
//!   tables, numeric-entity codecs and Unicode range escapers
//! - **Codepoint-aware traversal**: supplementary-plane characters escape to
//!   their UTF-16 surrogate pair form and round-trip back losslessly
//! - **Boolean conversions**: the full integer/string truth-table family
//! - **Argument validation**: precondition helpers with distinct
//!   absent-value and invalid-value failures
//!
//! ## Quick Start
//!
//! ### Escaping strings
//!
//! ```
//! use textkit::escape::{escape_java, escape_html4, unescape_html4, escape_csv};
//!
//! assert_eq!(escape_java("say \"hi\"\n"), "say \\\"hi\\\"\\n");
//! assert_eq!(escape_html4("caf\u{00e9}"), "caf&eacute;");
//! assert_eq!(unescape_html4("caf&eacute;"), "caf\u{00e9}");
//! assert_eq!(escape_csv("a,b"), "\"a,b\"");
//!
//! // Absent value in, absent value out
//! let absent: Option<&str> = None;
//! assert_eq!(absent.map(escape_java), None);
//! ```
//!
//! ### Building a custom translator
//!
//! ```
//! use textkit::translate::{apply, AggregateTranslator, LookupTranslator, UnicodeEscaper};
//!
//! let chain = AggregateTranslator::new(vec![
//!     Box::new(LookupTranslator::new(&[("%", "%25"), (" ", "%20")])),
//!     Box::new(UnicodeEscaper::above(0x7f)),
//! ]);
//! assert_eq!(apply(&chain, "50% caf\u{00e9}").unwrap(), "50%25%20caf\\u00E9");
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - **Translator engine**: [`translate`] for the [`Translator`] trait, the
//!   codepoint walk, and the translator building blocks
//! - **Escaping flavors**: [`escape`] for the prebuilt per-flavor entry
//!   points and their entity tables
//! - **Boolean helpers**: [`boolean`] for truth-table conversions
//! - **Validation helpers**: [`validate`] for precondition checks
//!
//! Translator chains are built once inside process-wide statics and are
//! immutable afterward, so every entry point is safe for unsynchronized
//! concurrent use.
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are
//! represented by [`TextError`]. The crate uses the `snafu` library for
//! ergonomic error handling with context and backtraces. A translator
//! declining to match is never an error; only a malformed `\uXXXX` sequence,
//! a violated precondition, or an absent required value produces one.
//!
//! ```
//! use textkit::{Result, TextError};
//!
//! fn example() -> Result<String> {
//!     // Operations that may fail return Result<T>
//!     Ok("success".to_string())
//! }
//! ```

pub mod boolean;
pub mod error;
pub mod escape;
pub mod translate;
pub mod validate;

// Re-export commonly used types for convenience
pub use translate::Translator;

// Re-export error types for convenience
pub use error::{Result, TextError, snafu};
