// Per-flavor escaping entry points
//
// This module provides the public escape_*/unescape_* functions, each backed
// by a translator chain built once and reused for every call. Absent-value
// propagation is the caller's Option::map: `value.map(escape_java)` gives
// "absent in, absent out" without a separate function per flavor.

pub mod entities;
pub mod java;
pub mod markup;
pub mod csv;

pub use java::{
    escape_ecmascript, escape_java, escape_json, unescape_ecmascript, unescape_java,
    unescape_json,
};
pub use markup::{
    escape_html3, escape_html4, escape_xml10, escape_xml11, unescape_html3, unescape_html4,
    unescape_xml,
};
pub use csv::{escape_csv, unescape_csv};

use crate::translate::{Translator, apply};

/// Runs a chain that contains no fallible translators.
pub(crate) fn run_infallible(chain: &dyn Translator, input: &str) -> String {
    // Escape chains never return an error for any input string
    apply(chain, input).expect("escape chain is infallible")
}
