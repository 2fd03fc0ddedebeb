//! CSV column escaping and unescaping entry points.

use crate::translate::{CsvEscaper, CsvUnescaper};
use super::run_infallible;

/// Escapes a single CSV column value.
///
/// Values containing a comma, double quote, carriage return, or line feed
/// are wrapped in double quotes with embedded quotes doubled; anything else
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use textkit::escape::escape_csv;
///
/// assert_eq!(escape_csv("abc"), "abc");
/// assert_eq!(escape_csv("a,b"), "\"a,b\"");
/// assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape_csv(input: &str) -> String {
    run_infallible(&CsvEscaper, input)
}

/// Unescapes a single CSV column value.
///
/// A value wrapped in double quotes loses them and every doubled quote
/// collapses to one; an unquoted value is returned unchanged.
///
/// # Examples
///
/// ```
/// use textkit::escape::unescape_csv;
///
/// assert_eq!(unescape_csv("abc"), "abc");
/// assert_eq!(unescape_csv("\"a,b\""), "a,b");
/// assert_eq!(unescape_csv("\"a\"\"b\""), "a\"b");
/// ```
pub fn unescape_csv(input: &str) -> String {
    run_infallible(&CsvUnescaper, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_table() {
        let cases = [
            ("", ""),
            ("abc", "abc"),
            ("a,b", "\"a,b\""),
            ("a\nb", "\"a\nb\""),
            ("a\"b", "\"a\"\"b\""),
            ("no special chars!", "no special chars!"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape_csv(input), expected, "escape_csv({:?})", input);
        }
    }

    #[test]
    fn test_unescape_csv_table() {
        let cases = [
            ("", ""),
            ("abc", "abc"),
            ("\"a,b\"", "a,b"),
            ("\"a\"\"b\"", "a\"b"),
            ("a\"b", "a\"b"),
        ];
        for (input, expected) in cases {
            assert_eq!(unescape_csv(input), expected, "unescape_csv({:?})", input);
        }
    }

    #[test]
    fn test_csv_round_trip() {
        let values = ["plain", "a,b", "multi\nline", "quote\"inside", ""];
        for value in values {
            assert_eq!(unescape_csv(&escape_csv(value)), value, "csv round trip of {:?}", value);
        }
    }
}
