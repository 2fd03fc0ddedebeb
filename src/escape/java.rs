//! Java, EcmaScript and JSON string-literal escaping and unescaping.
//!
//! All three flavors share the same skeleton: a lookup pass for the quote
//! and backslash literals, the control-character mnemonics (`\n`, `\t`, ...),
//! and a range-gated `\uXXXX` escaper for everything outside printable
//! ASCII. They differ only in which quotes are escaped (EcmaScript escapes
//! `'`, JSON does not) and where the safe range ends.
//!
//! Unescaping is shared: the Java unescape chain parses octal escapes,
//! `\uXXXX` sequences, the control mnemonics, and finally the quoted
//! literals, in that order.

use once_cell::sync::Lazy;

use crate::Result;
use crate::translate::{
    AggregateTranslator, LookupTranslator, OctalUnescaper, UnicodeEscaper, UnicodeUnescaper,
    apply,
};
use super::entities::{JAVA_CTRL_CHARS_ESCAPE, invert};
use super::run_infallible;

static ESCAPE_JAVA: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(&[("\"", "\\\""), ("\\", "\\\\")])),
        Box::new(LookupTranslator::new(JAVA_CTRL_CHARS_ESCAPE)),
        Box::new(UnicodeEscaper::outside_of(0x20, 0x7f)),
    ])
});

static ESCAPE_ECMASCRIPT: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(&[
            ("'", "\\'"),
            ("\"", "\\\""),
            ("\\", "\\\\"),
            ("/", "\\/"),
        ])),
        Box::new(LookupTranslator::new(JAVA_CTRL_CHARS_ESCAPE)),
        Box::new(UnicodeEscaper::outside_of(0x20, 0x7f)),
    ])
});

static ESCAPE_JSON: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(&[
            ("\"", "\\\""),
            ("\\", "\\\\"),
            ("/", "\\/"),
        ])),
        Box::new(LookupTranslator::new(JAVA_CTRL_CHARS_ESCAPE)),
        Box::new(UnicodeEscaper::outside_of(0x20, 0x7e)),
    ])
});

static UNESCAPE_JAVA: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(OctalUnescaper),
        Box::new(UnicodeUnescaper),
        Box::new(LookupTranslator::new(&invert(JAVA_CTRL_CHARS_ESCAPE))),
        Box::new(LookupTranslator::new(&[
            ("\\\\", "\\"),
            ("\\\"", "\""),
            ("\\'", "'"),
            ("\\", ""),
        ])),
    ])
});

/// Escapes a string for inclusion in a Java string literal.
///
/// Double quotes and backslashes are escaped, control characters get their
/// mnemonic forms, and everything outside printable ASCII becomes `\uXXXX`
/// (two units for codepoints above the BMP). Single quotes are left alone.
///
/// # Examples
///
/// ```
/// use textkit::escape::escape_java;
///
/// assert_eq!(
///     escape_java("He didn't say, \"Stop!\""),
///     "He didn't say, \\\"Stop!\\\"",
/// );
/// assert_eq!(escape_java("tab\there"), "tab\\there");
/// assert_eq!(escape_java("caf\u{00e9}"), "caf\\u00E9");
/// ```
pub fn escape_java(input: &str) -> String {
    run_infallible(&*ESCAPE_JAVA, input)
}

/// Escapes a string for inclusion in an EcmaScript string literal.
///
/// Like [`escape_java`] but single quotes and forward slashes are escaped
/// too, since EcmaScript literals may be single-quoted and `</script>` must
/// not appear unescaped.
///
/// # Examples
///
/// ```
/// use textkit::escape::escape_ecmascript;
///
/// assert_eq!(
///     escape_ecmascript("He didn't say, \"Stop!\""),
///     "He didn\\'t say, \\\"Stop!\\\"",
/// );
/// ```
pub fn escape_ecmascript(input: &str) -> String {
    run_infallible(&*ESCAPE_ECMASCRIPT, input)
}

/// Escapes a string for inclusion in a JSON string value.
///
/// Escapes `"` and `\` (and `/`), never `'`, per the JSON grammar.
///
/// # Examples
///
/// ```
/// use textkit::escape::escape_json;
///
/// assert_eq!(
///     escape_json("He didn't say, \"Stop!\""),
///     "He didn't say, \\\"Stop!\\\"",
/// );
/// assert_eq!(escape_json("back\\slash"), "back\\\\slash");
/// ```
pub fn escape_json(input: &str) -> String {
    run_infallible(&*ESCAPE_JSON, input)
}

/// Unescapes a Java string literal body.
///
/// Octal escapes, `\uXXXX` sequences and the mnemonic escapes are all
/// decoded; a lone trailing backslash is dropped.
///
/// # Errors
///
/// Returns [`TextError::MalformedEscape`](crate::TextError::MalformedEscape)
/// when a `\u` sequence is truncated, contains non-hex digits, or encodes an
/// unpaired surrogate. The call fails as a whole rather than producing
/// corrupted output.
///
/// # Examples
///
/// ```
/// use textkit::escape::unescape_java;
///
/// assert_eq!(unescape_java("tab\\there").unwrap(), "tab\there");
/// assert_eq!(unescape_java("\\u0041BC").unwrap(), "ABC");
/// assert!(unescape_java("truncated\\u00").is_err());
/// ```
pub fn unescape_java(input: &str) -> Result<String> {
    apply(&*UNESCAPE_JAVA, input)
}

/// Unescapes an EcmaScript string literal body.
///
/// The escape syntax decoded here is identical to [`unescape_java`].
pub fn unescape_ecmascript(input: &str) -> Result<String> {
    apply(&*UNESCAPE_JAVA, input)
}

/// Unescapes a JSON string value.
///
/// The escape syntax decoded here is identical to [`unescape_java`].
pub fn unescape_json(input: &str) -> Result<String> {
    apply(&*UNESCAPE_JAVA, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_java_table() {
        let cases = [
            ("", ""),
            ("plain", "plain"),
            ("He didn't say, \"Stop!\"", "He didn't say, \\\"Stop!\\\""),
            ("back\\slash", "back\\\\slash"),
            ("\n\t\r\u{0008}\u{000C}", "\\n\\t\\r\\b\\f"),
            ("caf\u{00e9}", "caf\\u00E9"),
            ("\u{1F600}", "\\uD83D\\uDE00"),
            // DEL sits inside the Java safe range
            ("\u{007F}", "\u{007F}"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape_java(input), expected, "escape_java({:?})", input);
        }
    }

    #[test]
    fn test_escape_json_leaves_apostrophe_alone() {
        assert_eq!(escape_json("don't"), "don't");
        assert_eq!(escape_json("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_json("a\\b"), "a\\\\b");
        // JSON's safe range ends before DEL
        assert_eq!(escape_json("\u{007F}"), "\\u007F");
    }

    #[test]
    fn test_escape_ecmascript_quotes_both() {
        assert_eq!(escape_ecmascript("don't"), "don\\'t");
        assert_eq!(escape_ecmascript("a/b"), "a\\/b");
    }

    #[test]
    fn test_unescape_java_table() {
        let cases = [
            ("plain", "plain"),
            ("tab\\there", "tab\there"),
            ("\\\"quoted\\\"", "\"quoted\""),
            ("\\u0041", "A"),
            ("\\101", "A"),
            ("\\uD83D\\uDE00", "\u{1F600}"),
            // Lone trailing backslash is swallowed
            ("end\\", "end"),
            ("\\'", "'"),
        ];
        for (input, expected) in cases {
            assert_eq!(unescape_java(input).unwrap(), expected, "unescape_java({:?})", input);
        }
    }

    #[test]
    fn test_unescape_java_malformed_unicode_is_fatal() {
        for input in ["\\u00", "\\uzzzz", "mid\\u12", "\\uD800 alone"] {
            let result = unescape_java(input);
            assert!(result.is_err(), "unescape_java({:?}) should fail", input);
        }
    }

    #[test]
    fn test_round_trip() {
        let values = [
            "plain ascii",
            "quote \" backslash \\ tab \t",
            "unicode \u{00e9}\u{4e2d}\u{1F600}",
            "ctrl \u{0001}\u{001F}",
        ];
        for value in values {
            assert_eq!(
                unescape_java(&escape_java(value)).unwrap(),
                value,
                "java round trip of {:?}",
                value
            );
            assert_eq!(
                unescape_ecmascript(&escape_ecmascript(value)).unwrap(),
                value,
                "ecmascript round trip of {:?}",
                value
            );
            assert_eq!(
                unescape_json(&escape_json(value)).unwrap(),
                value,
                "json round trip of {:?}",
                value
            );
        }
    }

    #[test]
    fn test_double_escaping_is_not_idempotent() {
        let once = escape_java("a\"b");
        let twice = escape_java(&once);
        assert_eq!(once, "a\\\"b");
        assert_eq!(twice, "a\\\\\\\"b");
        assert_ne!(once, twice);
    }
}
