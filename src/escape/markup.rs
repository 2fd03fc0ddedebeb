//! XML and HTML entity escaping and unescaping.
//!
//! The HTML flavors differ only in how much of the named-entity vocabulary
//! they know: HTML 3 stops at ISO-8859-1, HTML 4 adds the extended set
//! (Greek, punctuation, symbols). The XML flavors know only the five
//! predefined entities but additionally scrub or re-encode the control
//! codepoints the XML grammars prohibit.

use once_cell::sync::Lazy;

use crate::translate::{
    AggregateTranslator, LookupTranslator, NumericEntityEscaper, NumericEntityUnescaper,
};
use super::entities::{
    APOS_ESCAPE, BASIC_ESCAPE, HTML40_EXTENDED_ESCAPE, ISO8859_1_ESCAPE, XML10_PROHIBITED,
    XML11_SPECIALS, invert,
};
use super::run_infallible;

static ESCAPE_XML10: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(BASIC_ESCAPE)),
        Box::new(LookupTranslator::new(APOS_ESCAPE)),
        Box::new(LookupTranslator::new(XML10_PROHIBITED)),
        Box::new(NumericEntityEscaper::between(0x7F, 0x84)),
        Box::new(NumericEntityEscaper::between(0x86, 0x9F)),
    ])
});

static ESCAPE_XML11: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(BASIC_ESCAPE)),
        Box::new(LookupTranslator::new(APOS_ESCAPE)),
        Box::new(LookupTranslator::new(XML11_SPECIALS)),
        Box::new(NumericEntityEscaper::between(0x01, 0x08)),
        Box::new(NumericEntityEscaper::between(0x0E, 0x1F)),
        Box::new(NumericEntityEscaper::between(0x7F, 0x84)),
        Box::new(NumericEntityEscaper::between(0x86, 0x9F)),
    ])
});

static UNESCAPE_XML: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(&invert(BASIC_ESCAPE))),
        Box::new(LookupTranslator::new(&invert(APOS_ESCAPE))),
        Box::new(NumericEntityUnescaper::default()),
    ])
});

static ESCAPE_HTML3: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(BASIC_ESCAPE)),
        Box::new(LookupTranslator::new(ISO8859_1_ESCAPE)),
    ])
});

static UNESCAPE_HTML3: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(&invert(BASIC_ESCAPE))),
        Box::new(LookupTranslator::new(&invert(ISO8859_1_ESCAPE))),
        Box::new(NumericEntityUnescaper::default()),
    ])
});

static ESCAPE_HTML4: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(BASIC_ESCAPE)),
        Box::new(LookupTranslator::new(ISO8859_1_ESCAPE)),
        Box::new(LookupTranslator::new(HTML40_EXTENDED_ESCAPE)),
    ])
});

static UNESCAPE_HTML4: Lazy<AggregateTranslator> = Lazy::new(|| {
    AggregateTranslator::new(vec![
        Box::new(LookupTranslator::new(&invert(BASIC_ESCAPE))),
        Box::new(LookupTranslator::new(&invert(ISO8859_1_ESCAPE))),
        Box::new(LookupTranslator::new(&invert(HTML40_EXTENDED_ESCAPE))),
        Box::new(NumericEntityUnescaper::default()),
    ])
});

/// Escapes a string for XML 1.0 character data or attribute values.
///
/// The five predefined entities are applied, codepoints the XML 1.0 grammar
/// prohibits outright are removed, and the C1 control range is re-encoded as
/// numeric character references.
///
/// # Examples
///
/// ```
/// use textkit::escape::escape_xml10;
///
/// assert_eq!(escape_xml10("\"bread\" & \"butter\""),
///            "&quot;bread&quot; &amp; &quot;butter&quot;");
/// assert_eq!(escape_xml10("a\u{0000}b"), "ab");
/// assert_eq!(escape_xml10("a\u{0080}b"), "a&#128;b");
/// ```
pub fn escape_xml10(input: &str) -> String {
    run_infallible(&*ESCAPE_XML10, input)
}

/// Escapes a string for XML 1.1 character data or attribute values.
///
/// XML 1.1 permits most control codepoints as numeric character references,
/// so they are re-encoded instead of removed; only NUL and the trailing BMP
/// noncharacters are deleted.
///
/// # Examples
///
/// ```
/// use textkit::escape::escape_xml11;
///
/// assert_eq!(escape_xml11("a\u{0001}b"), "a&#1;b");
/// assert_eq!(escape_xml11("a\u{000B}b"), "a&#11;b");
/// assert_eq!(escape_xml11("a\u{0000}b"), "ab");
/// ```
pub fn escape_xml11(input: &str) -> String {
    run_infallible(&*ESCAPE_XML11, input)
}

/// Unescapes XML predefined entities and numeric character references.
///
/// Unrecognized or malformed references pass through unchanged.
///
/// # Examples
///
/// ```
/// use textkit::escape::unescape_xml;
///
/// assert_eq!(unescape_xml("&lt;a&gt;"), "<a>");
/// assert_eq!(unescape_xml("&apos;&#65;&apos;"), "'A'");
/// assert_eq!(unescape_xml("&unknown;"), "&unknown;");
/// ```
pub fn unescape_xml(input: &str) -> String {
    run_infallible(&*UNESCAPE_XML, input)
}

/// Escapes a string using HTML 3 entities (basic markup + ISO-8859-1).
pub fn escape_html3(input: &str) -> String {
    run_infallible(&*ESCAPE_HTML3, input)
}

/// Unescapes HTML 3 entities and numeric character references.
pub fn unescape_html3(input: &str) -> String {
    run_infallible(&*UNESCAPE_HTML3, input)
}

/// Escapes a string using the full HTML 4 entity vocabulary.
///
/// # Examples
///
/// ```
/// use textkit::escape::escape_html4;
///
/// assert_eq!(escape_html4("\"bread\" & \"butter\""),
///            "&quot;bread&quot; &amp; &quot;butter&quot;");
/// assert_eq!(escape_html4("caf\u{00e9}"), "caf&eacute;");
/// assert_eq!(escape_html4("\u{03A9}"), "&Omega;");
/// ```
pub fn escape_html4(input: &str) -> String {
    run_infallible(&*ESCAPE_HTML4, input)
}

/// Unescapes the full HTML 4 entity vocabulary plus numeric references.
///
/// # Examples
///
/// ```
/// use textkit::escape::unescape_html4;
///
/// assert_eq!(unescape_html4("&lt;Fran&ccedil;ais&gt;"), "<Fran\u{00e7}ais>");
/// assert_eq!(unescape_html4("&#x41;&#66;"), "AB");
/// assert_eq!(unescape_html4("&zzzz;"), "&zzzz;");
/// ```
pub fn unescape_html4(input: &str) -> String {
    run_infallible(&*UNESCAPE_HTML4, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml10_table() {
        let cases = [
            ("plain", "plain"),
            ("<tag>", "&lt;tag&gt;"),
            ("it's", "it&apos;s"),
            ("a & b", "a &amp; b"),
            // Prohibited control codepoints are removed
            ("a\u{0000}\u{0008}\u{000B}b", "ab"),
            // Tab, LF, CR are legal XML 1.0 and untouched
            ("a\tb\nc\rd", "a\tb\nc\rd"),
            // C1 range becomes numeric references
            ("a\u{0080}b", "a&#128;b"),
            ("a\u{009F}b", "a&#159;b"),
            // NEL (0x85) is legal and untouched
            ("a\u{0085}b", "a\u{0085}b"),
            ("a\u{FFFF}b", "ab"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape_xml10(input), expected, "escape_xml10({:?})", input);
        }
    }

    #[test]
    fn test_escape_xml11_table() {
        let cases = [
            ("a\u{0000}b", "ab"),
            ("a\u{0001}b", "a&#1;b"),
            ("a\u{0008}b", "a&#8;b"),
            ("a\u{000B}b", "a&#11;b"),
            ("a\u{000C}b", "a&#12;b"),
            ("a\u{000E}b", "a&#14;b"),
            ("a\u{001F}b", "a&#31;b"),
            ("a\u{0080}b", "a&#128;b"),
            ("a\u{FFFE}b", "ab"),
            ("<'&\">", "&lt;&apos;&amp;&quot;&gt;"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape_xml11(input), expected, "escape_xml11({:?})", input);
        }
    }

    #[test]
    fn test_xml_round_trip() {
        // Characters legal in XML 1.0 survive an escape/unescape cycle
        let values = ["plain", "<a href=\"x\">it's</a>", "1 < 2 & 3 > 2", "caf\u{00e9}"];
        for value in values {
            assert_eq!(unescape_xml(&escape_xml10(value)), value, "xml round trip of {:?}", value);
        }
    }

    #[test]
    fn test_escape_html_flavors() {
        // HTML 3 knows ISO-8859-1 names but not the extended set
        assert_eq!(escape_html3("caf\u{00e9}"), "caf&eacute;");
        assert_eq!(escape_html3("\u{03A9}"), "\u{03A9}");
        assert_eq!(escape_html4("\u{03A9}"), "&Omega;");
        assert_eq!(escape_html4("\u{2660}"), "&spades;");
        assert_eq!(escape_html4("<p>\u{00A0}</p>"), "&lt;p&gt;&nbsp;&lt;/p&gt;");
    }

    #[test]
    fn test_unescape_html4_table() {
        let cases = [
            ("plain", "plain"),
            ("&amp;", "&"),
            ("&eacute;", "\u{00e9}"),
            ("&Omega;&omega;", "\u{03A9}\u{03C9}"),
            ("&#65;&#x42;", "AB"),
            // Unknown and malformed references pass through
            ("&zzzz;", "&zzzz;"),
            ("&#zz;", "&#zz;"),
            ("& plain &", "& plain &"),
            // HTML 4 does not define &apos;
            ("&apos;", "&apos;"),
        ];
        for (input, expected) in cases {
            assert_eq!(unescape_html4(input), expected, "unescape_html4({:?})", input);
        }
    }

    #[test]
    fn test_html4_round_trip() {
        let values = [
            "plain",
            "caf\u{00e9} \u{00a9} 2024",
            "\u{0391}\u{03B2}\u{2211}",
            "1 < 2 & \"3\"",
        ];
        for value in values {
            assert_eq!(
                unescape_html4(&escape_html4(value)),
                value,
                "html4 round trip of {:?}",
                value
            );
        }
    }

    #[test]
    fn test_double_escaping_is_not_idempotent() {
        let once = escape_html4("&");
        assert_eq!(once, "&amp;");
        assert_eq!(escape_html4(&once), "&amp;amp;");
    }
}
