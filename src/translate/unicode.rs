//! `\uXXXX` escaping and unescaping.
//!
//! The escaper emits the fixed four-hex-digit form used by Java-family
//! string literals, falling back to the UTF-16 surrogate-pair double form
//! (`\uXXXX\uXXXX`) for codepoints above the Basic Multilingual Plane. The
//! unescaper parses those forms back; a sequence that starts with `\u` but
//! cannot be completed is a fatal error, not a silent passthrough.

use crate::{Result, TextError};
use super::Translator;

/// Escapes codepoints outside a configured safe range as `\uXXXX`.
///
/// Codepoints inside the safe region pass through untouched (zero
/// consumption). Codepoints above `0xFFFF` are emitted as their UTF-16
/// surrogate pair, two `\uXXXX` units, so the output is always consumable by
/// UTF-16-literal parsers.
///
/// # Examples
///
/// ```
/// use textkit::translate::{apply, UnicodeEscaper};
///
/// let t = UnicodeEscaper::outside_of(0x20, 0x7f);
/// let cases = [
///     ("plain", "plain"),
///     ("caf\u{00e9}", "caf\\u00E9"),
///     ("\u{1F600}", "\\uD83D\\uDE00"),
/// ];
/// for (input, expected) in cases {
///     assert_eq!(apply(&t, input).unwrap(), expected);
/// }
/// ```
pub struct UnicodeEscaper {
    low: u32,
    high: u32,
    // true: escape codepoints inside [low, high]; false: escape outside
    escape_inside: bool,
}

impl UnicodeEscaper {
    /// Escapes every codepoint inside the inclusive range `[low, high]`.
    pub fn between(low: u32, high: u32) -> Self {
        Self { low, high, escape_inside: true }
    }

    /// Escapes every codepoint outside the inclusive range `[low, high]`.
    pub fn outside_of(low: u32, high: u32) -> Self {
        Self { low, high, escape_inside: false }
    }

    /// Escapes every codepoint above `codepoint` (exclusive).
    pub fn above(codepoint: u32) -> Self {
        Self::outside_of(0, codepoint)
    }

    /// Escapes every codepoint below `codepoint` (exclusive).
    pub fn below(codepoint: u32) -> Self {
        Self::outside_of(codepoint, char::MAX as u32)
    }

    fn wants(&self, codepoint: u32) -> bool {
        if self.escape_inside {
            codepoint >= self.low && codepoint <= self.high
        } else {
            codepoint < self.low || codepoint > self.high
        }
    }
}

impl Translator for UnicodeEscaper {
    fn translate(&self, input: &[char], index: usize, out: &mut String) -> Result<usize> {
        let Some(c) = input.get(index).copied() else {
            return Ok(0);
        };
        if !self.wants(c as u32) {
            return Ok(0);
        }
        if (c as u32) > 0xFFFF {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04X}", unit));
            }
        } else {
            out.push_str(&format!("\\u{:04X}", c as u32));
        }
        Ok(1)
    }
}

/// Unescapes `\uXXXX` sequences back into codepoints.
///
/// Additional `u` characters after the backslash are tolerated
/// (`\uuu0041` parses the same as `A`). A high-surrogate value is
/// recombined with an immediately following low-surrogate escape into one
/// supplementary codepoint, so the escaper's pair form round-trips.
///
/// # Errors
///
/// Unlike every other unescaper in this crate, a sequence that begins with
/// `\u` but lacks four hex digits, or that encodes an unpaired surrogate, is
/// a [`TextError::MalformedEscape`] error: skipping it would silently
/// corrupt the output.
pub struct UnicodeUnescaper;

/// Parses exactly four hex digits at `input[index..]`, or explains why not.
fn parse_hex4(input: &[char], index: usize) -> Result<u32> {
    if index + 4 > input.len() {
        let rest: String = input[index..].iter().collect();
        return Err(TextError::malformed_escape(format!(
            "Less than 4 hex digits after \\u: {}",
            rest
        )));
    }
    let mut value = 0u32;
    for &c in &input[index..index + 4] {
        let digit = c.to_digit(16).ok_or_else(|| {
            let seen: String = input[index..index + 4].iter().collect();
            TextError::malformed_escape(format!("Unable to parse unicode value: {}", seen))
        })?;
        value = value * 16 + digit;
    }
    Ok(value)
}

impl Translator for UnicodeUnescaper {
    fn translate(&self, input: &[char], index: usize, out: &mut String) -> Result<usize> {
        if input.get(index) != Some(&'\\') || input.get(index + 1) != Some(&'u') {
            return Ok(0);
        }
        let mut i = index + 2;
        // Java literals allow any number of u's: \uuu0041
        while input.get(i) == Some(&'u') {
            i += 1;
        }
        let value = parse_hex4(input, i)?;
        i += 4;

        if (0xDC00..=0xDFFF).contains(&value) {
            // Low surrogate with no preceding high surrogate
            return Err(TextError::malformed_escape(format!(
                "Unpaired low surrogate \\u{:04X}",
                value
            )));
        }
        if (0xD800..=0xDBFF).contains(&value) {
            // High surrogate: must be completed by a \uXXXX low surrogate
            if input.get(i) != Some(&'\\') || input.get(i + 1) != Some(&'u') {
                return Err(TextError::malformed_escape(format!(
                    "High surrogate \\u{:04X} not followed by a low surrogate escape",
                    value
                )));
            }
            let mut j = i + 2;
            while input.get(j) == Some(&'u') {
                j += 1;
            }
            let low = parse_hex4(input, j)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(TextError::malformed_escape(format!(
                    "Expected low surrogate after \\u{:04X}, found \\u{:04X}",
                    value, low
                )));
            }
            let codepoint = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
            let c = char::from_u32(codepoint).ok_or_else(|| {
                TextError::malformed_escape(format!("Invalid codepoint U+{:X}", codepoint))
            })?;
            out.push(c);
            return Ok(j + 4 - index);
        }

        // Non-surrogate BMP values are always valid scalar values
        let c = char::from_u32(value).ok_or_else(|| {
            TextError::malformed_escape(format!("Invalid codepoint U+{:X}", value))
        })?;
        out.push(c);
        Ok(i - index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::apply;

    #[test]
    fn test_escaper_ranges() {
        let cases = [
            (UnicodeEscaper::outside_of(0x20, 0x7f), "ab\u{00e9}", "ab\\u00E9"),
            (UnicodeEscaper::between(0x61, 0x7a), "aZ", "\\u0061Z"),
            (UnicodeEscaper::above(0x7f), "a\u{0080}", "a\\u0080"),
            (UnicodeEscaper::below(0x20), "\ta", "\\u0009a"),
        ];
        for (escaper, input, expected) in cases {
            assert_eq!(apply(&escaper, input).unwrap(), expected, "escaping {:?}", input);
        }
    }

    #[test]
    fn test_escaper_emits_surrogate_pair_form() {
        let escaper = UnicodeEscaper::outside_of(0x20, 0x7f);
        // U+1F600 is D83D DE00 in UTF-16
        assert_eq!(apply(&escaper, "\u{1F600}").unwrap(), "\\uD83D\\uDE00");
    }

    #[test]
    fn test_unescaper_parses_bmp() {
        let cases = [
            ("\\u0041", "A"),
            ("\\uuu0041", "A"),
            ("x\\u00e9y", "x\u{00e9}y"),
            ("\\u0041\\u0042", "AB"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                apply(&UnicodeUnescaper, input).unwrap(),
                expected,
                "unescaping {:?}",
                input
            );
        }
    }

    #[test]
    fn test_unescaper_recombines_surrogate_pairs() {
        assert_eq!(apply(&UnicodeUnescaper, "\\uD83D\\uDE00").unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_unescaper_truncated_is_fatal() {
        let cases = ["\\u00", "\\u", "\\uzzzz", "\\u004", "tail\\u0"];
        for input in cases {
            let err = apply(&UnicodeUnescaper, input).unwrap_err();
            assert!(err.is_malformed_escape(), "{:?} should be fatal, got {:?}", input, err);
        }
    }

    #[test]
    fn test_unescaper_unpaired_surrogate_is_fatal() {
        let cases = ["\\uD800", "\\uD800x", "\\uD800\\u0041", "\\uDC00"];
        for input in cases {
            let err = apply(&UnicodeUnescaper, input).unwrap_err();
            assert!(err.is_malformed_escape(), "{:?} should be fatal, got {:?}", input, err);
        }
    }

    #[test]
    fn test_unescaper_ignores_plain_text() {
        let cases = ["no escapes", "back\\slash", "u0041"];
        for input in cases {
            assert_eq!(apply(&UnicodeUnescaper, input).unwrap(), input);
        }
    }
}
