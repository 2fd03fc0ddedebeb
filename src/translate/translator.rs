//! The translator contract and the walk that drives it.
//!
//! A translator is asked, at a given codepoint index, whether it can rewrite
//! the content beginning there. It answers by writing replacement text to the
//! output and returning how many codepoints it consumed; returning 0 means
//! "no match here", which is a normal outcome, never a failure. [`apply`]
//! walks an input string left to right, delegating each position to a
//! translator and copying one codepoint verbatim whenever the translator
//! declines.
//!
//! Positions and consumed counts are in Unicode codepoints. Rust strings
//! cannot contain unpaired surrogates, so a translator can never be asked to
//! start in the middle of one.

use crate::Result;

/// Trait for components that attempt to match and rewrite content starting
/// at a given position.
///
/// Implementations are immutable after construction; a single translator
/// instance is reused for every call and is safe for unsynchronized
/// concurrent use.
pub trait Translator: Send + Sync {
    /// Attempts to translate the content of `input` beginning at `index`.
    ///
    /// On a match, writes the replacement to `out` and returns the number of
    /// codepoints consumed (always >= 1). Returns `Ok(0)` when nothing
    /// matches at `index`; the caller is then responsible for copying one
    /// codepoint verbatim and advancing.
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal conditions: an escape sequence that
    /// started but cannot be parsed, or a violated invocation precondition.
    /// "No match" is never an error.
    fn translate(&self, input: &[char], index: usize, out: &mut String) -> Result<usize>;
}

/// Runs `translator` over the whole of `input` and returns the rewritten
/// string.
///
/// Every position the translator declines is copied through unchanged, so
/// the output is always a complete rewrite of the input, never a partial
/// result.
///
/// # Examples
///
/// ```
/// use textkit::translate::{apply, LookupTranslator};
///
/// let t = LookupTranslator::new(&[("<", "&lt;"), (">", "&gt;")]);
/// assert_eq!(apply(&t, "a < b").unwrap(), "a &lt; b");
/// assert_eq!(apply(&t, "plain").unwrap(), "plain");
/// ```
///
/// # Errors
///
/// Propagates the first error returned by `translator`; no partial output is
/// observable in that case.
pub fn apply(translator: &dyn Translator, input: &str) -> Result<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut index = 0;
    while index < chars.len() {
        let consumed = translator.translate(&chars, index, &mut out)?;
        if consumed == 0 {
            // No translator matched here, copy one codepoint verbatim
            out.push(chars[index]);
            index += 1;
        } else {
            index += consumed;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replaces 'a' with "A!" and declines everything else.
    struct UpperA;

    impl Translator for UpperA {
        fn translate(&self, input: &[char], index: usize, out: &mut String) -> Result<usize> {
            if input[index] == 'a' {
                out.push_str("A!");
                return Ok(1);
            }
            Ok(0)
        }
    }

    #[test]
    fn test_apply_copies_declined_positions() {
        let cases = [
            ("abc", "A!bc"),
            ("xyz", "xyz"),
            ("aaa", "A!A!A!"),
            ("", ""),
            ("b\u{1F600}a", "b\u{1F600}A!"),
        ];
        for (input, expected) in cases {
            let result = apply(&UpperA, input).unwrap();
            assert_eq!(result, expected, "apply on {:?} should be {:?}", input, expected);
        }
    }
}
