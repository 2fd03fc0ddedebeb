//! Literal sequence lookup translator.
//!
//! Holds a fixed mapping from short literal character sequences to their
//! replacement text. Candidates are grouped by first character so only a
//! handful of patterns are compared at any input position, and the longest
//! registered pattern wins when several share a prefix.

use indexmap::IndexMap;

use crate::Result;
use super::Translator;

/// Translates literal character sequences into replacement text.
///
/// Patterns must be non-empty. When several patterns share a first character
/// the longest match wins; among equal-length patterns the one registered
/// first wins.
///
/// # Examples
///
/// ```
/// use textkit::translate::{apply, LookupTranslator};
///
/// let cases = [
///     ("&", "&amp;"),
///     ("a&b", "a&amp;b"),
///     ("&&", "&amp;&amp;"),
/// ];
/// let t = LookupTranslator::new(&[("&", "&amp;")]);
/// for (input, expected) in cases {
///     assert_eq!(apply(&t, input).unwrap(), expected);
/// }
/// ```
pub struct LookupTranslator {
    // First character -> candidate (pattern, replacement) pairs,
    // longest pattern first within each group.
    by_first: IndexMap<char, Vec<(Vec<char>, String)>>,
    longest: usize,
}

impl LookupTranslator {
    /// Creates a translator from (pattern, replacement) pairs.
    ///
    /// Empty patterns violate the table invariant and are rejected with a
    /// debug assertion (and skipped in release builds).
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        let mut by_first: IndexMap<char, Vec<(Vec<char>, String)>> = IndexMap::new();
        let mut longest = 0;
        for (pattern, replacement) in pairs {
            debug_assert!(!pattern.is_empty(), "lookup pattern must not be empty");
            let chars: Vec<char> = pattern.chars().collect();
            let Some(first) = chars.first().copied() else {
                continue;
            };
            longest = longest.max(chars.len());
            by_first
                .entry(first)
                .or_default()
                .push((chars, (*replacement).to_string()));
        }
        for candidates in by_first.values_mut() {
            // Stable sort keeps registration order among equal lengths
            candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }
        Self { by_first, longest }
    }

    /// Length in codepoints of the longest registered pattern.
    pub fn longest_pattern(&self) -> usize {
        self.longest
    }
}

impl Translator for LookupTranslator {
    fn translate(&self, input: &[char], index: usize, out: &mut String) -> Result<usize> {
        let Some(first) = input.get(index) else {
            return Ok(0);
        };
        let Some(candidates) = self.by_first.get(first) else {
            return Ok(0);
        };
        let available = input.len() - index;
        for (pattern, replacement) in candidates {
            if pattern.len() <= available && input[index..index + pattern.len()] == pattern[..] {
                out.push_str(replacement);
                return Ok(pattern.len());
            }
        }
        Ok(0)
    }
}
