//! Ordered composition of translators.

use crate::Result;
use super::Translator;

/// Tries an ordered list of child translators and uses the first that
/// consumes input.
///
/// The policy is first-match-wins, not longest-match: once a child consumes
/// one or more codepoints the remaining children are not consulted, even if
/// a later child would have matched more. If every child declines the
/// aggregate declines too, and the outer walk copies one codepoint verbatim.
///
/// # Examples
///
/// ```
/// use textkit::translate::{apply, AggregateTranslator, LookupTranslator};
///
/// let t = AggregateTranslator::new(vec![
///     Box::new(LookupTranslator::new(&[("\"", "&quot;")])),
///     Box::new(LookupTranslator::new(&[("&", "&amp;")])),
/// ]);
/// assert_eq!(apply(&t, "\"a\" & b").unwrap(), "&quot;a&quot; &amp; b");
/// ```
pub struct AggregateTranslator {
    translators: Vec<Box<dyn Translator>>,
}

impl AggregateTranslator {
    /// Creates an aggregate over `translators`, consulted in the given order.
    pub fn new(translators: Vec<Box<dyn Translator>>) -> Self {
        Self { translators }
    }
}

impl Translator for AggregateTranslator {
    fn translate(&self, input: &[char], index: usize, out: &mut String) -> Result<usize> {
        for translator in &self.translators {
            let consumed = translator.translate(input, index, out)?;
            if consumed > 0 {
                return Ok(consumed);
            }
        }
        Ok(0)
    }
}
