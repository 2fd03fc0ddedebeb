// String translators: the composable escaping/unescaping engine
//
// This module provides the Translator trait, the left-to-right codepoint walk
// that drives it, and the translator implementations that escape entry points
// are composed from.

pub mod translator;
pub mod lookup;
pub mod aggregate;
pub mod unicode;
pub mod numeric_entity;
pub mod octal;
pub mod csv;

pub use translator::{Translator, apply};
pub use lookup::LookupTranslator;
pub use aggregate::AggregateTranslator;
pub use unicode::{UnicodeEscaper, UnicodeUnescaper};
pub use numeric_entity::{NumericEntityEscaper, NumericEntityUnescaper, SemicolonPolicy};
pub use octal::OctalUnescaper;
pub use csv::{CsvEscaper, CsvUnescaper};
