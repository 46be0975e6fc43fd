//! Linguistic normalization of Portuguese text.
//!
//! - [`numerals`]: digits, currency and percentages to words
//! - [`pronouns`]: enclisis to proclisis and sentence case
//! - [`sanitize`]: the full cleanup pipeline applied to every segment body

pub mod numerals;
pub mod pronouns;
mod sanitize;

pub use numerals::{classify_numeral, expand_numerals, number_to_words, NumeralKind};
pub use pronouns::{apply_sentence_case, correct_verb_ending, rewrite_enclisis};
pub use sanitize::{sanitize, strip_diacritics, SanitizeOptions, Sanitizer};
