//! Enclisis to proclisis rewriting.
//!
//! Moves hyphen-attached object pronouns in front of their verb
//! (`encontrou-se` → `se encontrou`, `amá-lo` → `o amar`) and then re-applies
//! sentence capitalization over the whole text.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// How an enclitic pronoun is written once moved before the verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PronounForm {
    /// Moved unchanged (`-se` → `se`)
    Plain,
    /// Contracted object form: keeps its last letter and restores the
    /// verb's infinitive ending (`amá-lo` → `o amar`)
    Contracted,
}

/// Closed set of enclitic pronouns.
pub const ENCLITIC_PRONOUNS: &[(&str, PronounForm)] = &[
    ("me", PronounForm::Plain),
    ("te", PronounForm::Plain),
    ("se", PronounForm::Plain),
    ("lo", PronounForm::Contracted),
    ("la", PronounForm::Contracted),
    ("lhe", PronounForm::Plain),
    ("lhes", PronounForm::Plain),
    ("nos", PronounForm::Plain),
    ("vos", PronounForm::Plain),
];

/// Accented verb endings and the infinitive ending that replaces them.
pub const VERB_ENDINGS: &[(char, &str)] = &[
    ('á', "ar"),
    ('é', "er"),
    ('ê', "er"),
    ('í', "ir"),
    ('ó', "or"),
    ('ô', "or"),
];

static ENCLISIS_RE: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = ENCLITIC_PRONOUNS
        .iter()
        .map(|(suffix, _)| *suffix)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)(\w+)-({})(\W|$)", suffixes)).unwrap()
});

static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s*").unwrap());

/// Rewrite every verb-enclitic construction as pronoun-verb, then apply
/// sentence case to the result.
pub fn rewrite_enclisis(text: &str) -> String {
    let rewritten = ENCLISIS_RE.replace_all(text, |caps: &Captures| {
        let verb = &caps[1];
        let suffix = &caps[2];
        let trailing = &caps[3];

        match pronoun_form(suffix) {
            PronounForm::Contracted => {
                let pronoun = suffix.chars().last().map(String::from).unwrap_or_default();
                format!("{} {}{}", pronoun, correct_verb_ending(verb), trailing)
            }
            PronounForm::Plain => format!("{} {}{}", suffix, verb, trailing),
        }
    });
    apply_sentence_case(&rewritten)
}

fn pronoun_form(suffix: &str) -> PronounForm {
    let suffix = suffix.to_lowercase();
    ENCLITIC_PRONOUNS
        .iter()
        .find(|(candidate, _)| *candidate == suffix)
        .map(|(_, form)| *form)
        .unwrap_or(PronounForm::Plain)
}

/// Replace a final accented vowel with the matching infinitive ending.
///
/// Verbs without an accented final vowel are returned unchanged.
pub fn correct_verb_ending(verb: &str) -> String {
    let mut chars = verb.chars();
    let Some(last) = chars.next_back() else {
        return String::new();
    };
    let last = last.to_lowercase().next().unwrap_or(last);

    match VERB_ENDINGS.iter().find(|(accented, _)| *accented == last) {
        Some((_, ending)) => format!("{}{}", chars.as_str(), ending),
        None => verb.to_string(),
    }
}

/// Capitalize the first character of every sentence and lower-case the rest.
///
/// Sentences end at `.`, `!` or `?`; the punctuation and the whitespace after
/// it are kept verbatim. Whitespace inside a sentence collapses to single
/// spaces. Proper nouns in mid-sentence are lower-cased too.
pub fn apply_sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for delimiter in SENTENCE_END_RE.find_iter(text) {
        push_sentence(&mut out, &text[last..delimiter.start()]);
        out.push_str(delimiter.as_str());
        last = delimiter.end();
    }
    push_sentence(&mut out, &text[last..]);
    out
}

fn push_sentence(out: &mut String, fragment: &str) {
    let sentence = fragment.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = sentence.chars();
    if let Some(first) = chars.next() {
        let upper = first.to_uppercase();
        if upper.len() == 1 {
            out.extend(upper);
        } else {
            out.push(first);
        }
        out.push_str(&chars.as_str().to_lowercase());
    }
}
