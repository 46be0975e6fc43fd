//! Text sanitizing pipeline for IRaMuTeQ corpora.
//!
//! IRaMuTeQ treats `*`, `$`, `%`, quotes and hyphens as markup or noise, so
//! every segment body goes through this pipeline before it is written.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::numerals::expand_numerals;
use super::pronouns::{apply_sentence_case, rewrite_enclisis};

static HYPHEN_JOIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w)-\s*(\w)").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"“”‘’«»\-–—$%*…]|\.{3}"#).unwrap());
static PAGE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:[0-9]+\s+)+|(?:\s+[0-9]+)+$").unwrap());

/// Options for text sanitizing.
#[derive(Debug, Clone, Default)]
pub struct SanitizeOptions {
    /// Keep accents and other diacritics (stripped by default)
    pub preserve_accents: bool,
}

impl SanitizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or strip diacritics.
    pub fn with_preserve_accents(mut self, preserve: bool) -> Self {
        self.preserve_accents = preserve;
        self
    }
}

/// Sanitizing pipeline.
///
/// Stages, in order: enclisis rewrite, numeral expansion, hyphen joining,
/// isolated hyphen removal, noise character removal, diacritic stripping,
/// whitespace collapse, page number stripping, trim, and a final sentence
/// case pass so capitalization reflects the cleaned text. Running the
/// pipeline on its own output returns it unchanged.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    options: SanitizeOptions,
}

impl Sanitizer {
    /// Create a new sanitizer with the given options.
    pub fn new(options: SanitizeOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Process text through the pipeline.
    ///
    /// Returns an empty string for empty or whitespace-only input.
    pub fn process(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let mut result = rewrite_enclisis(text);
        result = expand_numerals(&result);

        result = join_hyphenated(&result);
        result = replace_isolated_hyphens(&result);
        result = remove_noise(&result);

        if !self.options.preserve_accents {
            result = strip_diacritics(&result);
        }

        // Removed characters may leave runs of spaces behind.
        result = WHITESPACE_RE.replace_all(&result, " ").into_owned();

        result = PAGE_NUMBER_RE.replace_all(&result, "").into_owned();

        apply_sentence_case(result.trim())
    }
}

/// Sanitize `text` with default options and the given accent handling.
pub fn sanitize(text: &str, preserve_accents: bool) -> String {
    Sanitizer::new(SanitizeOptions::new().with_preserve_accents(preserve_accents)).process(text)
}

/// Join words split by a hyphen, including across a line break, with `_`.
fn join_hyphenated(text: &str) -> String {
    let mut result = text.to_string();
    // Matches consume the second word character, so chains like `a-b-c`
    // need another pass.
    while HYPHEN_JOIN_RE.is_match(&result) {
        result = HYPHEN_JOIN_RE.replace_all(&result, "${1}_${2}").into_owned();
    }
    result
}

/// Replace hyphens that touch no word character on either side with a space.
fn replace_isolated_hyphens(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let before = i.checked_sub(1).map(|j| chars[j]).is_some_and(is_word_char);
            let after = chars.get(i + 1).copied().is_some_and(is_word_char);
            if c == '-' && !before && !after {
                ' '
            } else {
                c
            }
        })
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Remove quotes, hyphens and dashes, `$`, `%`, `*` and ellipses.
fn remove_noise(text: &str) -> String {
    let mut result = text.to_string();
    // Removing a quote between dots can form a new ellipsis.
    while NOISE_RE.is_match(&result) {
        result = NOISE_RE.replace_all(&result, "").into_owned();
    }
    result
}

/// Strip combining marks after canonical decomposition (`ação` → `acao`).
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize("", false), "");
        assert_eq!(sanitize("   \n\t  ", true), "");
    }

    #[test]
    fn test_pipeline_rewrites_and_expands() {
        assert_eq!(
            sanitize("Ele encontrou-se com 2 amigos.", false),
            "Ele se encontrou com dois amigos."
        );
        assert_eq!(
            sanitize("Ele quer amá-lo por R$ 1.500,05.", true),
            "Ele quer o amar por mil quinhentos reais e cinco centavos."
        );
    }

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(sanitize("Três orações.", false), "Tres oracoes.");
        assert_eq!(sanitize("Três orações.", true), "Três orações.");
        assert_eq!(strip_diacritics("ação çã"), "acao ca");
    }

    #[test]
    fn test_hyphen_handling() {
        assert_eq!(sanitize("guarda-chuva", false), "Guarda_chuva");
        assert_eq!(sanitize("infor-\nmação", false), "Infor_macao");
        assert_eq!(sanitize("pé-de-moleque", false), "Pe_de_moleque");
        assert_eq!(sanitize("x-y-z", false), "X_y_z");
        assert_eq!(sanitize("texto - outro", false), "Texto outro");
    }

    #[test]
    fn test_noise_removal() {
        assert_eq!(sanitize("Ele disse \"olá\"...", false), "Ele disse ola");
        assert_eq!(sanitize("*nota* com 5%", false), "Nota com cinco por cento");
        assert_eq!(sanitize("“citação”", true), "Citação");
    }

    #[test]
    fn test_page_numbers_stripped() {
        assert_eq!(sanitize("Introdução 3000000000", false), "Introducao");
        assert_eq!(sanitize("3000000000 4000000000 Fim", false), "Fim");
    }

    #[test]
    fn test_sentence_case_follows_cleanup() {
        assert_eq!(
            sanitize("\"olá\" disse ele. 2 casas.", false),
            "Ola disse ele. Dois casas."
        );
    }

    #[test]
    fn test_no_double_spaces_after_noise_removal() {
        assert_eq!(sanitize("Fim. — Começo", false), "Fim. Comeco");
        assert_eq!(sanitize("Ele saiu. * Nota", false), "Ele saiu. Nota");
        assert_eq!(sanitize("Disse: olá! “ Sim ” talvez", false), "Disse: ola! Sim talvez");
        assert_eq!(sanitize("— Vamos? — perguntou ela.", true), "Vamos? Perguntou ela.");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Ele encontrou-se com Maria em 2013. Custou R$ 1.500,05!",
            "\"olá\" disse ele. 2 casas... 70% - talvez",
            "CAPÍTULO 1\nIntrodução ao tema-chave, com 3,14 e 1.500 itens",
            ".\"..…. *** $$ %",
            "R$ 1.000.000.000 e 3000000000",
            "a-b-c-d-e fazê-lo",
            "  12   texto   ",
            "Fim. — Começo",
            "Ele saiu. * Nota",
            "Disse: olá! “ Sim ” talvez",
            "— Vamos? — perguntou ela. … Talvez.",
        ];
        for preserve in [false, true] {
            for input in inputs {
                let once = sanitize(input, preserve);
                assert_eq!(sanitize(&once, preserve), once, "input: {:?}", input);
            }
        }
    }
}
