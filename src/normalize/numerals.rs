//! Numeral expansion: rewrites digits as Brazilian Portuguese words.
//!
//! Tokens are recognized by an ordered rule table. All rules are compiled
//! into a single leftmost-first alternation, so when two rules could match
//! at the same position the one listed first wins (a currency amount is
//! never read as a bare decimal).

use regex::{Captures, Regex};
use std::sync::LazyLock;

const UNITS: [&str; 10] = [
    "zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "",
    "",
    "vinte",
    "trinta",
    "quarenta",
    "cinquenta",
    "sessenta",
    "setenta",
    "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Largest value that has a word form.
pub const MAX_SPELLED: u64 = 999_999_999;

/// Class of a numeric token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralKind {
    /// `R$ 1.500,00` (marker matched in either case)
    Currency,
    /// `70%`, `12,5%`
    Percent,
    /// `1.500`, `3,14`, `2.5`
    Decimal,
    /// `42`
    Integer,
}

/// Token rules in priority order.
pub const NUMERAL_RULES: &[(NumeralKind, &str)] = &[
    (NumeralKind::Currency, r"[Rr]\$\s*[0-9]+(?:\.[0-9]{3})*(?:,[0-9]{1,2})?"),
    (
        NumeralKind::Percent,
        r"\b(?:[0-9]+(?:\.[0-9]{3})+(?:,[0-9]+)?|[0-9]+(?:[.,][0-9]+)?) ?%",
    ),
    (
        NumeralKind::Decimal,
        r"\b(?:[0-9]+(?:\.[0-9]{3})+(?:,[0-9]+)?|[0-9]+[.,][0-9]+)\b",
    ),
    (NumeralKind::Integer, r"\b[0-9]+\b"),
];

static NUMERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = NUMERAL_RULES
        .iter()
        .map(|(kind, rule)| format!("(?P<{}>{})", kind.group_name(), rule))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).unwrap()
});

impl NumeralKind {
    fn group_name(&self) -> &'static str {
        match self {
            NumeralKind::Currency => "currency",
            NumeralKind::Percent => "percent",
            NumeralKind::Decimal => "decimal",
            NumeralKind::Integer => "integer",
        }
    }

    /// Spell out a token of this kind. `None` leaves the token as written.
    pub fn expand(&self, token: &str) -> Option<String> {
        match self {
            NumeralKind::Currency => currency_to_words(token),
            NumeralKind::Percent => {
                let number = token.trim_end_matches('%').trim_end();
                Some(format!("{} por cento", decimal_to_words(number)?))
            }
            NumeralKind::Decimal => decimal_to_words(token),
            NumeralKind::Integer => number_to_words(token.parse().ok()?),
        }
    }
}

/// Convert an integer to words, or `None` above [`MAX_SPELLED`].
///
/// ```
/// use iramuteq_prep::normalize::number_to_words;
///
/// assert_eq!(number_to_words(2013).as_deref(), Some("dois mil e treze"));
/// assert_eq!(number_to_words(100).as_deref(), Some("cem"));
/// assert_eq!(number_to_words(1_000_000_000), None);
/// ```
pub fn number_to_words(n: u64) -> Option<String> {
    (n <= MAX_SPELLED).then(|| spell(n))
}

fn spell(n: u64) -> String {
    match n {
        0..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let (ten, unit) = (n / 10, n % 10);
            if unit == 0 {
                TENS[ten as usize].to_string()
            } else {
                format!("{} e {}", TENS[ten as usize], UNITS[unit as usize])
            }
        }
        100 => "cem".to_string(),
        101..=999 => {
            let (hundred, rest) = (n / 100, n % 100);
            if rest == 0 {
                HUNDREDS[hundred as usize].to_string()
            } else {
                format!("{} e {}", HUNDREDS[hundred as usize], spell(rest))
            }
        }
        1_000..=999_999 => {
            let (thousand, rest) = (n / 1_000, n % 1_000);
            let head = if thousand == 1 {
                "mil".to_string()
            } else {
                format!("{} mil", spell(thousand))
            };
            match rest {
                0 => head,
                1..=99 => format!("{} e {}", head, spell(rest)),
                _ => format!("{} {}", head, spell(rest)),
            }
        }
        1_000_000..=MAX_SPELLED => {
            let (million, rest) = (n / 1_000_000, n % 1_000_000);
            let scale = if million == 1 { "milhão" } else { "milhões" };
            let head = format!("{} {}", spell(million), scale);
            if rest == 0 {
                head
            } else {
                format!("{} {}", head, spell(rest))
            }
        }
        _ => n.to_string(),
    }
}

/// Replace every numeric token in `text` with its word form.
///
/// Tokens whose value cannot be spelled out are left unchanged.
pub fn expand_numerals(text: &str) -> String {
    NUMERAL_RE
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            matched_kind(caps)
                .and_then(|kind| kind.expand(token))
                .unwrap_or_else(|| token.to_string())
        })
        .into_owned()
}

/// Classify a token that consists of exactly one numeral.
pub fn classify_numeral(token: &str) -> Option<NumeralKind> {
    let caps = NUMERAL_RE.captures(token)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 || whole.end() != token.len() {
        return None;
    }
    matched_kind(&caps)
}

fn matched_kind(caps: &Captures) -> Option<NumeralKind> {
    NUMERAL_RULES
        .iter()
        .map(|(kind, _)| *kind)
        .find(|kind| caps.name(kind.group_name()).is_some())
}

fn currency_to_words(token: &str) -> Option<String> {
    // The marker is `R$` or `r$` (sentence case may have lowered it).
    let amount = token[2..].trim();
    let (int_part, frac) = amount.split_once(',').unwrap_or((amount, "00"));

    let reais: u64 = int_part.replace('.', "").parse().ok()?;
    let cents = format!("{:0<2}", &frac[..frac.len().min(2)]);
    let centavos: u64 = cents.parse().ok()?;

    let mut words = format!("{} reais", number_to_words(reais)?);
    if centavos > 0 {
        words.push_str(" e ");
        words.push_str(&number_to_words(centavos)?);
        words.push_str(" centavos");
    }
    Some(words)
}

fn decimal_to_words(token: &str) -> Option<String> {
    let (int_part, frac) = split_decimal(token);
    let digits: String = int_part.chars().filter(|c| *c != '.').collect();

    let mut words = number_to_words(digits.parse().ok()?)?;
    let frac = frac.trim_end_matches('0');
    if !frac.is_empty() {
        words.push_str(" vírgula ");
        words.push_str(&number_to_words(frac.parse().ok()?)?);
    }
    Some(words)
}

/// Split a number into integer and fractional digits.
///
/// A comma is always the fractional separator. Without one, dots are
/// thousands separators when every group after the first has three digits.
fn split_decimal(token: &str) -> (&str, &str) {
    if let Some(parts) = token.split_once(',') {
        return parts;
    }
    if is_grouped(token) {
        return (token, "");
    }
    token.split_once('.').unwrap_or((token, ""))
}

fn is_grouped(token: &str) -> bool {
    token.contains('.') && token.split('.').skip(1).all(|group| group.len() == 3)
}
