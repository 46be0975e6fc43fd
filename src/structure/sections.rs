//! Section segmentation at heading lines.

use regex::Regex;
use std::sync::LazyLock;

/// Kind of heading that opens a new section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    /// `CAPÍTULO IV`, `Seção 2`, `PARTE III`
    Division,
    /// `1. Introdução`
    Numbered,
}

/// Heading rules, tried in order.
pub const HEADING_RULES: &[(HeadingKind, &str)] = &[
    (
        HeadingKind::Division,
        r"(?i)^(?:CAPÍTULO|CAPITULO|SEÇÃO|SECAO|PARTE)\s+[IVXLCDM0-9]+\b",
    ),
    (HeadingKind::Numbered, r"^[0-9]+\.\s+[A-ZÀ-Ü]"),
];

static HEADING_RES: LazyLock<Vec<(HeadingKind, Regex)>> = LazyLock::new(|| {
    HEADING_RULES
        .iter()
        .map(|(kind, pattern)| (*kind, Regex::new(pattern).unwrap()))
        .collect()
});

/// Classify a line as a heading, if it starts like one.
pub fn classify_heading(line: &str) -> Option<HeadingKind> {
    HEADING_RES
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(kind, _)| *kind)
}

/// Split text into sections, each starting at a heading line.
///
/// A heading closes whatever lines were accumulated before it and opens a
/// new section that includes the heading. Sections borrow from `text`, and
/// joining them with `\n` gives back `text` exactly.
pub fn split_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split('\n') {
        if offset > start && classify_heading(line).is_some() {
            sections.push(&text[start..offset - 1]);
            start = offset;
        }
        offset += line.len() + 1;
    }
    sections.push(&text[start..]);

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_division() {
        assert_eq!(classify_heading("CAPÍTULO IV"), Some(HeadingKind::Division));
        assert_eq!(classify_heading("Capitulo 2 - Métodos"), Some(HeadingKind::Division));
        assert_eq!(classify_heading("seção 3"), Some(HeadingKind::Division));
        assert_eq!(classify_heading("PARTE iii"), Some(HeadingKind::Division));
        assert_eq!(classify_heading("Parte 12ª"), None);
        assert_eq!(classify_heading("Partes 1"), None);
        assert_eq!(classify_heading("PARTE"), None);
    }

    #[test]
    fn test_classify_numbered() {
        assert_eq!(classify_heading("1. Introdução"), Some(HeadingKind::Numbered));
        assert_eq!(classify_heading("12. Ética"), Some(HeadingKind::Numbered));
        assert_eq!(classify_heading("1. introdução"), None);
        assert_eq!(classify_heading("1.5 Resultados"), None);
        assert_eq!(classify_heading(" 1. Recuado"), None);
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(HEADING_RULES[0].0, HeadingKind::Division);
        assert_eq!(HEADING_RULES[1].0, HeadingKind::Numbered);
    }

    #[test]
    fn test_split_at_headings() {
        let text = "Prefácio curto\nCAPÍTULO I\nTexto do capítulo\n1. Objetivo\nMais texto";
        assert_eq!(
            split_sections(text),
            vec![
                "Prefácio curto",
                "CAPÍTULO I\nTexto do capítulo",
                "1. Objetivo\nMais texto",
            ]
        );
    }

    #[test]
    fn test_leading_heading_opens_first_section() {
        assert_eq!(
            split_sections("PARTE II\nconteúdo"),
            vec!["PARTE II\nconteúdo"]
        );
    }

    #[test]
    fn test_no_headings() {
        assert_eq!(split_sections("apenas\ntexto"), vec!["apenas\ntexto"]);
        assert_eq!(split_sections(""), vec![""]);
    }

    #[test]
    fn test_join_reconstructs_input() {
        let inputs = [
            "a\nCAPÍTULO 1\n\n2. Dois\n",
            "\nPARTE I",
            "1. Um\n2. Dois\n3. Três",
            "sem títulos",
        ];
        for input in inputs {
            assert_eq!(split_sections(input).join("\n"), input);
        }
    }
}
