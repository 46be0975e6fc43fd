//! Page classification into titles and paragraphs.

use super::header::strip_running_header;
use crate::model::{SourceDocument, StructuredDocument, StructuredPage};

/// Maximum number of words in a title line.
pub const MAX_TITLE_WORDS: usize = 5;

/// Classify a page's lines into titles and its blocks into paragraphs.
///
/// A title is a trimmed line of one to [`MAX_TITLE_WORDS`] words written
/// entirely in upper case. Paragraphs are the trimmed, non-empty blocks
/// separated by a blank line. A title line also stays part of its
/// paragraph. Table and figure flags are left unset.
pub fn structure_page(number: u32, text: &str) -> StructuredPage {
    let titles = text
        .split('\n')
        .map(str::trim)
        .filter(|line| is_title(line))
        .collect::<Vec<_>>();

    let paragraphs = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>();

    StructuredPage::new(number, text)
        .with_titles(titles)
        .with_paragraphs(paragraphs)
}

/// Remove running headers and classify every page of `source`.
pub fn structure_document(source: &SourceDocument) -> StructuredDocument {
    let texts: Vec<&str> = source.pages.iter().map(|p| p.text.as_str()).collect();
    let cleaned = strip_running_header(&texts);

    let mut doc = StructuredDocument::new(source.name.clone());
    doc.metadata = source.metadata.clone();
    for (page, text) in source.pages.iter().zip(&cleaned) {
        doc.add_page(structure_page(page.number, text));
    }

    log::debug!(
        "Structured '{}': {} pages, {} titles, {} paragraphs",
        doc.name,
        doc.page_count(),
        doc.pages.iter().map(|p| p.titles.len()).sum::<usize>(),
        doc.pages.iter().map(|p| p.paragraphs.len()).sum::<usize>()
    );

    doc
}

fn is_title(line: &str) -> bool {
    let words = line.split_whitespace().count();
    (1..=MAX_TITLE_WORDS).contains(&words) && is_all_upper(line)
}

/// True when the text has at least one cased character and no lower-case one.
fn is_all_upper(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
