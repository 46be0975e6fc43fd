//! Document-level types.

use super::StructuredPage;
use serde::{Deserialize, Serialize};

/// Raw text of a single page, as produced by a reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Raw page content
    pub text: String,
}

impl PageText {
    /// Create a new page.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Document metadata emitted as leading corpus variables.
///
/// Holds at most one value per known key. Empty values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title
    #[serde(default)]
    pub title: Option<String>,

    /// Document author
    #[serde(default)]
    pub author: Option<String>,

    /// Document subject
    #[serde(default)]
    pub subject: Option<String>,
}

impl DocumentMetadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Populated entries in fixed key order (title, author, subject).
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", self.title.as_deref()),
            ("author", self.author.as_deref()),
            ("subject", self.subject.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.trim().is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
    }

    /// Check whether no key carries a value.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// A document as delivered by a reader: metadata plus raw pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Base name of the source (used to derive segment identifiers)
    pub name: String,

    /// Document metadata
    pub metadata: DocumentMetadata,

    /// Raw pages in reading order
    pub pages: Vec<PageText>,
}

impl SourceDocument {
    /// Create a document from raw page strings, numbering pages from 1.
    pub fn from_pages<I, S>(name: impl Into<String>, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageText::new(i as u32 + 1, text))
            .collect();
        Self {
            name: name.into(),
            metadata: DocumentMetadata::default(),
            pages,
        }
    }

    /// Replace the metadata.
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A document after header removal and page classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredDocument {
    /// Document name used as the segment identifier prefix
    pub name: String,

    /// Document metadata
    pub metadata: DocumentMetadata,

    /// Classified pages
    pub pages: Vec<StructuredPage>,
}

impl StructuredDocument {
    /// Create an empty structured document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: DocumentMetadata::default(),
            pages: Vec::new(),
        }
    }

    /// Add a page.
    pub fn add_page(&mut self, page: StructuredPage) {
        self.pages.push(page);
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_entries_skip_empty() {
        let metadata = DocumentMetadata::new()
            .with_title("Relatório Anual")
            .with_subject("  ");

        let entries = metadata.entries();
        assert_eq!(entries, vec![("title", "Relatório Anual")]);
        assert!(!metadata.is_empty());
    }

    #[test]
    fn test_metadata_entries_order() {
        let metadata = DocumentMetadata::new()
            .with_subject("Saúde")
            .with_author("Maria")
            .with_title("Estudo");

        let keys: Vec<_> = metadata.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "author", "subject"]);
    }

    #[test]
    fn test_source_document_numbering() {
        let doc = SourceDocument::from_pages("relatorio", ["um", "dois", "três"]);
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.pages[0].number, 1);
        assert_eq!(doc.pages[2].number, 3);
        assert_eq!(doc.pages[2].text, "três");
    }
}
