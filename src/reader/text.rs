//! Plain text page source reader.

use super::DocumentReader;
use crate::error::{Error, Result};
use crate::model::SourceDocument;

/// Page separator written by `pdftotext` and similar extractors.
pub const PAGE_SEPARATOR: char = '\x0C';

/// Reader for UTF-8 text with pages separated by form feeds.
///
/// Text without form feeds is a single page. Carriage returns are dropped
/// from line endings and a trailing empty page (left by a final form feed)
/// is ignored. Plain text carries no metadata.
#[derive(Debug, Clone, Default)]
pub struct TextReader;

impl TextReader {
    /// Create a new text reader.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for TextReader {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn read_bytes(&self, name: &str, bytes: &[u8]) -> Result<SourceDocument> {
        let text = String::from_utf8(bytes.to_vec())?;
        let text = text.trim_start_matches('\u{FEFF}').replace("\r\n", "\n");

        if text.trim().is_empty() {
            return Err(Error::EmptyDocument);
        }

        let mut pages: Vec<&str> = text.split(PAGE_SEPARATOR).collect();
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }

        Ok(SourceDocument::from_pages(name, pages))
    }
}
