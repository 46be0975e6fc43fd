//! JSON page dump reader.

use super::DocumentReader;
use crate::error::{Error, Result};
use crate::model::{DocumentMetadata, SourceDocument};
use serde::Deserialize;

/// On-disk layout of a page dump.
///
/// ```json
/// {
///   "metadata": { "title": "Relatório", "author": "Maria", "subject": "Saúde" },
///   "pages": ["texto da página 1", "texto da página 2"]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct PageDump {
    #[serde(default)]
    metadata: DocumentMetadata,
    pages: Vec<String>,
}

/// Reader for JSON page dumps carrying metadata and per-page text.
#[derive(Debug, Clone, Default)]
pub struct JsonReader;

impl JsonReader {
    /// Create a new JSON reader.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for JsonReader {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn read_bytes(&self, name: &str, bytes: &[u8]) -> Result<SourceDocument> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let dump: PageDump = serde_json::from_slice(bytes)?;

        if dump.pages.is_empty() {
            return Err(Error::EmptyDocument);
        }

        Ok(SourceDocument::from_pages(name, dump.pages).with_metadata(dump.metadata))
    }
}
