//! Source readers providing a plugin architecture for page sources.
//!
//! Decoding a binary container such as PDF happens upstream (for example
//! with `pdftotext`). Readers turn the resulting page dumps into
//! [`SourceDocument`]s, and the registry dispatches on file extension,
//! falling back to content sniffing for unknown extensions.
//!
//! # Example
//!
//! ```no_run
//! use iramuteq_prep::reader::ReaderRegistry;
//! use std::path::Path;
//!
//! fn main() -> iramuteq_prep::Result<()> {
//!     let registry = ReaderRegistry::with_defaults();
//!     let doc = registry.read(Path::new("entrevista.txt"))?;
//!     println!("{} pages", doc.page_count());
//!     Ok(())
//! }
//! ```

mod json;
mod text;

pub use json::JsonReader;
pub use text::TextReader;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::SourceDocument;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for page source readers.
///
/// Implement this trait to add support for a new source format.
pub trait DocumentReader: Send + Sync {
    /// Get the supported file extensions for this reader.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["txt"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this reader.
    fn name(&self) -> &str;

    /// Read a source from bytes. `name` becomes the document name.
    fn read_bytes(&self, name: &str, bytes: &[u8]) -> Result<SourceDocument>;

    /// Read a file at the given path, naming the document after its stem.
    fn read(&self, path: &Path) -> Result<SourceDocument> {
        let bytes = std::fs::read(path)?;
        self.read_bytes(&source_name(path), &bytes)
    }

    /// Check if this reader supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Base name of a source path without its extension.
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Registry for source readers.
///
/// The registry maps file extensions to readers and provides convenient
/// methods for reading sources.
pub struct ReaderRegistry {
    readers: HashMap<String, Arc<dyn DocumentReader>>,
    by_name: HashMap<String, Arc<dyn DocumentReader>>,
}

impl ReaderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            readers: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the default readers (text and JSON).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(TextReader::new()));
        registry.register(Arc::new(JsonReader::new()));
        registry
    }

    /// Register a reader for all its supported extensions.
    pub fn register(&mut self, reader: Arc<dyn DocumentReader>) {
        for ext in reader.supported_extensions() {
            self.readers.insert(ext.to_lowercase(), reader.clone());
        }
        self.by_name.insert(reader.name().to_lowercase(), reader);
    }

    /// Get a reader by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentReader>> {
        self.readers.get(&ext.to_lowercase()).cloned()
    }

    /// Get a reader by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentReader>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.readers.contains_key(&ext.to_lowercase())
    }

    /// Check if a path has a supported extension.
    pub fn supports_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.supports(ext))
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.readers.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Read a file using the reader registered for its extension.
    ///
    /// Files with a missing or unregistered extension are sniffed.
    pub fn read(&self, path: &Path) -> Result<SourceDocument> {
        let by_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.get_by_extension(ext));

        let reader = match by_ext {
            Some(reader) => reader,
            None => {
                let format = detect_format_from_path(path)?;
                self.reader_for(format.extension())?
            }
        };

        log::debug!("Reading {} with {} reader", path.display(), reader.name());
        reader.read(path)
    }

    /// Read bytes, picking the reader from their content.
    pub fn read_bytes(&self, name: &str, bytes: &[u8]) -> Result<SourceDocument> {
        let format = detect_format_from_bytes(bytes)?;
        self.reader_for(format.extension())?.read_bytes(name, bytes)
    }

    fn reader_for(&self, ext: &str) -> Result<Arc<dyn DocumentReader>> {
        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
