//! # iramuteq-prep
//!
//! Prepare extracted document text as IRaMuTeQ corpora.
//!
//! This library takes per-page text (as produced by `pdftotext` or any other
//! extractor), recovers its structure and writes a tagged corpus with
//! linguistically normalized Portuguese text, ready for lexical analysis in
//! IRaMuTeQ.
//!
//! ## Quick Start
//!
//! ```no_run
//! use iramuteq_prep::{read_file, render, structure_document};
//!
//! fn main() -> iramuteq_prep::Result<()> {
//!     // Read a page dump
//!     let source = read_file("entrevista.txt")?;
//!
//!     // Remove running headers, find titles and paragraphs
//!     let doc = structure_document(&source);
//!
//!     // Render the corpus
//!     let options = render::CorpusOptions::default();
//!     let corpus = render::to_corpus(&doc, &options);
//!     println!("{}", corpus);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Numeral expansion**: integers, decimals, percentages and currency in words
//! - **Proclisis rewrite**: `encontrou-se` → `se encontrou`, `amá-lo` → `o amar`
//! - **Structure recovery**: running headers, titles, paragraphs, sections
//! - **Sanitizing**: removes characters IRaMuTeQ treats as markup
//! - **Batch conversion**: whole folders, processed in parallel with Rayon

pub mod batch;
pub mod detect;
pub mod error;
pub mod model;
pub mod normalize;
pub mod reader;
pub mod render;
pub mod structure;

// Re-export commonly used types
pub use batch::{
    convert_file, process_file, process_folder, BatchOptions, BatchReport, DocumentOutcome,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use model::{
    CorpusSegment, DocumentMetadata, PageText, SegmentKind, SourceDocument, StructuredDocument,
    StructuredPage,
};
pub use normalize::{
    apply_sentence_case, expand_numerals, number_to_words, rewrite_enclisis, sanitize,
    SanitizeOptions, Sanitizer,
};
pub use reader::{DocumentReader, JsonReader, ReaderRegistry, TextReader};
pub use render::{render_corpus, CorpusFormatter, CorpusOptions, CorpusResult, CorpusStats};
pub use structure::{split_sections, strip_running_header, structure_document};

use std::path::Path;

/// Read a page source, choosing the reader from the file extension.
///
/// # Example
///
/// ```no_run
/// use iramuteq_prep::read_file;
///
/// let source = read_file("entrevista.txt").unwrap();
/// println!("Pages: {}", source.page_count());
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<SourceDocument> {
    ReaderRegistry::with_defaults().read(path.as_ref())
}

/// Read a page source from bytes, choosing the reader from the content.
pub fn read_bytes(name: &str, data: &[u8]) -> Result<SourceDocument> {
    ReaderRegistry::with_defaults().read_bytes(name, data)
}

/// Convert a page source to corpus text with default options.
///
/// # Example
///
/// ```no_run
/// use iramuteq_prep::to_corpus;
///
/// let corpus = to_corpus("entrevista.txt").unwrap();
/// std::fs::write("entrevista_iramuteq.txt", corpus).unwrap();
/// ```
pub fn to_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
    to_corpus_with_options(path, &CorpusOptions::default())
}

/// Convert a page source to corpus text with custom options.
///
/// # Example
///
/// ```no_run
/// use iramuteq_prep::{to_corpus_with_options, CorpusOptions};
///
/// let options = CorpusOptions::new()
///     .with_preserve_accents(true)
///     .with_doc_name("entrevista01");
/// let corpus = to_corpus_with_options("entrevista.txt", &options).unwrap();
/// ```
pub fn to_corpus_with_options<P: AsRef<Path>>(path: P, options: &CorpusOptions) -> Result<String> {
    let source = read_file(path)?;
    Ok(render::to_corpus(&structure_document(&source), options))
}

/// Builder for reading and converting page sources.
///
/// # Example
///
/// ```no_run
/// use iramuteq_prep::IramuteqPrep;
///
/// let corpus = IramuteqPrep::new()
///     .preserve_accents()
///     .without_metadata()
///     .with_doc_name("entrevista01")
///     .read("entrevista.txt")?
///     .to_corpus();
/// # Ok::<(), iramuteq_prep::Error>(())
/// ```
pub struct IramuteqPrep {
    registry: ReaderRegistry,
    options: CorpusOptions,
}

impl IramuteqPrep {
    /// Create a new builder with the default readers.
    pub fn new() -> Self {
        Self {
            registry: ReaderRegistry::with_defaults(),
            options: CorpusOptions::default(),
        }
    }

    /// Keep accents in segment bodies.
    pub fn preserve_accents(mut self) -> Self {
        self.options = self.options.with_preserve_accents(true);
        self
    }

    /// Skip metadata variables.
    pub fn without_metadata(mut self) -> Self {
        self.options = self.options.with_metadata(false);
        self
    }

    /// Set the segment identifier prefix.
    pub fn with_doc_name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.with_doc_name(name);
        self
    }

    /// Set corpus options.
    pub fn with_options(mut self, options: CorpusOptions) -> Self {
        self.options = options;
        self
    }

    /// Register an additional reader.
    pub fn with_reader(mut self, reader: std::sync::Arc<dyn DocumentReader>) -> Self {
        self.registry.register(reader);
        self
    }

    /// Read and structure a page source.
    pub fn read<P: AsRef<Path>>(self, path: P) -> Result<PreparedDocument> {
        let source = self.registry.read(path.as_ref())?;
        Ok(self.prepare(&source))
    }

    /// Read and structure a page source from bytes.
    pub fn read_bytes(self, name: &str, data: &[u8]) -> Result<PreparedDocument> {
        let source = self.registry.read_bytes(name, data)?;
        Ok(self.prepare(&source))
    }

    /// Structure an already loaded source.
    pub fn prepare(self, source: &SourceDocument) -> PreparedDocument {
        PreparedDocument {
            document: structure_document(source),
            formatter: CorpusFormatter::new(self.options),
        }
    }
}

impl Default for IramuteqPrep {
    fn default() -> Self {
        Self::new()
    }
}

/// A structured document ready to be rendered.
pub struct PreparedDocument {
    /// The structured document
    pub document: StructuredDocument,
    formatter: CorpusFormatter,
}

impl PreparedDocument {
    /// Corpus segments.
    pub fn segments(&self) -> Vec<CorpusSegment> {
        self.formatter.format(&self.document)
    }

    /// Corpus text.
    pub fn to_corpus(&self) -> String {
        self.formatter.render(&self.document)
    }

    /// Corpus text with statistics.
    pub fn to_corpus_with_stats(&self) -> CorpusResult {
        self.formatter.render_with_stats(&self.document)
    }

    /// Write the corpus to a file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<CorpusStats> {
        let segments = self.segments();
        render::write_corpus(&segments, path.as_ref())?;
        Ok(CorpusStats::from_segments(&segments))
    }

    /// Get the document.
    pub fn document(&self) -> &StructuredDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let prep = IramuteqPrep::new()
            .preserve_accents()
            .without_metadata()
            .with_doc_name("entrevista");

        assert!(prep.options.preserve_accents);
        assert!(!prep.options.include_metadata);
        assert_eq!(prep.options.doc_name.as_deref(), Some("entrevista"));
    }

    #[test]
    fn test_builder_default() {
        let prep = IramuteqPrep::default();
        assert!(!prep.options.preserve_accents);
        assert!(prep.options.include_metadata);
    }

    #[test]
    fn test_read_bytes_end_to_end() {
        let prepared = IramuteqPrep::new()
            .read_bytes("nota", "RESUMO\n\nCustou 5%.".as_bytes())
            .unwrap();

        assert_eq!(
            prepared.to_corpus(),
            "**** *nota_page1 *type=page\n\
             **** *nota_title1_page1 *type=title\n\
             Resumo\n\n\
             **** *nota_para1_section1_page1 *type=paragraph\n\
             Resumo\n\n\
             **** *nota_para2_section1_page1 *type=paragraph\n\
             Custou cinco por cento.\n\n"
        );
    }

    #[test]
    fn test_read_bytes_empty_data() {
        let result = read_bytes("vazio", b"");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_read_bytes_pdf_rejected() {
        let result = IramuteqPrep::new().read_bytes("doc", b"%PDF-1.7\n%test");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        let prepared = IramuteqPrep::new()
            .read_bytes("d", br#"{"metadata": {"title": "Um Estudo"}, "pages": ["Texto."]}"#)
            .unwrap();
        let stats = prepared.write_to(&path).unwrap();

        assert_eq!(stats.metadata_count, 1);
        assert_eq!(stats.section_count, 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("**** *d *title=Um_Estudo\n"));
    }
}
