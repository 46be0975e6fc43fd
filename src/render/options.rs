//! Corpus rendering options.

use crate::normalize::SanitizeOptions;

/// Options for rendering a structured document as an IRaMuTeQ corpus.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// Keep accents in segment bodies
    pub preserve_accents: bool,

    /// Emit document metadata as leading variables
    pub include_metadata: bool,

    /// Identifier prefix for every segment (defaults to the document name)
    pub doc_name: Option<String>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            preserve_accents: false,
            include_metadata: true,
            doc_name: None,
        }
    }
}

impl CorpusOptions {
    /// Create new corpus options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or strip accents in segment bodies.
    pub fn with_preserve_accents(mut self, preserve: bool) -> Self {
        self.preserve_accents = preserve;
        self
    }

    /// Enable or disable metadata variables.
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Set the segment identifier prefix.
    pub fn with_doc_name(mut self, name: impl Into<String>) -> Self {
        self.doc_name = Some(name.into());
        self
    }

    /// Sanitizer options derived from these options.
    pub fn sanitize_options(&self) -> SanitizeOptions {
        SanitizeOptions::new().with_preserve_accents(self.preserve_accents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CorpusOptions::default();
        assert!(!options.preserve_accents);
        assert!(options.include_metadata);
        assert!(options.doc_name.is_none());
    }

    #[test]
    fn test_builder() {
        let options = CorpusOptions::new()
            .with_preserve_accents(true)
            .with_metadata(false)
            .with_doc_name("entrevista01");

        assert!(options.sanitize_options().preserve_accents);
        assert!(!options.include_metadata);
        assert_eq!(options.doc_name.as_deref(), Some("entrevista01"));
    }
}
