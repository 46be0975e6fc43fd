//! IRaMuTeQ corpus formatting.
//!
//! A corpus is a sequence of segments, each introduced by a tag line
//! (`**** *<id> *<key>=<value>`). Metadata variables and page markers are
//! tag-only; titles, paragraph sections and placeholders carry a body line
//! followed by a blank line.

use crate::error::Result;
use crate::model::{
    CorpusSegment, SegmentKind, StructuredDocument, StructuredPage, FIGURE_PLACEHOLDER,
    TABLE_PLACEHOLDER,
};
use crate::normalize::Sanitizer;
use crate::structure::split_sections;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{CorpusOptions, CorpusResult, CorpusStats};

/// Convert a structured document to corpus text.
pub fn to_corpus(doc: &StructuredDocument, options: &CorpusOptions) -> String {
    CorpusFormatter::new(options.clone()).render(doc)
}

/// Convert a structured document to corpus text with statistics.
pub fn to_corpus_with_stats(doc: &StructuredDocument, options: &CorpusOptions) -> CorpusResult {
    CorpusFormatter::new(options.clone()).render_with_stats(doc)
}

/// Render segments as corpus text.
pub fn render_corpus(segments: &[CorpusSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        segment.write_to(&mut out);
    }
    out
}

/// Write segments to a corpus file, replacing any existing file.
pub fn write_corpus(segments: &[CorpusSegment], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for segment in segments {
        write!(writer, "{}", segment)?;
    }
    writer.flush()?;
    Ok(())
}

/// Corpus formatter.
#[derive(Debug, Clone, Default)]
pub struct CorpusFormatter {
    options: CorpusOptions,
    sanitizer: Sanitizer,
}

impl CorpusFormatter {
    /// Create a new corpus formatter.
    pub fn new(options: CorpusOptions) -> Self {
        let sanitizer = Sanitizer::new(options.sanitize_options());
        Self { options, sanitizer }
    }

    /// Get the options.
    pub fn options(&self) -> &CorpusOptions {
        &self.options
    }

    /// Turn a structured document into corpus segments.
    ///
    /// Metadata variables come first, then every page in order: its marker,
    /// titles, paragraph sections and placeholders. Titles and sections whose
    /// sanitized text is empty are skipped, but still count toward the
    /// indices so identifiers stay stable.
    pub fn format(&self, doc: &StructuredDocument) -> Vec<CorpusSegment> {
        let name = self.options.doc_name.as_deref().unwrap_or(&doc.name);

        let mut segments = Vec::new();
        if self.options.include_metadata {
            for (key, value) in doc.metadata.entries() {
                segments.push(CorpusSegment::metadata(name, key, value));
            }
        }

        let pages: Vec<Vec<CorpusSegment>> = doc
            .pages
            .par_iter()
            .map(|page| self.format_page(name, page))
            .collect();
        segments.extend(pages.into_iter().flatten());

        segments
    }

    /// Render a document to corpus text.
    pub fn render(&self, doc: &StructuredDocument) -> String {
        render_corpus(&self.format(doc))
    }

    /// Render a document to corpus text with statistics.
    pub fn render_with_stats(&self, doc: &StructuredDocument) -> CorpusResult {
        let segments = self.format(doc);
        let stats = CorpusStats::from_segments(&segments);
        CorpusResult::new(render_corpus(&segments), doc.metadata.clone(), stats)
    }

    fn format_page(&self, name: &str, page: &StructuredPage) -> Vec<CorpusSegment> {
        let n = page.number;
        let mut segments = vec![CorpusSegment::content(
            format!("{}_page{}", name, n),
            SegmentKind::Page,
            None,
        )];

        for (i, title) in page.titles.iter().enumerate() {
            let body = self.sanitizer.process(title);
            if !body.is_empty() {
                segments.push(CorpusSegment::content(
                    format!("{}_title{}_page{}", name, i + 1, n),
                    SegmentKind::Title,
                    Some(body),
                ));
            }
        }

        for (i, paragraph) in page.paragraphs.iter().enumerate() {
            for (j, section) in split_sections(paragraph).into_iter().enumerate() {
                let body = self.sanitizer.process(section);
                if !body.is_empty() {
                    segments.push(CorpusSegment::content(
                        format!("{}_para{}_section{}_page{}", name, i + 1, j + 1, n),
                        SegmentKind::Paragraph,
                        Some(body),
                    ));
                }
            }
        }

        if page.has_table {
            segments.push(CorpusSegment::content(
                format!("{}_table_page{}", name, n),
                SegmentKind::Table,
                Some(TABLE_PLACEHOLDER.to_string()),
            ));
        }
        if page.has_figure {
            segments.push(CorpusSegment::content(
                format!("{}_figure_page{}", name, n),
                SegmentKind::Figure,
                Some(FIGURE_PLACEHOLDER.to_string()),
            ));
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentMetadata;

    fn sample_doc() -> StructuredDocument {
        let mut doc = StructuredDocument::new("relatorio");
        doc.metadata = DocumentMetadata::new()
            .with_title("Relatório Anual")
            .with_author("Maria Silva");
        doc.add_page(
            StructuredPage::new(1, "")
                .with_titles(["INTRODUÇÃO"])
                .with_paragraphs(["Ele encontrou-se com 2 amigos."]),
        );
        doc
    }

    #[test]
    fn test_format_full_page() {
        let output = to_corpus(&sample_doc(), &CorpusOptions::default());
        assert_eq!(
            output,
            "**** *relatorio *title=Relatório_Anual\n\
             **** *relatorio *author=Maria_Silva\n\
             **** *relatorio_page1 *type=page\n\
             **** *relatorio_title1_page1 *type=title\n\
             Introducao\n\n\
             **** *relatorio_para1_section1_page1 *type=paragraph\n\
             Ele se encontrou com dois amigos.\n\n"
        );
    }

    #[test]
    fn test_metadata_can_be_disabled() {
        let options = CorpusOptions::new().with_metadata(false);
        let segments = CorpusFormatter::new(options).format(&sample_doc());
        assert_eq!(segments[0].kind, SegmentKind::Page);
    }

    #[test]
    fn test_doc_name_override() {
        let options = CorpusOptions::new().with_doc_name("entrevista");
        let segments = CorpusFormatter::new(options).format(&sample_doc());
        assert_eq!(segments[0].id, "entrevista");
        assert_eq!(segments[2].id, "entrevista_page1");
    }

    #[test]
    fn test_preserve_accents_applies_to_titles() {
        let options = CorpusOptions::new().with_preserve_accents(true);
        let segments = CorpusFormatter::new(options).format(&sample_doc());
        assert_eq!(segments[3].body.as_deref(), Some("Introdução"));
    }

    #[test]
    fn test_sections_and_skipped_indices() {
        let mut doc = StructuredDocument::new("doc");
        doc.add_page(
            StructuredPage::new(2, "")
                .with_titles(["***", "RESUMO"])
                .with_paragraphs([
                    "\"...\"",
                    "Abertura\nCAPÍTULO I\nTexto\n1. Objetivo\nFim",
                ]),
        );

        let ids: Vec<_> = CorpusFormatter::default()
            .format(&doc)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "doc_page2",
                "doc_title2_page2",
                "doc_para2_section1_page2",
                "doc_para2_section2_page2",
                "doc_para2_section3_page2",
            ]
        );
    }

    #[test]
    fn test_placeholders() {
        let mut doc = StructuredDocument::new("doc");
        doc.add_page(StructuredPage::new(1, "").with_table(true).with_figure(true));

        let output = to_corpus(&doc, &CorpusOptions::default());
        assert_eq!(
            output,
            "**** *doc_page1 *type=page\n\
             **** *doc_table_page1 *type=table\n\
             [TABLE_PLACEHOLDER]\n\n\
             **** *doc_figure_page1 *type=figure\n\
             [FIGURE_PLACEHOLDER]\n\n"
        );
    }

    #[test]
    fn test_empty_page_emits_only_marker() {
        let mut doc = StructuredDocument::new("doc");
        doc.add_page(StructuredPage::new(1, ""));

        let segments = CorpusFormatter::default().format(&doc);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Page);
        assert_eq!(segments[0].id, "doc_page1");
        assert!(segments[0].body.is_none());
    }

    #[test]
    fn test_page_order_preserved() {
        let mut doc = StructuredDocument::new("doc");
        for n in 1..=20 {
            doc.add_page(StructuredPage::new(n, "").with_paragraphs(["texto"]));
        }

        let pages: Vec<_> = CorpusFormatter::default()
            .format(&doc)
            .into_iter()
            .filter(|s| s.kind == SegmentKind::Page)
            .map(|s| s.id)
            .collect();
        let expected: Vec<_> = (1..=20).map(|n| format!("doc_page{}", n)).collect();
        assert_eq!(pages, expected);
    }

    #[test]
    fn test_render_with_stats() {
        let result = to_corpus_with_stats(&sample_doc(), &CorpusOptions::default());
        assert_eq!(result.stats.metadata_count, 2);
        assert_eq!(result.stats.page_count, 1);
        assert_eq!(result.stats.title_count, 1);
        assert_eq!(result.stats.section_count, 1);
        assert_eq!(result.stats.word_count, 7);
        assert_eq!(result.metadata.title.as_deref(), Some("Relatório Anual"));
    }

    #[test]
    fn test_write_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saida.txt");
        let segments = CorpusFormatter::default().format(&sample_doc());

        write_corpus(&segments, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_corpus(&segments));
    }
}
