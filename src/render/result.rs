//! Corpus rendering result with statistics.

use crate::model::{CorpusSegment, DocumentMetadata, SegmentKind};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including the corpus text and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusResult {
    /// Rendered corpus text
    pub content: String,

    /// Document metadata (copied from the source document)
    pub metadata: DocumentMetadata,

    /// Segment statistics
    pub stats: CorpusStats,
}

impl CorpusResult {
    /// Create a new corpus result.
    pub fn new(content: String, metadata: DocumentMetadata, stats: CorpusStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected over corpus segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Number of metadata variables
    pub metadata_count: u32,

    /// Number of page markers
    pub page_count: u32,

    /// Number of title segments
    pub title_count: u32,

    /// Number of paragraph section segments
    pub section_count: u32,

    /// Number of table placeholders
    pub table_count: u32,

    /// Number of figure placeholders
    pub figure_count: u32,

    /// Word count over segment bodies (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count over segment bodies (excluding whitespace)
    pub char_count: u32,
}

impl CorpusStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics over a list of segments.
    pub fn from_segments(segments: &[CorpusSegment]) -> Self {
        let mut stats = Self::new();
        for segment in segments {
            stats.record(segment);
        }
        stats
    }

    /// Count one segment.
    pub fn record(&mut self, segment: &CorpusSegment) {
        match segment.kind {
            SegmentKind::Metadata => self.metadata_count += 1,
            SegmentKind::Page => self.page_count += 1,
            SegmentKind::Title => self.title_count += 1,
            SegmentKind::Paragraph => self.section_count += 1,
            SegmentKind::Table => self.table_count += 1,
            SegmentKind::Figure => self.figure_count += 1,
        }
        if let Some(ref body) = segment.body {
            self.count_text(body);
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of segments, tag-only ones included.
    pub fn segment_count(&self) -> u32 {
        self.metadata_count
            + self.page_count
            + self.title_count
            + self.section_count
            + self.table_count
            + self.figure_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &CorpusStats) {
        self.metadata_count += other.metadata_count;
        self.page_count += other.page_count;
        self.title_count += other.title_count;
        self.section_count += other.section_count;
        self.table_count += other.table_count;
        self.figure_count += other.figure_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
