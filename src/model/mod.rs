//! Document model types for corpus preparation.
//!
//! This module defines the intermediate representation that bridges
//! source readers and corpus rendering: raw pages as they come out of a
//! reader, pages after structural classification, and the tagged segments
//! that make up an IRaMuTeQ corpus.

mod document;
mod page;
mod segment;

pub use document::{DocumentMetadata, PageText, SourceDocument, StructuredDocument};
pub use page::StructuredPage;
pub use segment::{CorpusSegment, SegmentKind, FIGURE_PLACEHOLDER, TABLE_PLACEHOLDER};
