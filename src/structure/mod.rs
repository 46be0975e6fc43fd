//! Document structure recovery.
//!
//! Turns raw page text into [`StructuredDocument`](crate::model::StructuredDocument)s:
//! running headers are removed across pages, each page is split into titles
//! and paragraphs, and paragraphs are later cut into sections at heading
//! lines by the corpus formatter.

mod classify;
mod header;
mod sections;

pub use classify::{structure_document, structure_page, MAX_TITLE_WORDS};
pub use header::{detect_running_header, strip_running_header, MIN_HEADER_PREFIX};
pub use sections::{classify_heading, split_sections, HeadingKind, HEADING_RULES};
