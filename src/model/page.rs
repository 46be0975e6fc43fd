//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page after structural classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page content after running-header removal
    pub content: String,

    /// Detected title lines, in reading order
    pub titles: Vec<String>,

    /// Paragraph blocks, in reading order
    pub paragraphs: Vec<String>,

    /// Whether the page contains a table (set by an external detector)
    pub has_table: bool,

    /// Whether the page contains a figure (set by an external detector)
    pub has_figure: bool,
}

impl StructuredPage {
    /// Create an empty page with the given content.
    pub fn new(number: u32, content: impl Into<String>) -> Self {
        Self {
            number,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Set the detected titles.
    pub fn with_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Set the paragraphs.
    pub fn with_paragraphs<I, S>(mut self, paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paragraphs = paragraphs.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the page as containing a table.
    pub fn with_table(mut self, present: bool) -> Self {
        self.has_table = present;
        self
    }

    /// Mark the page as containing a figure.
    pub fn with_figure(mut self, present: bool) -> Self {
        self.has_figure = present;
        self
    }

    /// Check if the page has no titles, paragraphs, or placeholders.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.paragraphs.is_empty() && !self.has_table && !self.has_figure
    }
}
