//! Corpus segment types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body written for pages flagged as containing a table.
pub const TABLE_PLACEHOLDER: &str = "[TABLE_PLACEHOLDER]";

/// Body written for pages flagged as containing a figure.
pub const FIGURE_PLACEHOLDER: &str = "[FIGURE_PLACEHOLDER]";

/// Kind of a corpus segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Document-level variable (title, author, subject)
    Metadata,
    /// Page marker
    Page,
    /// Title line
    Title,
    /// Paragraph section
    Paragraph,
    /// Table placeholder
    Table,
    /// Figure placeholder
    Figure,
}

impl SegmentKind {
    /// Value written after `*type=` for content segments.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Metadata => "metadata",
            SegmentKind::Page => "page",
            SegmentKind::Title => "title",
            SegmentKind::Paragraph => "paragraph",
            SegmentKind::Table => "table",
            SegmentKind::Figure => "figure",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tagged unit of an IRaMuTeQ corpus.
///
/// Rendered as a tag line `**** *<id> *<key>=<value>`. Segments carrying a
/// body add the body line and a blank line; metadata and page markers are
/// tag-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSegment {
    /// Unique identifier within the document
    pub id: String,

    /// Segment kind
    pub kind: SegmentKind,

    /// Tag variable name
    pub key: String,

    /// Tag variable value
    pub value: String,

    /// Sanitized body text
    pub body: Option<String>,
}

impl CorpusSegment {
    /// Create a metadata variable segment.
    ///
    /// The key is lower-cased and whitespace in the value becomes `_`.
    pub fn metadata(id: impl Into<String>, key: &str, value: &str) -> Self {
        let value = value
            .trim()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        Self {
            id: id.into(),
            kind: SegmentKind::Metadata,
            key: key.to_lowercase(),
            value,
            body: None,
        }
    }

    /// Create a content segment tagged `*type=<kind>`.
    pub fn content(id: impl Into<String>, kind: SegmentKind, body: Option<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            key: "type".to_string(),
            value: kind.as_str().to_string(),
            body,
        }
    }

    /// The tag line for this segment.
    pub fn tag_line(&self) -> String {
        format!("**** *{} *{}={}", self.id, self.key, self.value)
    }

    /// Append the rendered segment to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push_str(&self.tag_line());
        out.push('\n');
        if let Some(ref body) = self.body {
            out.push_str(body);
            out.push_str("\n\n");
        }
    }
}

impl fmt::Display for CorpusSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}
