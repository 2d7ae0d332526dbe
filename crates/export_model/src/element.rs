//! Structured elements - the packager-ready intermediate representation

use crate::FormattedRun;
use serde::{Deserialize, Serialize};

/// Text substituted when a document produces no elements at all
///
/// Container packagers may reject an empty element sequence, so the builder
/// guarantees at least one paragraph.
pub const EMPTY_DOCUMENT_TEXT: &str = "Empty document";

/// Glyph prefixed to flattened list lines
pub const BULLET_GLYPH: &str = "\u{2022} ";

/// Heading style constants understood by the container packager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingStyle {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
}

impl HeadingStyle {
    /// Map a heading level to its style constant, clamping out-of-range
    /// levels (0, 7, ...) to level 1
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => HeadingStyle::Heading1,
            2 => HeadingStyle::Heading2,
            3 => HeadingStyle::Heading3,
            4 => HeadingStyle::Heading4,
            5 => HeadingStyle::Heading5,
            6 => HeadingStyle::Heading6,
            _ => HeadingStyle::Heading1,
        }
    }

    /// The style identifier used in the package
    pub fn style_id(&self) -> &'static str {
        match self {
            HeadingStyle::Heading1 => "Heading1",
            HeadingStyle::Heading2 => "Heading2",
            HeadingStyle::Heading3 => "Heading3",
            HeadingStyle::Heading4 => "Heading4",
            HeadingStyle::Heading5 => "Heading5",
            HeadingStyle::Heading6 => "Heading6",
        }
    }
}

/// A paragraph-shaped structured element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphElement {
    /// Styled spans in order; empty means a blank paragraph that preserves
    /// vertical spacing
    pub runs: Vec<FormattedRun>,
    /// Heading style, if this paragraph is a heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingStyle>,
}

impl ParagraphElement {
    /// A blank paragraph
    pub fn empty() -> Self {
        Self::default()
    }

    /// A plain-text paragraph with a single unformatted span
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![FormattedRun::plain(text)],
            heading: None,
        }
    }

    /// A heading paragraph
    pub fn heading(style: HeadingStyle, text: impl Into<String>) -> Self {
        Self {
            runs: vec![FormattedRun::plain(text)],
            heading: Some(style),
        }
    }

    /// A styled paragraph from resolved spans
    pub fn from_runs(runs: Vec<FormattedRun>) -> Self {
        Self {
            runs,
            heading: None,
        }
    }

    /// Concatenated text of all spans
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// One block of packager input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum StructuredElement {
    /// A paragraph, optionally styled as a heading
    Paragraph(ParagraphElement),
    /// A flattened list line, bullet glyph included
    BulletLine(String),
}

impl StructuredElement {
    /// Plain text of the element, for diagnostics and tests
    pub fn text(&self) -> String {
        match self {
            StructuredElement::Paragraph(para) => para.text(),
            StructuredElement::BulletLine(text) => text.clone(),
        }
    }
}
