//! Text run node - a contiguous span of text with a consistent mark set

use crate::{Mark, MarkSet};
use serde::{Deserialize, Serialize};

/// A text run - the inline leaf of the document tree
///
/// The text payload is immutable once captured in a snapshot. Marks are a set
/// (no duplicates, order irrelevant); the optional font family comes from the
/// editing surface's text-style attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content of this run
    pub text: String,
    /// Marks applied to this run
    #[serde(default)]
    pub marks: MarkSet,
    /// Font family override, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextRun {
    /// Create a new unformatted run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: MarkSet::new(),
            font_family: None,
        }
    }

    /// Create a run with the given marks
    pub fn with_marks(text: impl Into<String>, marks: impl IntoIterator<Item = Mark>) -> Self {
        Self {
            text: text.into(),
            marks: marks.into_iter().collect(),
            font_family: None,
        }
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Check if this run has no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the text in UTF-8 bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }
}
