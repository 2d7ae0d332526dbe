//! Mark-to-style resolution
//!
//! Maps a run's mark set onto the style attributes the container format
//! understands. Resolution is a pure function of its input.

use doc_model::{Mark, MarkSet, TextRun};
use serde::{Deserialize, Serialize};

/// Underline style on a run
///
/// The container format distinguishes "no underline" from "underline with the
/// default style", so presence is modeled with `Option<Underline>` rather
/// than a boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Underline {
    /// Single underline, the default style
    #[default]
    Single,
}

/// Resolved style attributes for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFormat {
    pub bold: bool,
    pub italic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,
}

impl RunFormat {
    /// Check whether no formatting is set
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && self.underline.is_none()
    }
}

/// Resolve a mark set to its style descriptor
///
/// Absent marks default to false/absent; there are no error conditions.
pub fn resolve_format(marks: &MarkSet) -> RunFormat {
    RunFormat {
        bold: marks.contains(Mark::Bold),
        italic: marks.contains(Mark::Italic),
        underline: marks.contains(Mark::Underline).then_some(Underline::Single),
    }
}

/// A text span with its resolved style, ready for packaging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedRun {
    pub text: String,
    pub format: RunFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl FormattedRun {
    /// Create an unformatted span
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RunFormat::default(),
            font_family: None,
        }
    }
}

/// Resolve a document run into a formatted span
pub fn resolve_run(run: &TextRun) -> FormattedRun {
    FormattedRun {
        text: run.text.clone(),
        format: resolve_format(&run.marks),
        font_family: run.font_family.clone(),
    }
}
