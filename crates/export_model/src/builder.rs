//! Structured-document builder
//!
//! Walks a document tree snapshot and emits the ordered structured-element
//! sequence the container packager consumes. The translation is deterministic
//! and order-preserving: every block maps to zero or more elements, and no
//! block ever reorders past another.

use crate::{
    resolve_run, HeadingStyle, ParagraphElement, StructuredElement, BULLET_GLYPH,
    EMPTY_DOCUMENT_TEXT,
};
use doc_model::{Block, DocumentTree, Heading, List, Paragraph};

/// Build the structured-element sequence for a document tree
///
/// Tables and images have no structured mapping yet and are skipped; both
/// list kinds are flattened to bullet lines keeping only the first run of
/// each item paragraph. If nothing maps, a single placeholder paragraph is
/// substituted so the packager always receives a non-empty sequence.
pub fn build_elements(tree: &DocumentTree) -> Vec<StructuredElement> {
    let mut elements = Vec::new();

    for block in tree.blocks() {
        match block {
            Block::Heading(heading) => elements.push(build_heading(heading)),
            Block::Paragraph(para) => elements.push(build_paragraph(para)),
            Block::BulletList(list) | Block::OrderedList(list) => {
                build_list_lines(list, &mut elements)
            }
            // No structured mapping; the raster path carries these.
            Block::Table(_) | Block::Image(_) => {}
        }
    }

    if elements.is_empty() {
        elements.push(StructuredElement::Paragraph(ParagraphElement::from_text(
            EMPTY_DOCUMENT_TEXT,
        )));
    }

    elements
}

fn build_heading(heading: &Heading) -> StructuredElement {
    let style = HeadingStyle::from_level(heading.level);
    StructuredElement::Paragraph(ParagraphElement::heading(style, heading.first_text()))
}

fn build_paragraph(para: &Paragraph) -> StructuredElement {
    if para.is_empty() {
        // Blank paragraphs keep their vertical spacing in the output.
        return StructuredElement::Paragraph(ParagraphElement::empty());
    }

    let runs = para.runs.iter().map(resolve_run).collect();
    StructuredElement::Paragraph(ParagraphElement::from_runs(runs))
}

/// Flatten a list into one bullet line per item paragraph
///
/// Only the first run of each paragraph is kept; runs beyond the first, per-run
/// styling, and item paragraphs with no runs are dropped. Ordered lists get
/// the same bullet glyph as bullet lists.
fn build_list_lines(list: &List, elements: &mut Vec<StructuredElement>) {
    for item in &list.items {
        for para in &item.paragraphs {
            if let Some(first) = para.runs.first() {
                elements.push(StructuredElement::BulletLine(format!(
                    "{}{}",
                    BULLET_GLYPH, first.text
                )));
            }
        }
    }
}
