//! Block-level document nodes
//!
//! The block union is a closed enum: exporters dispatch exhaustively, so a
//! new node kind is a compile-time decision rather than a silent no-op.

use crate::{Image, TextRun};
use serde::{Deserialize, Serialize};

/// A block-level node in the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    BulletList(List),
    OrderedList(List),
    Table(Table),
    Image(Image),
}

/// A heading with a level in `[1, 6]`
///
/// Levels outside the range can appear in snapshots from a misbehaving
/// surface; exporters clamp rather than reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    /// Inline content; the surface normally produces a single run
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            runs: vec![TextRun::new(text)],
        }
    }

    /// Text of the first inline child, empty if there is none
    pub fn first_text(&self) -> &str {
        self.runs.first().map(|r| r.text.as_str()).unwrap_or("")
    }
}

/// A paragraph of inline runs; an empty run list is a blank line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single unformatted run
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::new(text)],
        }
    }

    /// Create a paragraph from runs
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// A bullet or ordered list: a sequence of items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self { items }
    }
}

/// A list item: an ordered sequence of paragraphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl ListItem {
    /// Create an item holding a single text paragraph
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::from_text(text)],
        }
    }

    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }
}

/// A table: rows of cells, each cell holding block content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_first_text() {
        let heading = Heading::new(2, "Title");
        assert_eq!(heading.first_text(), "Title");

        let empty = Heading {
            level: 1,
            runs: Vec::new(),
        };
        assert_eq!(empty.first_text(), "");
    }

    #[test]
    fn test_block_serde_tagged() {
        let block = Block::Paragraph(Paragraph::from_text("hi"));
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains(r#""type":"paragraph""#));

        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_list_item_shape() {
        let item = ListItem::from_text("A");
        assert_eq!(item.paragraphs.len(), 1);
        assert_eq!(item.paragraphs[0].runs[0].text, "A");
    }

    #[test]
    fn test_table_holds_block_content() {
        let table = Table {
            rows: vec![TableRow {
                cells: vec![
                    TableCell {
                        blocks: vec![Block::Paragraph(Paragraph::from_text("cell"))],
                    },
                    TableCell::default(),
                ],
            }],
        };

        let json = serde_json::to_string(&Block::Table(table.clone())).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Block::Table(table));
    }
}
