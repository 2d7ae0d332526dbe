//! The document tree snapshot

use crate::{Block, Result};
use serde::{Deserialize, Serialize};

/// An ordered sequence of block nodes captured from the editing surface
///
/// A snapshot is captured once per export call, read but never mutated by the
/// exporters, and dropped when the export finishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentTree {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl DocumentTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree from blocks
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Number of top-level blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check whether the tree has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the top-level blocks in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Encode the snapshot as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
