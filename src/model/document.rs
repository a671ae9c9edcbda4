//! Document-level types.

use super::Block;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A normalized document tree, produced once by an upstream parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level blocks in reading order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create a document from a list of blocks.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Parse a document tree from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document tree to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Inline;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_add_block() {
        let mut doc = Document::new();
        doc.add_block(Block::para("Hello"));
        doc.add_block(Block::HorizontalRule);
        assert_eq!(doc.block_count(), 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "blocks": [
                {"t": "Heading", "c": {"level": 2, "content": [{"t": "Str", "c": "Usage"}]}},
                {"t": "Para", "c": [{"t": "Str", "c": "Hello"}, {"t": "Space"}, {"t": "Str", "c": "world"}]},
                {"t": "HorizontalRule"}
            ]
        }"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.block_count(), 3);
        assert_eq!(
            doc.blocks[1],
            Block::Paragraph(vec![
                Inline::Str("Hello".to_string()),
                Inline::Space,
                Inline::Str("world".to_string()),
            ])
        );
    }

    #[test]
    fn test_json_round_trip_keeps_tree() {
        let doc = Document::with_blocks(vec![Block::code(Some("lua"), "local x = 1")]);
        let json = doc.to_json().unwrap();
        assert_eq!(Document::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Document::from_json("{\"blocks\": 3}").is_err());
    }
}
