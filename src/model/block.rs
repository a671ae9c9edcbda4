//! Block-level types.

use super::{Inline, Table};
use serde::{Deserialize, Serialize};

/// Identifier, classes and key-value attributes attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    /// Element identifier
    #[serde(default)]
    pub id: String,

    /// Class tags (the first class of a code block is its language)
    #[serde(default)]
    pub classes: Vec<String>,

    /// Key-value attributes
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

impl Attr {
    /// Create attributes carrying a single class.
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            classes: vec![class.into()],
            ..Default::default()
        }
    }

    /// Check whether a class tag is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A block-level node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Block {
    /// A heading; the level carries no structure in help output
    Heading {
        /// Heading level (1-6)
        level: u8,
        /// Heading attributes
        #[serde(default)]
        attr: Attr,
        /// Heading text
        content: Vec<Inline>,
    },

    /// A paragraph, followed by a blank line
    #[serde(rename = "Para")]
    Paragraph(Vec<Inline>),

    /// Plain text without paragraph spacing (tight list items)
    Plain(Vec<Inline>),

    /// Bulleted list; each item is a sequence of blocks
    BulletList(Vec<Vec<Block>>),

    /// Numbered list
    OrderedList {
        /// Number of the first item
        #[serde(default = "default_start")]
        start: usize,
        /// List items
        items: Vec<Vec<Block>>,
    },

    /// Term/definition pairs
    DefinitionList(Vec<DefinitionItem>),

    /// Literal code
    CodeBlock {
        /// Language hint and tags
        #[serde(default)]
        attr: Attr,
        /// Code text, rendered byte for byte
        text: String,
    },

    /// Quoted blocks
    BlockQuote(Vec<Block>),

    /// Thematic break
    HorizontalRule,

    /// Lines whose breaks are significant
    LineBlock(Vec<Vec<Inline>>),

    /// Table
    Table(Table),

    /// Generic container
    Div {
        /// Container attributes
        #[serde(default)]
        attr: Attr,
        /// Contained blocks
        blocks: Vec<Block>,
    },

    /// Figure with caption
    Figure {
        /// Figure attributes
        #[serde(default)]
        attr: Attr,
        /// Caption blocks (not rendered)
        #[serde(default)]
        caption: Vec<Block>,
        /// Figure content
        blocks: Vec<Block>,
    },

    /// Content already in some output format
    RawBlock {
        /// Target format name, e.g. "vimdoc"
        format: String,
        /// Raw content
        text: String,
    },
}

fn default_start() -> usize {
    1
}

impl Block {
    /// Create a paragraph from whitespace-separated text.
    pub fn para(text: &str) -> Self {
        Block::Paragraph(Inline::words(text))
    }

    /// Create a plain block from whitespace-separated text.
    pub fn plain(text: &str) -> Self {
        Block::Plain(Inline::words(text))
    }

    /// Create a heading from text.
    pub fn heading(level: u8, text: &str) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            attr: Attr::default(),
            content: Inline::words(text),
        }
    }

    /// Create a code block with an optional language hint.
    pub fn code(language: Option<&str>, text: impl Into<String>) -> Self {
        Block::CodeBlock {
            attr: language.map(Attr::class).unwrap_or_default(),
            text: text.into(),
        }
    }

    /// Create an ordered list numbered from 1.
    pub fn ordered(items: Vec<Vec<Block>>) -> Self {
        Block::OrderedList { start: 1, items }
    }

    /// Get a short name for the block variant (used in logs).
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::Plain(_) => "plain",
            Block::BulletList(_) => "bullet_list",
            Block::OrderedList { .. } => "ordered_list",
            Block::DefinitionList(_) => "definition_list",
            Block::CodeBlock { .. } => "code_block",
            Block::BlockQuote(_) => "block_quote",
            Block::HorizontalRule => "horizontal_rule",
            Block::LineBlock(_) => "line_block",
            Block::Table(_) => "table",
            Block::Div { .. } => "div",
            Block::Figure { .. } => "figure",
            Block::RawBlock { .. } => "raw_block",
        }
    }
}

/// A definition-list entry: one term and its definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionItem {
    /// The term being defined
    pub term: Vec<Inline>,

    /// One or more definitions, each a sequence of blocks
    pub definitions: Vec<Vec<Block>>,
}

impl DefinitionItem {
    /// Create an entry with a single definition.
    pub fn new(term: Vec<Inline>, definition: Vec<Block>) -> Self {
        Self {
            term,
            definitions: vec![definition],
        }
    }
}
