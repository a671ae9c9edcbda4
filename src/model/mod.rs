//! Document model types for help-text rendering.
//!
//! This module defines the tree an upstream markup parser hands to the
//! renderer. It mirrors the block/inline split of common document ASTs and
//! is serializable so the tree can cross process boundaries as JSON.

mod block;
mod document;
mod inline;
mod table;

pub use block::{Attr, Block, DefinitionItem};
pub use document::Document;
pub use inline::{Inline, QuoteKind};
pub use table::{Alignment, Table, TableCell, TableRow};
