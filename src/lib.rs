//! # vimhelp
//!
//! Render structured documents as vim help text.
//!
//! The renderer takes a normalized document tree (headings, paragraphs,
//! lists, definition lists, code blocks, tables, quotes and inline spans)
//! and lays it out as fixed-width text in the conventions of vim help files:
//! `Title ~` headlines, `|tag|` cross-references, `>lang` / `<` literal
//! blocks and two-column definition lists.
//!
//! ## Quick Start
//!
//! ```
//! use vimhelp::{render, Block, Document, RenderOptions};
//!
//! fn main() -> vimhelp::Result<()> {
//!     let doc = Document::with_blocks(vec![
//!         Block::heading(1, "Usage"),
//!         Block::para("Call setup() once."),
//!         Block::code(Some("lua"), "require('plugin').setup()"),
//!     ]);
//!
//!     let text = render(&doc, &RenderOptions::default())?;
//!     assert_eq!(
//!         text,
//!         "Usage ~\n\nCall setup() once.\n\n>lua\n    require('plugin').setup()\n<\n"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Balanced paragraphs**: minimum-raggedness line breaking instead of greedy fill
//! - **Literal regions**: code is never wrapped, delimiters follow help-file rules
//! - **Definition lists**: terms and definitions laid out in two columns
//! - **JSON input**: the document tree deserializes from an upstream parser's output

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Attr, Block, DefinitionItem, Document, Inline, QuoteKind, Table, TableCell,
    TableRow,
};
pub use render::{BlockRenderer, Doc, RenderOptions, RenderResult, RenderStats};

/// Render a document as help text.
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] for inconsistent options and
/// [`Error::Configuration`] when a definition list does not fit the width.
pub fn render(doc: &Document, options: &RenderOptions) -> Result<String> {
    render::to_vimdoc(doc, options)
}

/// Render a document as help text and report rendering statistics.
///
/// # Example
///
/// ```
/// use vimhelp::{render_with_stats, Block, Document, RenderOptions};
///
/// let doc = Document::with_blocks(vec![Block::RawBlock {
///     format: "html".to_string(),
///     text: "<hr>".to_string(),
/// }]);
/// let result = render_with_stats(&doc, &RenderOptions::default()).unwrap();
/// assert_eq!(result.content, "");
/// assert_eq!(result.stats.dropped_nodes, 1);
/// ```
pub fn render_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    render::to_vimdoc_with_stats(doc, options)
}

/// Render a document tree given in its JSON form.
///
/// # Example
///
/// ```
/// use vimhelp::{render_json, RenderOptions};
///
/// let json = r#"{"blocks": [{"t": "Para", "c": [{"t": "Code", "c": {"text": ":h marks"}}]}]}"#;
/// assert_eq!(render_json(json, &RenderOptions::default()).unwrap(), "|marks|\n");
/// ```
pub fn render_json(json: &str, options: &RenderOptions) -> Result<String> {
    let doc = Document::from_json(json)?;
    render(&doc, options)
}
