//! Rendering of documents to vim-help text.
//!
//! The pipeline runs leaves first: [`balance`] breaks paragraph text into
//! lines, [`Doc`] composes laid-out fragments, [`InlineRenderer`] and
//! [`BlockRenderer`] map document nodes to fragments, and [`columns`]
//! places definition lists side by side.

pub mod balance;
mod block;
pub mod columns;
mod context;
mod doc;
mod inline;
mod options;
pub mod patterns;
mod result;
mod table;

pub use balance::{balance, tokenize, BalanceOptions};
pub use block::{to_vimdoc, to_vimdoc_with_stats, BlockRenderer, DefinitionPlan, VIMDOC_FORMAT};
pub use columns::{merge, merge_text};
pub use context::{ContextScope, RenderContext};
pub use doc::{Doc, Line, LineKind, Separator};
pub use inline::{InlineRenderer, NoteExpander};
pub use options::{RenderOptions, DEFAULT_HELP_URL_PREFIX, DEFAULT_MAX_WIDTH};
pub use result::{RenderResult, RenderStats};
pub use table::format_table;
