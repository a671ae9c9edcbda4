//! Traversal state for block rendering.

use super::RenderOptions;
use std::ops::{Deref, DerefMut};

/// Layout state threaded through the block traversal.
///
/// Changes are made through [`RenderContext::scope`], whose guard puts the
/// previous state back when it goes out of scope, on early returns too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Columns taken by enclosing constructs
    pub indent: usize,

    /// Hard line width, indent included
    pub max_width: usize,

    /// Preferred line width, indent included
    pub soft_width: Option<usize>,

    /// Paragraphs render without their trailing blank line
    pub tight: bool,
}

impl RenderContext {
    /// Create a top-level context.
    pub fn new(max_width: usize, soft_width: Option<usize>) -> Self {
        Self {
            indent: 0,
            max_width,
            soft_width,
            tight: false,
        }
    }

    /// Create a top-level context from render options.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.max_width, options.soft_width)
    }

    /// Columns left for text at the current indent.
    pub fn available_width(&self) -> usize {
        self.max_width.saturating_sub(self.indent)
    }

    /// Open a scope; the state is restored when the guard is dropped.
    pub fn scope(&mut self) -> ContextScope<'_> {
        let saved = *self;
        ContextScope { ctx: self, saved }
    }
}

/// Guard returned by [`RenderContext::scope`].
#[derive(Debug)]
pub struct ContextScope<'a> {
    ctx: &'a mut RenderContext,
    saved: RenderContext,
}

impl ContextScope<'_> {
    /// Indent nested content by `delta` more columns.
    pub fn nested(mut self, delta: usize) -> Self {
        self.ctx.indent += delta;
        self
    }

    /// Render paragraphs without trailing blank lines.
    pub fn tight(mut self) -> Self {
        self.ctx.tight = true;
        self
    }

    /// Lay out into a fresh column `width` wide.
    pub fn column(mut self, width: usize) -> Self {
        self.ctx.indent = 0;
        self.ctx.max_width = width;
        self
    }
}

impl Deref for ContextScope<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        self.ctx
    }
}

impl DerefMut for ContextScope<'_> {
    fn deref_mut(&mut self) -> &mut RenderContext {
        self.ctx
    }
}

impl Drop for ContextScope<'_> {
    fn drop(&mut self) {
        *self.ctx = self.saved;
    }
}
