//! Help-text rendering of block nodes.

use crate::error::{Error, Result};
use crate::model::{Alignment, Attr, Block, DefinitionItem, Document, Inline, Table, TableCell};

use super::balance::{balance, tokenize, BalanceOptions};
use super::columns;
use super::context::RenderContext;
use super::doc::{Doc, Line, Separator};
use super::inline::{InlineRenderer, NoteExpander};
use super::table::format_table;
use super::{RenderOptions, RenderResult, RenderStats};
use unicode_normalization::UnicodeNormalization;

/// Marker class of code and raw content already in help-file format.
pub const VIMDOC_FORMAT: &str = "vimdoc";

/// Convert a document to help text.
pub fn to_vimdoc(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = BlockRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to help text with statistics.
pub fn to_vimdoc_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = BlockRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Layout of a definition list, measured before any definition is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionPlan {
    /// Width of the term column (widest term)
    pub term_width: usize,

    /// Width of the definition column
    pub definition_width: usize,

    /// Rendered term text, one per list entry
    pub terms: Vec<String>,

    /// Footnote blocks raised by each term, laid out below its definitions
    pub term_notes: Vec<Doc>,
}

/// Help-text renderer.
pub struct BlockRenderer {
    options: RenderOptions,
    stats: RenderStats,
    /// Context of the text whose footnotes are being expanded
    note_context: RenderContext,
    /// Footnote blocks that cannot run inline, waiting for the end of their text
    note_blocks: Vec<Doc>,
}

impl BlockRenderer {
    /// Create a new help-text renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            note_context: RenderContext::from_options(&options),
            options,
            stats: RenderStats::new(),
            note_blocks: Vec::new(),
        }
    }

    /// Render a document to help text.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to help text with rendering statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        let content = self.render_internal(doc)?;
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        self.options.validate()?;
        let mut ctx = RenderContext::from_options(&self.options);
        self.note_context = ctx;
        let body = self.render_blocks(&mut ctx, &doc.blocks)?;
        log::debug!(
            "rendered {} blocks ({} dropped)",
            self.stats.block_count,
            self.stats.dropped_nodes
        );
        Ok(body.render(self.options.max_width))
    }

    /// Render a sequence of blocks in the given context.
    pub fn render_blocks(&mut self, ctx: &mut RenderContext, blocks: &[Block]) -> Result<Doc> {
        let mut parts = Vec::with_capacity(blocks.len());
        for block in blocks {
            parts.push(self.render_block(ctx, block)?);
        }
        Ok(Doc::vcat(parts))
    }

    /// Render a single block in the given context.
    pub fn render_block(&mut self, ctx: &mut RenderContext, block: &Block) -> Result<Doc> {
        self.stats.block_count += 1;
        match block {
            Block::Heading { content, .. } => self.render_heading(ctx, content),
            Block::Paragraph(inlines) => {
                let trailing_blank = !ctx.tight;
                self.render_paragraph(ctx, inlines, trailing_blank)
            }
            Block::Plain(inlines) => self.render_paragraph(ctx, inlines, false),
            Block::BulletList(items) => self.render_bullet_list(ctx, items),
            Block::OrderedList { start, items } => self.render_ordered_list(ctx, *start, items),
            Block::DefinitionList(items) => {
                let plan = self.plan_definitions(ctx, items)?;
                self.render_plan(ctx, &plan, items)
            }
            Block::CodeBlock { attr, text } => Ok(self.render_code_block(ctx, attr, text)),
            Block::BlockQuote(blocks) => {
                let body = {
                    let mut scope = ctx.scope().nested(4);
                    self.render_blocks(&mut scope, blocks)?
                };
                Ok(Doc::vcat([
                    Doc::blank_lines(1),
                    body.prefixed("  > "),
                    Doc::blank_lines(1),
                ]))
            }
            Block::HorizontalRule => Ok(Doc::vcat([
                Doc::blank_lines(1),
                Doc::rule('-'),
                Doc::blank_lines(1),
            ])),
            Block::LineBlock(lines) => self.render_line_block(ctx, lines),
            Block::Table(table) => self.render_table(ctx, table),
            Block::Div { .. } => Ok(Doc::line_break()),
            Block::Figure { blocks, .. } => self.render_blocks(ctx, blocks),
            Block::RawBlock { format, text } => {
                if format == VIMDOC_FORMAT {
                    Ok(Doc::vcat([Doc::verbatim(text.as_str()), Doc::blank_lines(1)]))
                } else {
                    self.stats.dropped_nodes += 1;
                    log::debug!("dropping {} in format {:?}", block.kind(), format);
                    Ok(Doc::empty())
                }
            }
        }
    }

    /// Inline text in composed (NFC) form, so columns are counted per character.
    fn inline_text(&mut self, inlines: &[Inline]) -> Result<String> {
        let prefix = self.options.help_url_prefix.clone();
        let text = InlineRenderer::new(&prefix).render_text(inlines, self)?;
        Ok(text.nfc().collect())
    }

    /// Inline text on a single line, whitespace collapsed.
    fn inline_line(&mut self, inlines: &[Inline]) -> Result<String> {
        Ok(tokenize(&self.inline_text(inlines)?).join(" "))
    }

    /// Footnote blocks collected since the last call, stacked in order.
    fn take_note_blocks(&mut self) -> Doc {
        Doc::vcat(std::mem::take(&mut self.note_blocks))
    }

    fn render_heading(&mut self, ctx: &RenderContext, content: &[Inline]) -> Result<Doc> {
        self.stats.heading_count += 1;
        self.note_context = *ctx;
        let title = self.inline_line(content)?;
        Ok(Doc::vcat([
            Doc::text(format!("{} ~", title)),
            Doc::blank_lines(1),
            self.take_note_blocks(),
            Doc::blank_lines(1),
        ]))
    }

    fn render_paragraph(
        &mut self,
        ctx: &RenderContext,
        inlines: &[Inline],
        trailing_blank: bool,
    ) -> Result<Doc> {
        self.stats.paragraph_count += 1;
        self.note_context = *ctx;
        let tokens = tokenize(&self.inline_text(inlines)?);
        let options = BalanceOptions::new()
            .with_indent(ctx.indent)
            .with_soft_max(ctx.soft_width)
            .ignoring_last();
        let lines = balance(&tokens, ctx.max_width, &options);

        for line in &lines {
            if line.chars().count() + ctx.indent > ctx.max_width {
                self.stats.overlong_lines += 1;
                log::debug!("line exceeds {} columns: {:?}", ctx.max_width, line);
            }
        }

        let body = Doc::vcat([
            Doc::lines(lines.into_iter().map(Line::text).collect()),
            self.take_note_blocks(),
        ]);
        if trailing_blank {
            Ok(Doc::vcat([body, Doc::blank_lines(1)]))
        } else {
            Ok(body)
        }
    }

    fn render_item(
        &mut self,
        ctx: &mut RenderContext,
        blocks: &[Block],
        indent: usize,
        marker: String,
    ) -> Result<Doc> {
        self.stats.list_item_count += 1;
        let body = {
            let mut scope = ctx.scope().nested(indent).tight();
            self.render_blocks(&mut scope, blocks)?
        };
        Ok(body.chomp().hang(indent, marker))
    }

    fn render_bullet_list(
        &mut self,
        ctx: &mut RenderContext,
        items: &[Vec<Block>],
    ) -> Result<Doc> {
        let marker = format!("{} ", self.options.bullet);
        let mut rendered = Vec::with_capacity(items.len());
        for item in items {
            rendered.push(self.render_item(ctx, item, 2, marker.clone())?);
        }
        Ok(Doc::vcat([Doc::vcat(rendered), Doc::blank_lines(1)]))
    }

    fn render_ordered_list(
        &mut self,
        ctx: &mut RenderContext,
        start: usize,
        items: &[Vec<Block>],
    ) -> Result<Doc> {
        let last = start + items.len().saturating_sub(1);
        let digits = last.to_string().len();
        let mut rendered = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let number = format!("{}.", start + i);
            let marker = format!("{:<width$} ", number, width = digits + 1);
            rendered.push(self.render_item(ctx, item, digits + 2, marker)?);
        }
        Ok(Doc::vcat([Doc::vcat(rendered), Doc::blank_lines(1)]))
    }

    /// Measure the terms of a definition list and size both columns.
    ///
    /// The definition column takes what is left of the available width after
    /// the widest term and the configured gap.
    pub fn plan_definitions(
        &mut self,
        ctx: &RenderContext,
        items: &[DefinitionItem],
    ) -> Result<DefinitionPlan> {
        let mut terms = Vec::with_capacity(items.len());
        let mut term_notes = Vec::with_capacity(items.len());
        self.note_context = *ctx;
        for item in items {
            terms.push(self.inline_line(&item.term)?);
            term_notes.push(self.take_note_blocks());
        }
        let term_width = terms.iter().map(|t| t.chars().count()).max().unwrap_or(0);
        let available = ctx.available_width();
        let taken = term_width + self.options.definition_gap;
        if taken >= available {
            return Err(Error::Configuration(format!(
                "definition terms take {} of {} available columns",
                taken, available
            )));
        }
        let plan = DefinitionPlan {
            term_width,
            definition_width: available - taken,
            terms,
            term_notes,
        };
        log::debug!(
            "definition list: terms {} wide, definitions {} wide",
            plan.term_width,
            plan.definition_width
        );
        Ok(plan)
    }

    /// Render a definition list according to its plan.
    pub fn render_plan(
        &mut self,
        ctx: &mut RenderContext,
        plan: &DefinitionPlan,
        items: &[DefinitionItem],
    ) -> Result<Doc> {
        let mut rows = Vec::with_capacity(items.len());
        for (i, (term, item)) in plan.terms.iter().zip(items).enumerate() {
            self.stats.definition_count += 1;
            let mut definitions = Vec::with_capacity(item.definitions.len() + 1);
            for definition in &item.definitions {
                definitions.push(self.render_definition(ctx, definition, plan.definition_width)?);
            }
            if let Some(notes) = plan.term_notes.get(i) {
                definitions.push(notes.clone());
            }
            let right = Doc::vcat(definitions).chomp().render_lines(plan.definition_width);
            let merged = columns::merge(
                &[Line::text(term.as_str())],
                &right,
                plan.term_width,
                self.options.definition_gap,
            )?;
            rows.push(Doc::lines(merged));
        }
        Ok(Doc::vcat([
            Doc::join(rows, Separator::Blank(1)),
            Doc::blank_lines(1),
        ]))
    }

    /// Paragraph text is balanced to the definition column; other blocks
    /// keep the full width.
    fn render_definition(
        &mut self,
        ctx: &mut RenderContext,
        blocks: &[Block],
        width: usize,
    ) -> Result<Doc> {
        let mut parts = Vec::with_capacity(blocks.len());
        for block in blocks {
            let mut scope = match block {
                Block::Paragraph(_) | Block::Plain(_) => ctx.scope().column(width).tight(),
                _ => ctx.scope().tight(),
            };
            parts.push(self.render_block(&mut scope, block)?);
        }
        Ok(Doc::vcat(parts))
    }

    fn render_code_block(&mut self, ctx: &RenderContext, attr: &Attr, text: &str) -> Doc {
        self.stats.code_block_count += 1;
        if attr.has_class(VIMDOC_FORMAT) {
            return Doc::vcat([Doc::verbatim(text), Doc::blank_lines(1)]);
        }
        let language = attr.classes.first().map(String::as_str).unwrap_or("");
        let code = Doc::vcat([
            Doc::literal_open(format!(">{}", language)),
            Doc::verbatim(text).nest(4),
            Doc::literal_close("<"),
        ]);
        if ctx.tight {
            code
        } else {
            Doc::vcat([code, Doc::blank_lines(1)])
        }
    }

    fn render_line_block(&mut self, ctx: &RenderContext, lines: &[Vec<Inline>]) -> Result<Doc> {
        self.note_context = *ctx;
        let mut rendered = Vec::with_capacity(lines.len());
        for line in lines {
            let text = self.inline_text(line)?;
            rendered.push(Line::text(format!("| {}", text.replace('\n', " "))));
        }
        Ok(Doc::vcat([
            Doc::blank_lines(1),
            Doc::lines(rendered),
            self.take_note_blocks(),
            Doc::blank_lines(1),
        ]))
    }

    fn render_table(&mut self, ctx: &mut RenderContext, table: &Table) -> Result<Doc> {
        if table.is_empty() {
            return Ok(Doc::empty());
        }
        self.stats.table_count += 1;

        let mut header = Vec::with_capacity(table.header().len());
        for row in table.header() {
            header.push(self.row_text(ctx, &row.cells)?);
        }
        let mut body = Vec::with_capacity(table.body().len());
        for row in table.body() {
            body.push(self.row_text(ctx, &row.cells)?);
        }

        let alignments: Vec<Alignment> =
            (0..table.column_count()).map(|col| table.alignment(col)).collect();
        let lines = format_table(&header, &body, &alignments);
        Ok(Doc::vcat([
            Doc::lines(lines.into_iter().map(Line::text).collect()),
            Doc::blank_lines(1),
        ]))
    }

    fn row_text(&mut self, ctx: &mut RenderContext, cells: &[TableCell]) -> Result<Vec<String>> {
        let mut texts = Vec::with_capacity(cells.len());
        for cell in cells {
            let doc = {
                let mut scope = ctx.scope().tight();
                self.render_blocks(&mut scope, &cell.content)?
            };
            texts.push(tokenize(&doc.flatten()).join(" "));
        }
        Ok(texts)
    }
}

/// Paragraph text of a footnote runs inline with the text around it. Other
/// blocks are laid out on their own and placed after that text, so literal
/// regions never reach the balancer.
impl NoteExpander for BlockRenderer {
    fn expand_note(&mut self, blocks: &[Block]) -> Result<Doc> {
        let mut outer = self.note_context;
        let mut text = Vec::new();
        for block in blocks {
            match block {
                Block::Paragraph(inlines) | Block::Plain(inlines) => {
                    self.stats.block_count += 1;
                    self.stats.paragraph_count += 1;
                    text.push(Doc::text(self.inline_text(inlines)?));
                }
                _ => {
                    let pending = std::mem::take(&mut self.note_blocks);
                    let doc = {
                        let mut scope = outer.scope().tight();
                        self.render_block(&mut scope, block)?
                    };
                    self.note_context = outer;
                    self.note_blocks = pending;
                    self.note_blocks.push(doc.chomp());
                }
            }
        }
        Ok(Doc::vcat(text))
    }
}
