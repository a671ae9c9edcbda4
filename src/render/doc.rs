//! Immutable layout values.
//!
//! A [`Doc`] describes laid-out text lazily: combinators build a tree of
//! shared nodes and nothing is computed until [`Doc::render`] walks it.
//! Docs never wrap text themselves; paragraph text arrives already broken
//! into lines by the balancer, and literal regions are passed through.
//!
//! Literal regions use the help-file convention: an opener (`>` or `>lang`)
//! at the end of a line, indented content, and a closer (`<`) in column 0.

use std::sync::Arc;

/// Role of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Ordinary text; trailing whitespace is trimmed on output
    Text,
    /// Literal content reproduced byte for byte
    Literal,
    /// A bare literal-region opener that may join the preceding line
    Opener,
    /// A text line ending with a literal-region opener
    Opening,
    /// A literal-region closer, kept clear of indentation margins
    Closer,
}

impl LineKind {
    /// Whether a line of this kind starts a literal region.
    pub fn opens_literal(self) -> bool {
        matches!(self, LineKind::Opener | LineKind::Opening)
    }
}

/// A single rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line content without newline
    pub text: String,
    /// Line role
    pub kind: LineKind,
}

impl Line {
    /// Create a line of the given kind.
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Create an ordinary text line.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Text)
    }

    /// Display width in columns.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// How the parts of a [`Doc::join`] are put together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Separator {
    /// Each part starts on a new line
    #[default]
    Newline,
    /// Parts are separated by at least this many blank lines
    Blank(usize),
    /// Parts continue on the same line, joined by the given string
    Inline(String),
}

/// An immutable, cheaply cloneable layout value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc(Arc<Node>);

#[derive(Debug, PartialEq, Eq)]
enum Node {
    Empty,
    Text(String),
    Verbatim(String),
    Lines(Vec<Line>),
    Open(String),
    Close(String),
    Blank(usize),
    Rule(char),
    Join {
        parts: Vec<Doc>,
        separator: Separator,
    },
    Enclose {
        open: String,
        close: String,
        body: Doc,
    },
    Nest {
        indent: usize,
        first: Option<String>,
        body: Doc,
    },
    Prefix {
        prefix: String,
        body: Doc,
    },
    Chomp(Doc),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Chunk {
    Line(Line),
    Blank(usize),
}

impl Doc {
    fn node(node: Node) -> Self {
        Doc(Arc::new(node))
    }

    /// The empty document.
    pub fn empty() -> Self {
        Self::node(Node::Empty)
    }

    /// Literal text; embedded newlines start new lines.
    pub fn text(text: impl Into<String>) -> Self {
        Self::node(Node::Text(text.into()))
    }

    /// Literal content reproduced exactly, including trailing whitespace.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self::node(Node::Verbatim(text.into()))
    }

    /// Already rendered lines.
    pub fn lines(lines: Vec<Line>) -> Self {
        Self::node(Node::Lines(lines))
    }

    /// A literal-region opener such as `>lua`.
    ///
    /// When it directly follows a non-blank text line of the same vertical
    /// sequence, it is appended to that line after one space.
    pub fn literal_open(marker: impl Into<String>) -> Self {
        Self::node(Node::Open(marker.into()))
    }

    /// A literal-region closer such as `<`.
    ///
    /// It stays in column 0 under [`Doc::nest`] and [`Doc::hang`], but takes
    /// the prefix of [`Doc::prefixed`] like every other line.
    pub fn literal_close(marker: impl Into<String>) -> Self {
        Self::node(Node::Close(marker.into()))
    }

    /// Request at least `n` blank lines here.
    ///
    /// Adjacent requests collapse to the largest one; requests at the very
    /// start or end of the output are dropped.
    pub fn blank_lines(n: usize) -> Self {
        Self::node(Node::Blank(n))
    }

    /// A bare line break: one empty line that is not a blank-line request.
    pub fn line_break() -> Self {
        Self::lines(vec![Line::text("")])
    }

    /// A horizontal rule filling the available width.
    pub fn rule(ch: char) -> Self {
        Self::node(Node::Rule(ch))
    }

    /// Stack parts vertically.
    pub fn vcat(parts: impl IntoIterator<Item = Doc>) -> Self {
        Self::join(parts, Separator::Newline)
    }

    /// Concatenate parts on the same line.
    pub fn hcat(parts: impl IntoIterator<Item = Doc>) -> Self {
        Self::join(parts, Separator::Inline(String::new()))
    }

    /// Concatenate parts with a separator. Empty parts get no separator.
    pub fn join(parts: impl IntoIterator<Item = Doc>, separator: Separator) -> Self {
        let parts: Vec<Doc> = parts.into_iter().filter(|p| !p.is_empty()).collect();
        if parts.is_empty() {
            return Self::empty();
        }
        Self::node(Node::Join { parts, separator })
    }

    /// Wrap in delimiters: `open` before the first line, `close` after the last.
    pub fn enclose(&self, open: impl Into<String>, close: impl Into<String>) -> Self {
        Self::node(Node::Enclose {
            open: open.into(),
            close: close.into(),
            body: self.clone(),
        })
    }

    /// Indent every line by `indent` columns.
    pub fn nest(&self, indent: usize) -> Self {
        Self::node(Node::Nest {
            indent,
            first: None,
            body: self.clone(),
        })
    }

    /// Indent every line by `indent` columns, except the first line which
    /// starts with `first` instead of the margin.
    pub fn hang(&self, indent: usize, first: impl Into<String>) -> Self {
        Self::node(Node::Nest {
            indent,
            first: Some(first.into()),
            body: self.clone(),
        })
    }

    /// Prepend `prefix` to every line, the first one included.
    pub fn prefixed(&self, prefix: impl Into<String>) -> Self {
        Self::node(Node::Prefix {
            prefix: prefix.into(),
            body: self.clone(),
        })
    }

    /// Drop trailing blank-line requests.
    pub fn chomp(&self) -> Self {
        Self::node(Node::Chomp(self.clone()))
    }

    /// Whether this is the empty document.
    pub fn is_empty(&self) -> bool {
        matches!(*self.0, Node::Empty)
    }

    /// Render to a string at the given width.
    ///
    /// Non-empty output ends with a newline.
    pub fn render(&self, width: usize) -> String {
        let lines = self.render_lines(width);
        if lines.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        for line in &lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }

    /// Render to structured lines at the given width.
    ///
    /// Blank-line requests become empty text lines; text lines are
    /// right-trimmed while literal lines are kept as they are.
    pub fn render_lines(&self, width: usize) -> Vec<Line> {
        let mut chunks = Vec::new();
        self.layout(width, &mut chunks);
        trim_blanks(&mut chunks);

        let mut lines = Vec::new();
        for chunk in chunks {
            match chunk {
                Chunk::Blank(n) => {
                    lines.extend(std::iter::repeat_with(|| Line::text("")).take(n));
                }
                Chunk::Line(mut line) => {
                    if line.kind != LineKind::Literal {
                        let trimmed = line.text.trim_end().len();
                        line.text.truncate(trimmed);
                    }
                    lines.push(line);
                }
            }
        }
        lines
    }

    /// Render as running text: lines joined by newlines, no trailing newline.
    ///
    /// Rules have no width here and come out empty.
    pub fn flatten(&self) -> String {
        self.render_lines(0)
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn layout(&self, width: usize, out: &mut Vec<Chunk>) {
        match &*self.0 {
            Node::Empty => {}
            Node::Text(text) => {
                if text.is_empty() {
                    return;
                }
                for line in text.split('\n') {
                    out.push(Chunk::Line(Line::text(line)));
                }
            }
            Node::Verbatim(text) => {
                if text.is_empty() {
                    return;
                }
                let body = text.strip_suffix('\n').unwrap_or(text);
                for line in body.split('\n') {
                    out.push(Chunk::Line(Line::new(line, LineKind::Literal)));
                }
            }
            Node::Lines(lines) => {
                out.extend(lines.iter().cloned().map(Chunk::Line));
            }
            Node::Open(marker) => {
                append(out, vec![Chunk::Line(Line::new(marker.as_str(), LineKind::Opener))]);
            }
            Node::Close(marker) => {
                out.push(Chunk::Line(Line::new(marker.as_str(), LineKind::Closer)));
            }
            Node::Blank(n) => push_blank(out, *n),
            Node::Rule(ch) => {
                let rule: String = std::iter::repeat(*ch).take(width).collect();
                out.push(Chunk::Line(Line::text(rule)));
            }
            Node::Join { parts, separator } => {
                for (i, part) in parts.iter().enumerate() {
                    let mut chunks = Vec::new();
                    part.layout(width, &mut chunks);
                    if i == 0 {
                        append(out, chunks);
                        continue;
                    }
                    match separator {
                        Separator::Newline => append(out, chunks),
                        Separator::Blank(n) => {
                            push_blank(out, *n);
                            append(out, chunks);
                        }
                        Separator::Inline(glue) => join_inline(out, chunks, glue),
                    }
                }
            }
            Node::Enclose { open, close, body } => {
                let mut chunks = Vec::new();
                body.layout(width, &mut chunks);
                let first = chunks.iter().position(|c| matches!(c, Chunk::Line(_)));
                let last = chunks.iter().rposition(|c| matches!(c, Chunk::Line(_)));
                if let (Some(first), Some(last)) = (first, last) {
                    if let Chunk::Line(line) = &mut chunks[first] {
                        line.text.insert_str(0, open);
                    }
                    if let Chunk::Line(line) = &mut chunks[last] {
                        line.text.push_str(close);
                    }
                }
                append(out, chunks);
            }
            Node::Nest {
                indent,
                first,
                body,
            } => {
                let mut chunks = Vec::new();
                body.layout(width.saturating_sub(*indent), &mut chunks);
                let margin = " ".repeat(*indent);
                let mut first = first.clone();
                for chunk in &mut chunks {
                    let Chunk::Line(line) = chunk else { continue };
                    if line.kind == LineKind::Closer {
                        continue;
                    }
                    let lead = first.take().unwrap_or_else(|| margin.clone());
                    apply_margin(line, &lead);
                }
                append(out, chunks);
            }
            Node::Prefix { prefix, body } => {
                let mut chunks = Vec::new();
                body.layout(width.saturating_sub(prefix.chars().count()), &mut chunks);
                trim_blanks(&mut chunks);
                let bare = prefix.trim_end();
                let mut lines = Vec::with_capacity(chunks.len());
                for chunk in chunks {
                    match chunk {
                        Chunk::Blank(n) => {
                            let blank = || Chunk::Line(Line::text(bare));
                            lines.extend(std::iter::repeat_with(blank).take(n));
                        }
                        Chunk::Line(mut line) => {
                            apply_margin(&mut line, prefix);
                            lines.push(Chunk::Line(line));
                        }
                    }
                }
                append(out, lines);
            }
            Node::Chomp(body) => {
                let mut chunks = Vec::new();
                body.layout(width, &mut chunks);
                while matches!(chunks.last(), Some(Chunk::Blank(_))) {
                    chunks.pop();
                }
                append(out, chunks);
            }
        }
    }
}

impl Default for Doc {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Doc {
    fn from(text: &str) -> Self {
        Doc::text(text)
    }
}

impl From<String> for Doc {
    fn from(text: String) -> Self {
        Doc::text(text)
    }
}

/// Put `lead` in front of a line; empty lines only get the trimmed lead.
/// A bare opener that received a margin can no longer join another line.
fn apply_margin(line: &mut Line, lead: &str) {
    if line.text.is_empty() {
        line.text = lead.trim_end().to_string();
    } else {
        line.text.insert_str(0, lead);
    }
    if line.kind == LineKind::Opener {
        line.kind = LineKind::Opening;
    }
}

fn push_blank(out: &mut Vec<Chunk>, n: usize) {
    if n == 0 {
        return;
    }
    match out.last_mut() {
        Some(Chunk::Blank(existing)) => *existing = (*existing).max(n),
        _ => out.push(Chunk::Blank(n)),
    }
}

/// Append vertically, joining a leading bare opener onto the previous text line.
fn append(out: &mut Vec<Chunk>, chunks: Vec<Chunk>) {
    let mut chunks = chunks.into_iter().peekable();
    let joinable = match (chunks.peek(), out.last()) {
        (Some(Chunk::Line(next)), Some(Chunk::Line(prev))) => {
            next.kind == LineKind::Opener
                && prev.kind == LineKind::Text
                && !prev.text.trim().is_empty()
        }
        _ => false,
    };
    if joinable {
        if let (Some(Chunk::Line(opener)), Some(Chunk::Line(prev))) =
            (chunks.next(), out.last_mut())
        {
            prev.text.push(' ');
            prev.text.push_str(&opener.text);
            prev.kind = LineKind::Opening;
        }
    }
    extend(out, chunks);
}

/// Append on the same line: the first line of `chunks` continues the last line of `out`.
fn join_inline(out: &mut Vec<Chunk>, chunks: Vec<Chunk>, glue: &str) {
    let mut chunks = chunks.into_iter().peekable();
    let joinable = matches!(
        (chunks.peek(), out.last()),
        (Some(Chunk::Line(_)), Some(Chunk::Line(_)))
    );
    if joinable {
        if let (Some(Chunk::Line(next)), Some(Chunk::Line(prev))) =
            (chunks.next(), out.last_mut())
        {
            prev.text.push_str(glue);
            prev.text.push_str(&next.text);
            if next.kind.opens_literal() {
                prev.kind = LineKind::Opening;
            }
        }
    }
    extend(out, chunks);
}

fn extend(out: &mut Vec<Chunk>, chunks: impl Iterator<Item = Chunk>) {
    for chunk in chunks {
        match chunk {
            Chunk::Blank(n) => push_blank(out, n),
            line => out.push(line),
        }
    }
}

fn trim_blanks(chunks: &mut Vec<Chunk>) {
    while matches!(chunks.last(), Some(Chunk::Blank(_))) {
        chunks.pop();
    }
    let leading = chunks
        .iter()
        .take_while(|c| matches!(c, Chunk::Blank(_)))
        .count();
    chunks.drain(..leading);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(lang: &str, body: &str) -> Doc {
        Doc::vcat([
            Doc::literal_open(format!(">{lang}")),
            Doc::verbatim(body).nest(4),
            Doc::literal_close("<"),
        ])
    }

    #[test]
    fn test_vcat_lines() {
        let doc = Doc::vcat([Doc::text("a"), Doc::text("b\nc")]);
        assert_eq!(doc.render(78), "a\nb\nc\n");
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(Doc::empty().render(78), "");
        assert_eq!(Doc::vcat([Doc::blank_lines(2)]).render(78), "");
    }

    #[test]
    fn test_blank_lines_collapse_to_max() {
        let doc = Doc::vcat([
            Doc::text("a"),
            Doc::blank_lines(1),
            Doc::blank_lines(2),
            Doc::blank_lines(1),
            Doc::text("b"),
        ]);
        assert_eq!(doc.render(78), "a\n\n\nb\n");
    }

    #[test]
    fn test_outer_blank_lines_dropped() {
        let doc = Doc::vcat([Doc::blank_lines(2), Doc::text("a"), Doc::blank_lines(3)]);
        assert_eq!(doc.render(78), "a\n");
    }

    #[test]
    fn test_join_with_blank_separator() {
        let doc = Doc::join(
            [Doc::text("a"), Doc::empty(), Doc::text("b")],
            Separator::Blank(1),
        );
        assert_eq!(doc.render(78), "a\n\nb\n");
    }

    #[test]
    fn test_hcat_and_enclose() {
        let doc = Doc::hcat([
            Doc::text("see "),
            Doc::text("this").enclose("_", "_"),
            Doc::text(" now"),
        ]);
        assert_eq!(doc.flatten(), "see _this_ now");
    }

    #[test]
    fn test_hcat_with_newline_text() {
        let doc = Doc::hcat([Doc::text("a"), Doc::text("\n"), Doc::text("b")]);
        assert_eq!(doc.flatten(), "a\nb");
    }

    #[test]
    fn test_nest_and_hang() {
        let body = Doc::text("one\ntwo");
        assert_eq!(body.nest(2).render(78), "  one\n  two\n");
        assert_eq!(body.hang(2, "• ").render(78), "• one\n  two\n");
        assert_eq!(body.hang(4, "10. ").render(78), "10. one\n    two\n");
    }

    #[test]
    fn test_nest_keeps_empty_lines_empty() {
        let doc = Doc::verbatim("a\n\nb").nest(4);
        assert_eq!(doc.render(78), "    a\n\n    b\n");
    }

    #[test]
    fn test_prefix_every_line() {
        let doc = Doc::vcat([
            Doc::blank_lines(1),
            Doc::text("a"),
            Doc::blank_lines(1),
            Doc::text("b"),
            Doc::blank_lines(1),
        ])
        .prefixed("  > ");
        assert_eq!(doc.render(78), "  > a\n  >\n  > b\n");
    }

    #[test]
    fn test_opener_joins_previous_line() {
        let doc = Doc::vcat([Doc::text("Example:"), code("lua", "x = 1\n\ny = 2")]);
        assert_eq!(doc.render(78), "Example: >lua\n    x = 1\n\n    y = 2\n<\n");
    }

    #[test]
    fn test_opener_after_blank_stands_alone() {
        let doc = Doc::vcat([Doc::text("Example:"), Doc::blank_lines(1), code("lua", "x = 1")]);
        assert_eq!(doc.render(78), "Example:\n\n>lua\n    x = 1\n<\n");
    }

    #[test]
    fn test_closer_ignores_margins() {
        let item = Doc::vcat([Doc::text("run:"), code("", "make")]);
        assert_eq!(item.hang(2, "• ").render(78), "• run: >\n      make\n<\n");
    }

    #[test]
    fn test_closer_takes_prefix() {
        let item = Doc::vcat([Doc::text("run:"), code("", "make")]);
        let doc = item.hang(2, "• ").prefixed("| ");
        assert_eq!(doc.render(78), "| • run: >\n|       make\n| <\n");
        let lines = doc.render_lines(78);
        assert_eq!(lines[2].kind, LineKind::Closer);
    }

    #[test]
    fn test_nested_opener_does_not_join() {
        let doc = Doc::vcat([Doc::text("a"), Doc::literal_open(">").nest(2)]);
        assert_eq!(doc.render(78), "a\n  >\n");
        let lines = doc.render_lines(78);
        assert_eq!(lines[1].kind, LineKind::Opening);
    }

    #[test]
    fn test_render_lines_kinds() {
        let doc = Doc::vcat([Doc::text("text"), code("sh", "ls  ")]);
        let lines = doc.render_lines(78);
        let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LineKind::Opening, LineKind::Literal, LineKind::Closer]
        );
        assert_eq!(lines[1].text, "    ls  ");
    }

    #[test]
    fn test_text_trimmed_literal_kept() {
        assert_eq!(Doc::text("x  ").render(78), "x\n");
        assert_eq!(Doc::verbatim("x  ").render(78), "x  \n");
    }

    #[test]
    fn test_rule_fills_available_width() {
        assert_eq!(Doc::rule('-').render(6), "------\n");
        assert_eq!(Doc::rule('-').nest(2).render(6), "  ----\n");
    }

    #[test]
    fn test_chomp() {
        let item = Doc::vcat([Doc::text("a"), Doc::blank_lines(1)]).chomp();
        let doc = Doc::vcat([item, Doc::text("b")]);
        assert_eq!(doc.render(78), "a\nb\n");
    }

    #[test]
    fn test_line_break_is_not_collapsed() {
        let doc = Doc::vcat([Doc::text("a"), Doc::line_break(), Doc::text("b")]);
        assert_eq!(doc.render(78), "a\n\nb\n");
    }

    #[test]
    fn test_render_idempotent() {
        let doc = Doc::vcat([
            Doc::text("first"),
            code("lua", "local x"),
            Doc::blank_lines(1),
            Doc::text("second").hang(2, "- "),
        ]);
        assert_eq!(doc.render(40), doc.render(40));
        assert_eq!(doc.clone().render(40), doc.render(40));
    }
}
