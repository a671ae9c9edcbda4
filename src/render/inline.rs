//! Inline node rendering.

use super::doc::Doc;
use super::patterns::{fragment_tag, help_topic, is_option_name, looks_like_url, paren_url};
use crate::error::Result;
use crate::model::{Block, Inline, QuoteKind};

/// Expands footnote content in place.
///
/// Implemented by the block renderer, which knows how to lay out blocks.
pub trait NoteExpander {
    /// Render the blocks of a footnote without blank-line separation.
    fn expand_note(&mut self, blocks: &[Block]) -> Result<Doc>;
}

/// Renders inline nodes to running text.
#[derive(Debug, Clone, Copy)]
pub struct InlineRenderer<'a> {
    help_url_prefix: &'a str,
}

impl<'a> InlineRenderer<'a> {
    /// Create a renderer; links under `help_url_prefix` become `|tags|`.
    pub fn new(help_url_prefix: &'a str) -> Self {
        Self { help_url_prefix }
    }

    /// Render a run of inlines as one document fragment.
    pub fn render(&self, inlines: &[Inline], notes: &mut dyn NoteExpander) -> Result<Doc> {
        let mut parts = Vec::with_capacity(inlines.len());
        for inline in inlines {
            parts.push(self.render_inline(inline, notes)?);
        }
        Ok(Doc::hcat(parts))
    }

    /// Render a run of inlines to a string.
    pub fn render_text(&self, inlines: &[Inline], notes: &mut dyn NoteExpander) -> Result<String> {
        Ok(self.render(inlines, notes)?.flatten())
    }

    fn render_inline(&self, inline: &Inline, notes: &mut dyn NoteExpander) -> Result<Doc> {
        let doc = match inline {
            Inline::Str(text) => match paren_url(text) {
                Some(url) => Doc::text(format!("<{}>", url)),
                None => Doc::text(text.as_str()),
            },
            Inline::Space => Doc::text(" "),
            Inline::SoftBreak | Inline::LineBreak => Doc::text("\n"),
            Inline::Emph(content) => self.render(content, notes)?.enclose("_", "_"),
            Inline::Strong(content) => {
                let inner = self.render(content, notes)?;
                if inner.flatten().contains(char::is_whitespace) {
                    inner.enclose("__", "__")
                } else {
                    inner.enclose("{", "}")
                }
            }
            Inline::Strikeout(content) => self.render(content, notes)?.enclose("~", "~"),
            Inline::Subscript(content)
            | Inline::Superscript(content)
            | Inline::SmallCaps(content)
            | Inline::Cite(content)
            | Inline::Span { content, .. } => self.render(content, notes)?,
            Inline::Quoted { kind, content } => {
                let quote = match kind {
                    QuoteKind::DoubleQuote => "\"",
                    QuoteKind::SingleQuote => "'",
                };
                self.render(content, notes)?.enclose(quote, quote)
            }
            Inline::Code { text, .. } => Doc::text(code_span(text)),
            Inline::Math { text } => Doc::text(format!("`{}`", text)),
            Inline::Link { content, target } => self.render_link(content, target, notes)?,
            Inline::Note(blocks) => notes.expand_note(blocks)?,
            Inline::Image { .. } | Inline::RawInline { .. } => {
                log::debug!("dropping inline {}", inline_kind(inline));
                Doc::empty()
            }
        };
        Ok(doc)
    }

    fn render_link(
        &self,
        content: &[Inline],
        target: &str,
        notes: &mut dyn NoteExpander,
    ) -> Result<Doc> {
        let text = self.render(content, notes)?;

        if !self.help_url_prefix.is_empty() && target.starts_with(self.help_url_prefix) {
            return Ok(text.enclose("|", "|"));
        }
        if let Some(tag) = fragment_tag(target) {
            let tag = Doc::text(format!("|{}|", tag));
            if text.is_empty() {
                return Ok(tag);
            }
            return Ok(Doc::hcat([text, Doc::text(" "), tag]));
        }
        if looks_like_url(&text.flatten()) {
            return Ok(text.enclose("<", ">"));
        }
        let target = Doc::text(format!("<{}>", target));
        if text.is_empty() {
            return Ok(target);
        }
        Ok(Doc::hcat([text, Doc::text(" "), target]))
    }
}

/// Text of an inline code span: help lookups become tags, option names stay
/// quoted, anything else is put in backticks.
fn code_span(text: &str) -> String {
    if let Some(topic) = help_topic(text) {
        format!("|{}|", topic)
    } else if is_option_name(text) {
        text.to_string()
    } else {
        format!("`{}`", text)
    }
}

fn inline_kind(inline: &Inline) -> &'static str {
    match inline {
        Inline::Image { .. } => "image",
        Inline::RawInline { .. } => "raw_inline",
        _ => "inline",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attr;

    /// Expands notes as their plain words.
    struct Words;

    impl NoteExpander for Words {
        fn expand_note(&mut self, blocks: &[Block]) -> Result<Doc> {
            let words: Vec<String> = blocks
                .iter()
                .filter_map(|b| match b {
                    Block::Plain(inlines) | Block::Paragraph(inlines) => Some(inlines),
                    _ => None,
                })
                .flatten()
                .filter_map(|i| match i {
                    Inline::Str(s) => Some(s.clone()),
                    _ => None,
                })
                .collect();
            Ok(Doc::text(words.join(" ")))
        }
    }

    fn text(inlines: &[Inline]) -> String {
        InlineRenderer::new("https://neovim.io/doc/user/")
            .render_text(inlines, &mut Words)
            .unwrap()
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(text(&Inline::words("some  plain\ntext")), "some plain\ntext");
    }

    #[test]
    fn test_paren_url_becomes_autolink() {
        let inlines = Inline::words("see (https://neovim.io) now");
        assert_eq!(text(&inlines), "see <https://neovim.io> now");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(text(&[Inline::Emph(Inline::words("Foobar"))]), "_Foobar_");
        assert_eq!(text(&[Inline::Strikeout(Inline::words("old"))]), "~old~");
    }

    #[test]
    fn test_strong_depends_on_whitespace() {
        assert_eq!(text(&[Inline::Strong(Inline::words("Foobar"))]), "{Foobar}");
        assert_eq!(text(&[Inline::Strong(Inline::words("two words"))]), "__two words__");
    }

    #[test]
    fn test_code_spans() {
        assert_eq!(text(&[Inline::code(":h foobar")]), "|foobar|");
        assert_eq!(text(&[Inline::code(":help marks")]), "|marks|");
        assert_eq!(text(&[Inline::code("'foobar'")]), "'foobar'");
        assert_eq!(text(&[Inline::code("vim.api")]), "`vim.api`");
    }

    #[test]
    fn test_link_to_help_site() {
        let link = Inline::link("lua-guide", "https://neovim.io/doc/user/lua-guide.html");
        assert_eq!(text(&[link]), "|lua-guide|");
    }

    #[test]
    fn test_link_to_fragment() {
        let link = Inline::link("some description", "#link-target");
        assert_eq!(text(&[link]), "some description |link-target|");

        let link = Inline::link("see", "#Target Name");
        assert_eq!(text(&[link]), "see |target-name|");
    }

    #[test]
    fn test_link_with_url_text() {
        let link = Inline::link("https://github.com", "https://github.com");
        assert_eq!(text(&[link]), "<https://github.com>");
    }

    #[test]
    fn test_link_with_external_target() {
        let link = Inline::link("the repo", "https://github.com/x/y");
        assert_eq!(text(&[link]), "the repo <https://github.com/x/y>");
    }

    #[test]
    fn test_custom_help_prefix() {
        let link = Inline::link("usr_01", "https://vimhelp.org/usr_01.txt.html");
        let out = InlineRenderer::new("https://vimhelp.org/")
            .render_text(&[link], &mut Words)
            .unwrap();
        assert_eq!(out, "|usr_01|");
    }

    #[test]
    fn test_quoted() {
        let quoted = Inline::Quoted {
            kind: QuoteKind::DoubleQuote,
            content: Inline::words("hi there"),
        };
        assert_eq!(text(&[quoted]), "\"hi there\"");
        let quoted = Inline::Quoted {
            kind: QuoteKind::SingleQuote,
            content: Inline::words("x"),
        };
        assert_eq!(text(&[quoted]), "'x'");
    }

    #[test]
    fn test_dropped_and_transparent_inlines() {
        let inlines = vec![
            Inline::str("a"),
            Inline::Image {
                alt: Inline::words("logo"),
                target: "logo.png".to_string(),
            },
            Inline::RawInline {
                format: "html".to_string(),
                text: "<br>".to_string(),
            },
            Inline::Span {
                attr: Attr::class("x"),
                content: vec![Inline::str("b")],
            },
            Inline::Superscript(vec![Inline::str("2")]),
            Inline::Math {
                text: "x^2".to_string(),
            },
        ];
        assert_eq!(text(&inlines), "ab2`x^2`");
    }

    #[test]
    fn test_note_expanded_in_place() {
        let inlines = vec![
            Inline::str("word"),
            Inline::Note(vec![Block::para("footnote text")]),
        ];
        assert_eq!(text(&inlines), "wordfootnote text");
    }

    #[test]
    fn test_line_breaks() {
        let inlines = vec![Inline::str("a"), Inline::LineBreak, Inline::str("b")];
        assert_eq!(text(&inlines), "a\nb");
    }
}
