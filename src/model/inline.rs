//! Inline-level types.

use super::{Attr, Block};
use serde::{Deserialize, Serialize};

/// Quotation style of a [`Inline::Quoted`] span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteKind {
    /// Single quotes
    SingleQuote,
    /// Double quotes
    DoubleQuote,
}

/// An inline node inside a paragraph, heading, term or cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Inline {
    /// A word (no whitespace)
    Str(String),
    /// Inter-word space
    Space,
    /// Source line break without meaning
    SoftBreak,
    /// Hard line break
    LineBreak,
    /// Emphasis
    Emph(Vec<Inline>),
    /// Strong emphasis
    Strong(Vec<Inline>),
    /// Struck-out text
    Strikeout(Vec<Inline>),
    /// Subscript
    Subscript(Vec<Inline>),
    /// Superscript
    Superscript(Vec<Inline>),
    /// Small capitals
    SmallCaps(Vec<Inline>),
    /// Quoted text
    Quoted {
        /// Quote style
        kind: QuoteKind,
        /// Quoted content
        content: Vec<Inline>,
    },
    /// Inline code
    Code {
        /// Code attributes
        #[serde(default)]
        attr: Attr,
        /// Literal code text
        text: String,
    },
    /// Inline math
    Math {
        /// TeX source
        text: String,
    },
    /// Hyperlink
    Link {
        /// Visible link text
        content: Vec<Inline>,
        /// Link target URL or fragment
        target: String,
    },
    /// Image (not representable in help text)
    Image {
        /// Alternative text
        #[serde(default)]
        alt: Vec<Inline>,
        /// Image location
        target: String,
    },
    /// Footnote, expanded in place
    Note(Vec<Block>),
    /// Generic inline container
    Span {
        /// Span attributes
        #[serde(default)]
        attr: Attr,
        /// Span content
        content: Vec<Inline>,
    },
    /// Citation
    Cite(Vec<Inline>),
    /// Content already in some output format
    RawInline {
        /// Target format name
        format: String,
        /// Raw content
        text: String,
    },
}

impl Inline {
    /// Split text into `Str` words separated by `Space`, with newlines
    /// becoming `SoftBreak`.
    pub fn words(text: &str) -> Vec<Inline> {
        let mut out = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if i > 0 && !out.is_empty() {
                out.push(Inline::SoftBreak);
            }
            for (j, word) in line.split_whitespace().enumerate() {
                if j > 0 {
                    out.push(Inline::Space);
                }
                out.push(Inline::Str(word.to_string()));
            }
        }
        out
    }

    /// Create a `Str` node.
    pub fn str(text: impl Into<String>) -> Self {
        Inline::Str(text.into())
    }

    /// Create an inline code node.
    pub fn code(text: impl Into<String>) -> Self {
        Inline::Code {
            attr: Attr::default(),
            text: text.into(),
        }
    }

    /// Create a link whose text is split into words.
    pub fn link(text: &str, target: impl Into<String>) -> Self {
        Inline::Link {
            content: Inline::words(text),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(
            Inline::words("foo  bar"),
            vec![Inline::str("foo"), Inline::Space, Inline::str("bar")]
        );
    }

    #[test]
    fn test_words_soft_breaks() {
        assert_eq!(
            Inline::words("foo\nbar"),
            vec![Inline::str("foo"), Inline::SoftBreak, Inline::str("bar")]
        );
        assert!(Inline::words("   ").is_empty());
    }

    #[test]
    fn test_link_constructor() {
        let link = Inline::link("the docs", "#usage");
        match link {
            Inline::Link { content, target } => {
                assert_eq!(content.len(), 3);
                assert_eq!(target, "#usage");
            }
            other => panic!("unexpected inline {other:?}"),
        }
    }

    #[test]
    fn test_unit_variant_json() {
        let inline: Inline = serde_json::from_str(r#"{"t": "Space"}"#).unwrap();
        assert_eq!(inline, Inline::Space);
        let inline: Inline =
            serde_json::from_str(r#"{"t": "Quoted", "c": {"kind": "DoubleQuote", "content": []}}"#)
                .unwrap();
        assert!(matches!(inline, Inline::Quoted { kind: QuoteKind::DoubleQuote, .. }));
    }
}
