//! Side-by-side layout of two rendered columns.
//!
//! Rows pair the i-th left line with the i-th right line. A line that opens
//! a literal region switches its side to passthrough: the following lines
//! are emitted on their own rows, unpadded, until the closer is reached.

use super::doc::{Line, LineKind};
use super::patterns::{is_literal_closer, is_literal_opener};
use crate::error::{Error, Result};

/// Merge two columns of lines.
///
/// Left lines are padded to `left_width`, followed by `gap` spaces and the
/// right line. Passthrough lines of the right column keep their offset of
/// `left_width + gap` columns; bare closers go to column 0, prefixed ones
/// keep the offset.
///
/// Fails when a left line outside a literal region is wider than `left_width`.
pub fn merge(left: &[Line], right: &[Line], left_width: usize, gap: usize) -> Result<Vec<Line>> {
    let shift = " ".repeat(left_width + gap);
    let mut out = Vec::with_capacity(left.len().max(right.len()));
    let (mut l, mut r) = (0, 0);
    let (mut left_literal, mut right_literal) = (false, false);

    loop {
        if left_literal {
            if let Some(line) = left.get(l) {
                l += 1;
                left_literal = line.kind != LineKind::Closer;
                out.push(line.clone());
                continue;
            }
            left_literal = false;
        }
        if right_literal {
            if let Some(line) = right.get(r) {
                r += 1;
                if line.kind == LineKind::Closer {
                    right_literal = false;
                }
                if line.kind == LineKind::Closer && is_literal_closer(&line.text) {
                    out.push(line.clone());
                } else {
                    out.push(shifted(line, &shift));
                }
                continue;
            }
            right_literal = false;
        }

        match (left.get(l), right.get(r)) {
            (None, None) => break,
            (Some(term), next) => {
                let width = term.width();
                if width > left_width {
                    return Err(Error::Configuration(format!(
                        "left column line is {} columns wide, column holds {}: {:?}",
                        width, left_width, term.text
                    )));
                }
                l += 1;
                left_literal = term.kind.opens_literal();
                let row = match next {
                    Some(def) => {
                        r += 1;
                        right_literal = def.kind.opens_literal();
                        let text = format!(
                            "{:<lw$}{:gap$}{}",
                            term.text,
                            "",
                            def.text,
                            lw = left_width,
                            gap = gap
                        );
                        Line::new(text, row_kind(term, def))
                    }
                    None => term.clone(),
                };
                out.push(trimmed(row));
            }
            (None, Some(def)) => {
                r += 1;
                right_literal = def.kind.opens_literal();
                out.push(shifted(def, &shift));
            }
        }
    }

    Ok(out)
}

/// Merge two columns of text, recognizing literal delimiters in the lines.
///
/// Non-empty output ends with a newline.
pub fn merge_text(left: &str, right: &str, left_width: usize, gap: usize) -> Result<String> {
    let merged = merge(&classify(left), &classify(right), left_width, gap)?;
    let mut out = String::new();
    for line in merged {
        out.push_str(&line.text);
        out.push('\n');
    }
    Ok(out)
}

fn classify(text: &str) -> Vec<Line> {
    text.lines()
        .map(|line| {
            let kind = if is_literal_closer(line) {
                LineKind::Closer
            } else if is_literal_opener(line) {
                LineKind::Opening
            } else {
                LineKind::Text
            };
            Line::new(line, kind)
        })
        .collect()
}

fn row_kind(term: &Line, def: &Line) -> LineKind {
    if term.kind.opens_literal() || def.kind.opens_literal() {
        LineKind::Opening
    } else if def.kind == LineKind::Literal {
        LineKind::Literal
    } else {
        LineKind::Text
    }
}

fn shifted(line: &Line, shift: &str) -> Line {
    if line.text.is_empty() {
        return line.clone();
    }
    let kind = match line.kind {
        LineKind::Opener => LineKind::Opening,
        kind => kind,
    };
    Line::new(format!("{}{}", shift, line.text), kind)
}

fn trimmed(mut line: Line) -> Line {
    if line.kind != LineKind::Literal {
        let len = line.text.trim_end().len();
        line.text.truncate(len);
    }
    line
}
