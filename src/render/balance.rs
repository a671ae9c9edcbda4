//! Optimal (minimum-raggedness) line breaking.
//!
//! Paragraph text is broken into tokens and distributed across lines by a
//! dynamic program that minimizes the summed cube of each line's distance
//! from a preferred width, instead of greedily filling each line.

/// Options for [`balance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceOptions {
    /// Columns already taken on every line (current indentation)
    pub indent: usize,

    /// Preferred line length; defaults to the hard maximum
    pub soft_max: Option<usize>,

    /// Relax the penalty of the line ending at the final token
    pub ignore_last: bool,
}

impl BalanceOptions {
    /// Create options with no indent, no soft width and a strict last line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve columns for indentation.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the preferred line length.
    pub fn with_soft_max(mut self, soft_max: Option<usize>) -> Self {
        self.soft_max = soft_max;
        self
    }

    /// Relax the last line's penalty.
    pub fn ignoring_last(mut self) -> Self {
        self.ignore_last = true;
        self
    }
}

/// Break `tokens` into lines no longer than `max` columns.
///
/// Each returned line is a space-joined run of consecutive tokens. A token
/// longer than `max` is placed alone on its line and never split.
pub fn balance<T: AsRef<str>>(tokens: &[T], max: usize, options: &BalanceOptions) -> Vec<String> {
    let count = tokens.len();
    if count == 0 {
        return Vec::new();
    }

    let soft = options.soft_max.unwrap_or(max).min(max) as i64;

    // offsets[k] = total length of the first k tokens
    let mut offsets = Vec::with_capacity(count + 1);
    offsets.push(0usize);
    for token in tokens {
        let last = offsets[offsets.len() - 1];
        offsets.push(last + token.as_ref().chars().count());
    }

    // Length of the line holding tokens start..=end (1-based).
    let line_length = |start: usize, end: usize| -> usize {
        offsets[end] - offsets[start - 1] + (end - start) + options.indent
    };

    let mut cost = vec![f64::INFINITY; count + 1];
    cost[0] = 0.0;
    let mut best_start = vec![0usize; count + 1];
    let mut lowest = 1usize;

    for end in 1..=count {
        while lowest < end && line_length(lowest, end) > max {
            lowest += 1;
        }
        let is_last = end == count;
        for start in (lowest..=end).rev() {
            let mut slack = soft - line_length(start, end) as i64;
            if slack < 0 && !(options.ignore_last && is_last) {
                slack *= 2;
            }
            let mut penalty = (slack.unsigned_abs() as f64).powi(3);
            if options.ignore_last && is_last {
                penalty *= 0.01;
            }
            let candidate = cost[start - 1] + penalty;
            if candidate < cost[end] {
                cost[end] = candidate;
                best_start[end] = start;
            }
        }
    }

    let mut lines = Vec::new();
    let mut end = count;
    while end > 0 {
        let start = best_start[end];
        lines.push(
            tokens[start - 1..end]
                .iter()
                .map(|t| t.as_ref())
                .collect::<Vec<&str>>()
                .join(" "),
        );
        end = start - 1;
    }
    lines.reverse();

    log::trace!(
        "balanced {} tokens into {} lines (max {}, soft {})",
        count,
        lines.len(),
        max,
        soft
    );
    lines
}

/// Split text into balancing tokens.
///
/// Words are whitespace-delimited. While a word leaves an odd number of
/// backticks open, following words are glued onto it with a single space so
/// that an inline code span never straddles a line break. An unclosed span
/// turns the remainder of the text into one token.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut open_ticks = 0usize;

    for word in text.split_whitespace() {
        if open_ticks % 2 == 1 {
            current.push(' ');
            current.push_str(word);
        } else {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            current.push_str(word);
            open_ticks = 0;
        }
        open_ticks += word.matches('`').count();
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
