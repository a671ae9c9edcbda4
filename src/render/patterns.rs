//! Small recognizers for help-file conventions found inside inline text.

use regex::Regex;
use std::sync::LazyLock;

static HELP_TOPIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:h(?:elp)?\s+(\S+)\s*$").unwrap());

static OPTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'[A-Za-z][\w-]*'$").unwrap());

static PAREN_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((https?://[^\s()]+)\)$").unwrap());

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://|www\.)\S+$").unwrap());

static LITERAL_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)>[\w+-]*$").unwrap());

static LITERAL_CLOSER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<(?:\s|$)").unwrap());

/// Topic of a help-lookup command such as `:h marks` or `:help 'tw'`.
pub fn help_topic(text: &str) -> Option<&str> {
    HELP_TOPIC
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `text` is a quoted option name like `'shiftwidth'`.
pub fn is_option_name(text: &str) -> bool {
    OPTION_NAME.is_match(text)
}

/// URL inside a parenthesized word like `(https://example.com)`.
pub fn paren_url(text: &str) -> Option<&str> {
    PAREN_URL
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `text` is a bare URL.
pub fn looks_like_url(text: &str) -> bool {
    URL.is_match(text.trim())
}

/// Cross-reference tag for a fragment target: `#Target Name` → `target-name`.
///
/// Returns `None` when `target` is not a fragment.
pub fn fragment_tag(target: &str) -> Option<String> {
    let fragment = target.strip_prefix('#')?;
    let tag = fragment
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    Some(tag)
}

/// Whether a rendered line ends by opening a literal region (`>` or `>lang`).
pub fn is_literal_opener(line: &str) -> bool {
    LITERAL_OPENER.is_match(line.trim_end())
}

/// Whether a rendered line closes a literal region.
pub fn is_literal_closer(line: &str) -> bool {
    LITERAL_CLOSER.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_topic() {
        assert_eq!(help_topic(":h marks"), Some("marks"));
        assert_eq!(help_topic(":help 'tw'"), Some("'tw'"));
        assert_eq!(help_topic(":hx marks"), None);
        assert_eq!(help_topic(":h"), None);
        assert_eq!(help_topic("marks"), None);
    }

    #[test]
    fn test_option_name() {
        assert!(is_option_name("'shiftwidth'"));
        assert!(is_option_name("'no-wrap'"));
        assert!(!is_option_name("shiftwidth"));
        assert!(!is_option_name("'two words'"));
        assert!(!is_option_name("''"));
    }

    #[test]
    fn test_paren_url() {
        assert_eq!(paren_url("(https://neovim.io)"), Some("https://neovim.io"));
        assert_eq!(paren_url("(http://a.b/c)"), Some("http://a.b/c"));
        assert_eq!(paren_url("(see this)"), None);
        assert_eq!(paren_url("https://neovim.io"), None);
    }

    #[test]
    fn test_looks_like_url() {
        assert!(looks_like_url("https://github.com/neovim/neovim"));
        assert!(looks_like_url("www.vim.org"));
        assert!(!looks_like_url("the docs"));
        assert!(!looks_like_url("https://a b"));
    }

    #[test]
    fn test_fragment_tag() {
        assert_eq!(fragment_tag("#Target Name"), Some("target-name".to_string()));
        assert_eq!(fragment_tag("#link-target"), Some("link-target".to_string()));
        assert_eq!(fragment_tag("https://x.y/#a"), None);
    }

    #[test]
    fn test_literal_delimiters() {
        assert!(is_literal_opener(">lua"));
        assert!(is_literal_opener("see this: >"));
        assert!(is_literal_opener("code: >yaml  "));
        assert!(!is_literal_opener("a > b"));
        assert!(!is_literal_opener("x->y"));

        assert!(is_literal_closer("<"));
        assert!(is_literal_closer("< trailing"));
        assert!(!is_literal_closer("<https://neovim.io>"));
        assert!(!is_literal_closer("  <"));
    }
}
