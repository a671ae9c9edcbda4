//! Rendering options and configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default hard line width of help files.
pub const DEFAULT_MAX_WIDTH: usize = 78;

/// Default help-site prefix whose links become internal cross-references.
pub const DEFAULT_HELP_URL_PREFIX: &str = "https://neovim.io/doc/user/";

/// Options for rendering a document as help text.
///
/// Every field has a default, so a partial configuration deserializes:
///
/// ```
/// use vimhelp::RenderOptions;
///
/// let options: RenderOptions = serde_json::from_str(r#"{"max_width": 80}"#).unwrap();
/// assert_eq!(options.max_width, 80);
/// assert_eq!(options.definition_gap, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Hard line width
    pub max_width: usize,

    /// Preferred line width for paragraphs (defaults to `max_width`)
    pub soft_width: Option<usize>,

    /// Glyph for bullet list items
    pub bullet: char,

    /// Columns between a definition term and its definition
    pub definition_gap: usize,

    /// Links under this prefix render as `|content|` tags
    pub help_url_prefix: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hard line width.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set the preferred paragraph width.
    pub fn with_soft_width(mut self, width: usize) -> Self {
        self.soft_width = Some(width);
        self
    }

    /// Set the bullet glyph.
    pub fn with_bullet(mut self, bullet: char) -> Self {
        self.bullet = bullet;
        self
    }

    /// Set the gap between definition terms and definitions.
    pub fn with_definition_gap(mut self, gap: usize) -> Self {
        self.definition_gap = gap;
        self
    }

    /// Set the help-site URL prefix.
    pub fn with_help_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.help_url_prefix = prefix.into();
        self
    }

    /// Check the options for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(Error::InvalidOptions(
                "max_width must be greater than zero".to_string(),
            ));
        }
        if let Some(soft) = self.soft_width {
            if soft > self.max_width {
                return Err(Error::InvalidOptions(format!(
                    "soft_width {} exceeds max_width {}",
                    soft, self.max_width
                )));
            }
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            soft_width: None,
            bullet: '•',
            definition_gap: 8,
            help_url_prefix: DEFAULT_HELP_URL_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_max_width(100)
            .with_soft_width(90)
            .with_bullet('-')
            .with_definition_gap(4);

        assert_eq!(options.max_width, 100);
        assert_eq!(options.soft_width, Some(90));
        assert_eq!(options.bullet, '-');
        assert_eq!(options.definition_gap, 4);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.max_width, 78);
        assert_eq!(options.soft_width, None);
        assert_eq!(options.bullet, '•');
        assert_eq!(options.help_url_prefix, "https://neovim.io/doc/user/");
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let err = RenderOptions::new().with_max_width(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn test_validate_rejects_wide_soft_width() {
        let err = RenderOptions::new()
            .with_max_width(40)
            .with_soft_width(50)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("soft_width 50 exceeds max_width 40"));
    }

    #[test]
    fn test_deserialize_partial() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"soft_width": 72, "bullet": "*"}"#).unwrap();
        assert_eq!(options.max_width, 78);
        assert_eq!(options.soft_width, Some(72));
        assert_eq!(options.bullet, '*');
    }
}
