//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered help text
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Blocks visited, nested ones included
    pub block_count: u32,

    /// Paragraph and plain blocks balanced
    pub paragraph_count: u32,

    /// Headings rendered
    pub heading_count: u32,

    /// List items rendered (bullet and ordered)
    pub list_item_count: u32,

    /// Definition-list entries rendered
    pub definition_count: u32,

    /// Code blocks rendered
    pub code_block_count: u32,

    /// Tables rendered
    pub table_count: u32,

    /// Nodes without a rendering rule, dropped from the output
    pub dropped_nodes: u32,

    /// Balanced lines longer than their width (a single oversized token)
    pub overlong_lines: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_result_new() {
        let stats = RenderStats {
            paragraph_count: 1,
            ..RenderStats::new()
        };
        let result = RenderResult::new("text\n".to_string(), stats.clone());
        assert_eq!(result.content, "text\n");
        assert_eq!(result.stats, stats);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = RenderStats {
            dropped_nodes: 2,
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"dropped_nodes\":2"));
    }
}
