//! Table types.

use super::{Block, Inline};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table, header rows first
    pub rows: Vec<TableRow>,

    /// Number of header rows (0 = no header)
    #[serde(default)]
    pub header_rows: u8,

    /// Per-column alignment (missing entries use [`Alignment::Default`])
    #[serde(default)]
    pub alignments: Vec<Alignment>,

    /// Table caption
    #[serde(default)]
    pub caption: Option<String>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with header.
    pub fn with_header(header_rows: u8) -> Self {
        Self {
            header_rows,
            ..Self::new()
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Set column alignments and return self.
    pub fn aligned(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Alignment of a column.
    pub fn alignment(&self, column: usize) -> Alignment {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    /// Get header rows.
    pub fn header(&self) -> &[TableRow] {
        let n = (self.header_rows as usize).min(self.rows.len());
        &self.rows[..n]
    }

    /// Get body rows (non-header).
    pub fn body(&self) -> &[TableRow] {
        let n = (self.header_rows as usize).min(self.rows.len());
        &self.rows[n..]
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            values
                .into_iter()
                .map(|v| TableCell::text(v.as_ref()))
                .collect(),
        )
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: Vec<Block>,
}

impl TableCell {
    /// Create a new cell with text content.
    pub fn text(text: &str) -> Self {
        Self {
            content: vec![Block::Plain(Inline::words(text))],
        }
    }
}

/// Column alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// No explicit alignment (rendered left)
    #[default]
    Default,
}
