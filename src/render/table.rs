//! Plain-text table formatting.

use crate::model::Alignment;

/// Format a simple table from already flattened cell text.
///
/// Each column is as wide as its widest cell, columns are separated by one
/// space, and the header rows are underlined with dashes per column.
/// Missing cells in short rows are treated as empty.
pub fn format_table(
    header: &[Vec<String>],
    body: &[Vec<String>],
    alignments: &[Alignment],
) -> Vec<String> {
    let columns = header
        .iter()
        .chain(body)
        .map(|row| row.len())
        .max()
        .unwrap_or(0);
    if columns == 0 {
        return Vec::new();
    }

    let mut widths = vec![0usize; columns];
    for row in header.iter().chain(body) {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let alignment = |col: usize| alignments.get(col).copied().unwrap_or_default();
    let format_row = |row: &Vec<String>| -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, &width)| {
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                align(cell, width, alignment(col))
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    };

    let mut lines: Vec<String> = header.iter().map(format_row).collect();
    if !header.is_empty() {
        let underline: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        lines.push(underline.join(" "));
    }
    lines.extend(body.iter().map(format_row));
    lines
}

fn align(cell: &str, width: usize, alignment: Alignment) -> String {
    let len = cell.chars().count();
    let pad = width.saturating_sub(len);
    match alignment {
        Alignment::Right => format!("{}{}", " ".repeat(pad), cell),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), cell, " ".repeat(pad - left))
        }
        Alignment::Left | Alignment::Default => format!("{}{}", cell, " ".repeat(pad)),
    }
}
