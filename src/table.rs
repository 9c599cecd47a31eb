//! Markdown table serialization for string grids.
//!
//! Columns are left aligned and padded to the widest cell (by display width,
//! minimum three so the delimiter row stays valid). Padding is cosmetic; the
//! `|`-separated cell sequence is what renderers read, so cell text is escaped
//! to keep that sequence intact.

use unicode_width::UnicodeWidthStr;

const MIN_COLUMN_WIDTH: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A header row plus data rows, rendered with [`MarkdownTable::render`].
pub struct MarkdownTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Number of data rows, header excluded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header, delimiter and data rows, one line each, with no
    /// trailing newline.
    ///
    /// Ragged rows are padded with empty cells up to the widest row.
    pub fn render(&self) -> String {
        let grid: Vec<Vec<String>> = std::iter::once(&self.header)
            .chain(&self.rows)
            .map(|row| row.iter().map(|cell| escape_cell(cell)).collect())
            .collect();

        let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![MIN_COLUMN_WIDTH; columns];
        for row in &grid {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(cell.width());
            }
        }

        let mut lines = Vec::with_capacity(grid.len() + 1);
        let mut grid_rows = grid.iter();
        if let Some(header) = grid_rows.next() {
            lines.push(render_line(header, &widths));
        }
        let delimiter: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        lines.push(render_line(&delimiter, &widths));
        lines.extend(grid_rows.map(|row| render_line(row, &widths)));
        lines.join("\n")
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let cell = cells.get(col).map(String::as_str).unwrap_or("");
            let padding = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// Make cell text safe inside a table row.
///
/// Pipes are backslash-escaped and line breaks collapse to spaces, since
/// either would otherwise split the cell or the row.
pub fn escape_cell(cell: &str) -> String {
    let mut escaped = String::with_capacity(cell.len());
    let mut chars = cell.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '|' => escaped.push_str("\\|"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push(' ');
            }
            '\n' => escaped.push(' '),
            other => escaped.push(other),
        }
    }
    escaped
}
