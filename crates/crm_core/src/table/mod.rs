//! Generic tabular projection of record collections.
//!
//! # Responsibility
//! - Project any record collection through a column descriptor list.
//! - Render a plain-text table for CLI and diagnostic output.
//!
//! # Invariants
//! - Cells are produced lazily, row by row, in input order.
//! - Empty input renders a single placeholder row, never an empty body.

const EMPTY_PLACEHOLDER: &str = "No data available";

/// One column: a header plus a cell function over the full row.
///
/// The cell function covers both direct field accessors and computed
/// values that need cross-entity lookups (e.g. a contact's company name).
pub struct Column<'a, T> {
    header: String,
    cell: Box<dyn Fn(&T) -> String + 'a>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(header: impl Into<String>, cell: impl Fn(&T) -> String + 'a) -> Self {
        Self {
            header: header.into(),
            cell: Box::new(cell),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Renders this column's cell for one row.
    pub fn render(&self, row: &T) -> String {
        (self.cell)(row)
    }
}

/// Lazily projects rows through the column list.
///
/// Each item is one rendered row in input order; nothing is computed until
/// the iterator is advanced.
pub fn project<'a, T>(
    rows: &'a [T],
    columns: &'a [Column<'a, T>],
) -> impl Iterator<Item = Vec<String>> + 'a {
    rows.iter()
        .map(move |row| columns.iter().map(|column| column.render(row)).collect())
}

/// Renders a padded plain-text table with a header line.
///
/// Empty input yields the headers plus one placeholder row.
pub fn render_text<T>(rows: &[T], columns: &[Column<'_, T>]) -> String {
    let headers: Vec<String> = columns
        .iter()
        .map(|column| column.header().to_string())
        .collect();
    let body: Vec<Vec<String>> = project(rows, columns).collect();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &body {
        for (index, cell) in row.iter().enumerate() {
            if cell.len() > widths[index] {
                widths[index] = cell.len();
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    if body.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
        return out;
    }
    for row in &body {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // The last column stays unpadded so lines carry no trailing spaces.
        let last = index + 1 == cells.len();
        if !last && cell.len() < *width {
            out.push_str(&" ".repeat(width - cell.len()));
        }
    }
    out.push('\n');
}
