//! Grid rendering
//!
//! Produces the markup the host page drops into its table container, and a
//! plain-text layout for terminals.
//!
//! # HTML layout
//!
//! ```text
//! <table class="generatedTable">
//!   <thead><tr><th scope="col"></th><th scope="col">c0</th>...</tr></thead>
//!   <tbody><tr><th scope="row">r0</th><td>r0*c0</td>...</tr>...</tbody>
//! </table>
//! ```

use std::fmt::Write;

use super::grid::Grid;
use crate::utils::error::BuildError;

/// CSS class carried by every generated table
pub const TABLE_CLASS: &str = "generatedTable";

/// Render a grid as an HTML table
pub fn to_html(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = write!(out, "<table class=\"{}\">", TABLE_CLASS);

    out.push_str("<thead><tr><th scope=\"col\"></th>");
    for col in grid.column_headers() {
        let _ = write!(out, "<th scope=\"col\">{}</th>", col);
    }
    out.push_str("</tr></thead>");

    out.push_str("<tbody>");
    for row in grid.rows() {
        let _ = write!(out, "<tr><th scope=\"row\">{}</th>", row.label);
        for cell in &row.cells {
            let _ = write!(out, "<td>{}</td>", cell);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");

    out
}

/// Render the placeholder shown instead of a table when building fails
pub fn error_to_html(err: &BuildError) -> String {
    format!("<div>{}</div>", escape_html(&err.to_string()))
}

/// Render either outcome of a build as HTML
pub fn result_to_html(result: &Result<Grid, BuildError>) -> String {
    match result {
        Ok(grid) => to_html(grid),
        Err(err) => error_to_html(err),
    }
}

/// Render a grid as right-aligned text columns
///
/// ```text
///   | 2  3  4
/// --+--------
/// 3 | 6  9 12
/// ```
pub fn to_text(grid: &Grid) -> String {
    let header: Vec<String> = grid.column_labels();
    let body: Vec<(String, Vec<String>)> = grid
        .rows()
        .iter()
        .map(|row| {
            (
                row.label.to_string(),
                row.cells.iter().map(i128::to_string).collect(),
            )
        })
        .collect();

    let label_width = body.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for (_, cells) in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_text_row(&mut out, "", label_width, &header, &widths);

    out.push_str(&"-".repeat(label_width + 1));
    out.push('+');
    let rule: usize = widths.iter().map(|w| w + 1).sum();
    out.push_str(&"-".repeat(rule));
    out.push('\n');

    for (label, cells) in &body {
        push_text_row(&mut out, label, label_width, cells, &widths);
    }

    out
}

fn push_text_row(
    out: &mut String,
    label: &str,
    label_width: usize,
    cells: &[String],
    widths: &[usize],
) {
    let _ = write!(out, "{:>width$} |", label, width = label_width);
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(out, " {:>width$}", cell, width = width);
    }
    out.push('\n');
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::{build_exclusive, build_inclusive};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html_small_table() {
        let grid = build_inclusive(1.0, 2.0, 3.0, 3.0).unwrap();
        assert_eq!(
            to_html(&grid),
            "<table class=\"generatedTable\">\
             <thead><tr><th scope=\"col\"></th><th scope=\"col\">1</th><th scope=\"col\">2</th></tr></thead>\
             <tbody><tr><th scope=\"row\">3</th><td>3</td><td>6</td></tr></tbody>\
             </table>"
        );
    }

    #[test]
    fn test_html_empty_columns() {
        let grid = build_exclusive(0.0, 0.0, 0.0, 1.0).unwrap();
        let html = to_html(&grid);
        assert!(html.contains("<thead><tr><th scope=\"col\"></th></tr></thead>"));
        assert!(html.contains("<tr><th scope=\"row\">0</th></tr>"));
    }

    #[test]
    fn test_error_placeholder() {
        assert_eq!(
            error_to_html(&BuildError::NonFinite),
            "<div>Invalid range values</div>"
        );
        let result = build_inclusive(f64::NAN, 0.0, 0.0, 0.0);
        assert_eq!(result_to_html(&result), "<div>Invalid range values</div>");
    }

    #[test]
    fn test_text_layout() {
        let grid = build_inclusive(2.0, 4.0, 3.0, 4.0).unwrap();
        assert_eq!(
            to_text(&grid),
            "  | 2  3  4\n\
             --+--------\n\
             3 | 6  9 12\n\
             4 | 8 12 16\n"
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
