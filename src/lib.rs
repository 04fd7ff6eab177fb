//! # multab
//!
//! Interactive multiplication tables for the browser and the terminal.
//!
//! ## Features
//!
//! - **Forgiving input**: field text is validated with browser `Number()` rules
//! - **Normalized ranges**: reversed bounds are swapped, fractions truncated
//! - **Two bound modes**: inclusive for explicit ranges, exclusive for the
//!   panning viewport
//! - **Panning viewport**: arrow keys move a fixed-size window over the
//!   infinite grid
//! - **WASM Support**: compiles to WebAssembly for the browser page
//!
//! ## Usage Examples
//!
//! ### Building a table
//!
//! ```rust
//! use multab::{build_table, render};
//!
//! let grid = build_table(2.0, 4.0, 3.0, 5.0).unwrap();
//! assert_eq!(grid.column_labels(), vec!["2", "3", "4"]);
//! assert_eq!(grid.row_labels(), vec!["3", "4", "5"]);
//! assert_eq!(grid.cell(5, 4), Some(20));
//!
//! let html = render::to_html(&grid);
//! assert!(html.starts_with("<table class=\"generatedTable\">"));
//! ```
//!
//! ### Driving the page
//!
//! ```rust
//! use multab::{AppConfig, TableApp};
//!
//! let mut app = TableApp::new(AppConfig::default());
//! app.handle_key("ArrowRight");
//! let grid_html = app.current().display.to_html().unwrap();
//! assert!(grid_html.contains("<th scope=\"col\">1</th>"));
//! ```

/// Core table modules
pub mod core;

/// Page orchestration: forms, keys, notices
pub mod app;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use core::grid::{self, build, build_exclusive, build_inclusive, build_ranges};
pub use core::render;
pub use core::validate::{self, validate, RawValue, ValidatedNumber};
pub use core::viewport::{self, ArrowKey, ViewportState};
pub use core::{BoundMode, Grid, GridRow, Range, TableOptions};

pub use app::{CountForm, DisplayUpdate, Notice, Outcome, RangeForm, TableApp};

// Re-export utilities
pub use utils::config::AppConfig;
pub use utils::error::{BuildError, ConfigError, FormError};

/// Build an inclusive-bound table, as the range form does
///
/// # Arguments
/// * `col_min`, `col_max` - column bounds, either order
/// * `row_min`, `row_max` - row bounds, either order
pub fn build_table(
    col_min: f64,
    col_max: f64,
    row_min: f64,
    row_max: f64,
) -> Result<Grid, BuildError> {
    build_inclusive(col_min, col_max, row_min, row_max)
}

/// Build a table and render it straight to HTML
///
/// Build errors become the diagnostic placeholder markup.
pub fn build_table_html(
    col_min: f64,
    col_max: f64,
    row_min: f64,
    row_max: f64,
    options: &TableOptions,
) -> String {
    render::result_to_html(&build(col_min, col_max, row_min, row_max, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_table_is_inclusive() {
        let grid = build_table(1.0, 3.0, 1.0, 2.0).unwrap();
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_count(), 2);
    }

    #[test]
    fn test_build_table_html_error() {
        let html = build_table_html(f64::NAN, 1.0, 1.0, 1.0, &TableOptions::default());
        assert_eq!(html, "<div>Invalid range values</div>");
    }

    #[test]
    fn test_build_table_html_viewport_mode() {
        let html = build_table_html(0.0, 2.0, 0.0, 1.0, &TableOptions::viewport_mode());
        assert!(html.contains("<th scope=\"col\">1</th>"));
        assert!(!html.contains("<th scope=\"col\">2</th>"));
    }
}
