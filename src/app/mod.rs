//! Page orchestration
//!
//! `TableApp` owns everything the page used to keep in globals: the panning
//! viewport, the initial table markup captured at startup, and the settings.
//! Each event handler returns an [`Outcome`] telling the host what the table
//! container must show and which notice, if any, to display. The host applies
//! it and does nothing else.
//!
//! # Example
//!
//! ```rust
//! use multab::app::{DisplayUpdate, RangeForm, TableApp};
//!
//! let mut app = TableApp::default().with_placeholder("<table></table>");
//!
//! let outcome = app.submit_range(&RangeForm::from_text("2", "4", "3", "5"));
//! assert!(matches!(outcome.display, DisplayUpdate::Table(_)));
//!
//! let outcome = app.handle_key("ArrowRight");
//! assert_eq!(app.viewport().horizontal, 1);
//! assert!(outcome.notice.is_none());
//! ```

pub mod forms;

pub use forms::{CountForm, RangeForm, RangeValues, COUNT_FIELDS, RANGE_FIELDS};

use crate::core::grid::{build, build_ranges, Grid, TableOptions};
use crate::core::render;
use crate::core::viewport::{ArrowKey, ViewportState};
use crate::utils::config::AppConfig;
use crate::utils::error::{BuildError, FormError};

/// A transient message for the user
///
/// The host shows at most one: a newer notice replaces the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    pub message: String,
    /// Auto-dismiss delay; 0 keeps the notice until it is replaced
    pub timeout_ms: u64,
}

/// What the table container must show after an event
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    /// Keep whatever is displayed
    Unchanged,
    /// Replace the content with a freshly built grid
    Table(Grid),
    /// Restore the markup captured at startup
    Placeholder(String),
    /// Empty the container
    Cleared,
    /// The builder refused the bounds; show the diagnostic instead of a table
    Diagnostic(BuildError),
}

impl DisplayUpdate {
    /// New container markup, or `None` when the container is left alone
    pub fn to_html(&self) -> Option<String> {
        match self {
            DisplayUpdate::Unchanged => None,
            DisplayUpdate::Table(grid) => Some(render::to_html(grid)),
            DisplayUpdate::Placeholder(markup) => Some(markup.clone()),
            DisplayUpdate::Cleared => Some(String::new()),
            DisplayUpdate::Diagnostic(err) => Some(render::error_to_html(err)),
        }
    }

    /// Short tag for hosts that dispatch on the kind of update
    pub fn kind(&self) -> &'static str {
        match self {
            DisplayUpdate::Unchanged => "unchanged",
            DisplayUpdate::Table(_) => "table",
            DisplayUpdate::Placeholder(_) => "placeholder",
            DisplayUpdate::Cleared => "cleared",
            DisplayUpdate::Diagnostic(_) => "diagnostic",
        }
    }

    fn from_build(result: Result<Grid, BuildError>) -> Self {
        match result {
            Ok(grid) => DisplayUpdate::Table(grid),
            Err(err) => {
                tracing::warn!(%err, "table build rejected");
                DisplayUpdate::Diagnostic(err)
            }
        }
    }
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub display: DisplayUpdate,
    pub notice: Option<Notice>,
}

impl Outcome {
    fn unchanged() -> Self {
        Self {
            display: DisplayUpdate::Unchanged,
            notice: None,
        }
    }

    fn display(display: DisplayUpdate) -> Self {
        Self {
            display,
            notice: None,
        }
    }
}

/// Orchestrates forms, keys and rebuilds for one page session
#[derive(Debug, Clone, Default)]
pub struct TableApp {
    config: AppConfig,
    viewport: ViewportState,
    placeholder: Option<String>,
}

impl TableApp {
    /// Create an app whose viewport starts at `config.initial_viewport`
    pub fn new(config: AppConfig) -> Self {
        Self {
            viewport: config.initial_viewport,
            config,
            placeholder: None,
        }
    }

    /// Attach the table markup present before any user-driven rebuild
    pub fn with_placeholder(mut self, markup: impl Into<String>) -> Self {
        self.placeholder = Some(markup.into());
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Range form submitted: validate, then build an inclusive grid.
    ///
    /// Reversed ranges are not swapped here; they revert to the placeholder.
    pub fn submit_range(&self, form: &RangeForm<'_>) -> Outcome {
        let values = match form.validate() {
            Ok(values) => values,
            Err(err) => return self.reject(err),
        };

        if values.is_reversed() {
            tracing::warn!(?values, "range submitted with max < min");
            let reason = FormError::InvalidRanges;
            let (display, detail) = match &self.placeholder {
                Some(markup) => (
                    DisplayUpdate::Placeholder(markup.clone()),
                    "Reverted to placeholder table.",
                ),
                None => (DisplayUpdate::Cleared, "No placeholder available."),
            };
            return Outcome {
                display,
                notice: Some(self.notice(format!("{} {}", reason, detail))),
            };
        }

        tracing::info!(?values, "range form accepted");
        Outcome::display(DisplayUpdate::from_build(build(
            values.column_min,
            values.column_max,
            values.row_min,
            values.row_max,
            &self.config.range_options(),
        )))
    }

    /// Count form submitted: resize the viewport and rebuild from its origin
    pub fn submit_counts(&mut self, form: &CountForm<'_>) -> Outcome {
        let (rows, columns) = match form.validate() {
            Ok(counts) => counts,
            Err(err) => return self.reject(err),
        };

        tracing::info!(rows, columns, "count form accepted");
        self.viewport.resize(columns, rows);
        self.current()
    }

    /// Key pressed: arrows pan by one and rebuild, other keys are ignored
    pub fn handle_key(&mut self, key: &str) -> Outcome {
        match ArrowKey::from_key_name(key) {
            Some(arrow) => self.pan(arrow),
            None => Outcome::unchanged(),
        }
    }

    /// Pan the viewport by one step and rebuild
    pub fn pan(&mut self, arrow: ArrowKey) -> Outcome {
        self.viewport.pan(arrow);
        tracing::debug!(
            key = arrow.key_name(),
            horizontal = self.viewport.horizontal,
            vertical = self.viewport.vertical,
            "viewport moved"
        );
        self.current()
    }

    /// Rebuild the viewport grid without moving it
    pub fn current(&self) -> Outcome {
        let result = self.viewport_grid(&self.config.viewport_options());
        Outcome::display(DisplayUpdate::from_build(result))
    }

    fn viewport_grid(&self, options: &TableOptions) -> Result<Grid, BuildError> {
        build_ranges(
            self.viewport.column_range(),
            self.viewport.row_range(),
            options,
        )
    }

    fn reject(&self, err: FormError) -> Outcome {
        tracing::warn!(%err, "form rejected");
        Outcome {
            display: DisplayUpdate::Unchanged,
            notice: Some(self.notice(err.to_string())),
        }
    }

    fn notice(&self, message: String) -> Notice {
        Notice {
            message,
            timeout_ms: self.config.notice_timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Range;
    use pretty_assertions::assert_eq;

    const PLACEHOLDER: &str = "<table class=\"multiplicationTable\"></table>";

    fn table(outcome: &Outcome) -> &Grid {
        match &outcome.display {
            DisplayUpdate::Table(grid) => grid,
            other => panic!("expected a table, got {:?}", other),
        }
    }

    #[test]
    fn test_range_submit_builds_inclusive() {
        let app = TableApp::default();
        let outcome = app.submit_range(&RangeForm::from_text("2", "4", "3", "5"));
        let grid = table(&outcome);
        assert_eq!(grid.column_headers(), &[2, 3, 4]);
        assert_eq!(grid.row_headers(), vec![3, 4, 5]);
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_range_submit_reports_invalid_fields() {
        let app = TableApp::default().with_placeholder(PLACEHOLDER);
        let outcome = app.submit_range(&RangeForm::from_text("", "4", "abc", "5"));
        assert_eq!(outcome.display, DisplayUpdate::Unchanged);
        assert_eq!(
            outcome.notice,
            Some(Notice {
                message: "Please enter valid numbers for: minimumColumnValue, minimumRowValue"
                    .to_string(),
                timeout_ms: 3000,
            })
        );
    }

    #[test]
    fn test_reversed_range_reverts_to_placeholder() {
        let app = TableApp::default().with_placeholder(PLACEHOLDER);
        let outcome = app.submit_range(&RangeForm::from_text("5", "1", "1", "5"));
        assert_eq!(
            outcome.display,
            DisplayUpdate::Placeholder(PLACEHOLDER.to_string())
        );
        assert_eq!(
            outcome.notice.unwrap().message,
            "Invalid ranges (max < min). Reverted to placeholder table."
        );
    }

    #[test]
    fn test_reversed_range_without_placeholder_clears() {
        let app = TableApp::default();
        let outcome = app.submit_range(&RangeForm::from_text("1", "5", "9", "2"));
        assert_eq!(outcome.display, DisplayUpdate::Cleared);
        assert_eq!(outcome.display.to_html(), Some(String::new()));
        assert_eq!(
            outcome.notice.unwrap().message,
            "Invalid ranges (max < min). No placeholder available."
        );
    }

    #[test]
    fn test_range_too_large_is_diagnostic() {
        let config = AppConfig {
            max_cells: 4,
            ..AppConfig::default()
        };
        let app = TableApp::new(config);
        let outcome = app.submit_range(&RangeForm::from_text("1", "3", "1", "3"));
        assert!(matches!(
            outcome.display,
            DisplayUpdate::Diagnostic(BuildError::TooLarge { cells: 9, limit: 4 })
        ));
    }

    #[test]
    fn test_arrow_right_moves_columns() {
        let mut app = TableApp::default();
        let before = app.current();
        let outcome = app.handle_key("ArrowRight");

        assert_eq!(table(&before).columns(), Range { min: 0, max: 10 });
        let grid = table(&outcome);
        assert_eq!(grid.columns(), Range { min: 1, max: 11 });
        assert_eq!(grid.row_range(), table(&before).row_range());
        assert_eq!(grid.column_headers().first(), Some(&1));
        assert_eq!(grid.column_count(), 10);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut app = TableApp::default();
        let outcome = app.handle_key("Enter");
        assert_eq!(outcome, Outcome::unchanged());
        assert_eq!(*app.viewport(), ViewportState::default());
    }

    #[test]
    fn test_arrow_up_decrements_rows() {
        let mut app = TableApp::default();
        let outcome = app.handle_key("ArrowUp");
        assert_eq!(table(&outcome).row_headers().first(), Some(&-1));
        assert_eq!(app.viewport().vertical, -1);
    }

    #[test]
    fn test_count_submit_resizes_viewport() {
        let mut app = TableApp::default();
        app.handle_key("ArrowDown");
        let outcome = app.submit_counts(&CountForm::from_text("3", "2"));
        let grid = table(&outcome);
        assert_eq!(grid.row_headers(), vec![1, 2, 3]);
        assert_eq!(grid.column_headers(), &[0, 1]);
        assert_eq!(app.viewport().height, 3);
        assert_eq!(app.viewport().width, 2);
    }

    #[test]
    fn test_fractional_count_gives_empty_axis() {
        let mut app = TableApp::default();
        let outcome = app.submit_counts(&CountForm::from_text("0.5", "3"));
        assert_eq!(outcome.notice, None);
        let grid = table(&outcome);
        assert_eq!(grid.row_count(), 0);
        assert!(grid.rows().is_empty());
        assert_eq!(grid.column_headers(), &[0, 1, 2]);
        assert_eq!(app.viewport().height, 0);
        assert_eq!(app.viewport().width, 3);
    }

    #[test]
    fn test_count_submit_rejects_non_positive() {
        let mut app = TableApp::default();
        let outcome = app.submit_counts(&CountForm::from_text("0", "2"));
        assert_eq!(outcome.display, DisplayUpdate::Unchanged);
        assert_eq!(
            outcome.notice.unwrap().message,
            "Row and column counts must be positive."
        );
        assert_eq!(*app.viewport(), ViewportState::default());
    }

    #[test]
    fn test_notice_timeout_from_config() {
        let config = AppConfig {
            notice_timeout_ms: 750,
            ..AppConfig::default()
        };
        let mut app = TableApp::new(config);
        let outcome = app.submit_counts(&CountForm::from_text("x", "2"));
        assert_eq!(outcome.notice.unwrap().timeout_ms, 750);
    }

    #[test]
    fn test_display_kinds() {
        assert_eq!(DisplayUpdate::Unchanged.kind(), "unchanged");
        assert_eq!(DisplayUpdate::Unchanged.to_html(), None);
        assert_eq!(
            DisplayUpdate::Diagnostic(BuildError::NonFinite).to_html(),
            Some("<div>Invalid range values</div>".to_string())
        );
    }
}
