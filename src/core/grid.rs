//! Multiplication grid builder
//!
//! Normalizes four numeric bounds into an ascending integer rectangle and
//! produces the header labels and cell products for it.
//!
//! # Example
//!
//! ```rust
//! use multab::core::grid::{build, TableOptions};
//!
//! let grid = build(2.0, 4.0, 3.0, 5.0, &TableOptions::range_mode()).unwrap();
//! assert_eq!(grid.column_labels(), vec!["2", "3", "4"]);
//! assert_eq!(grid.cell(3, 2), Some(6));
//! assert_eq!(grid.cell(5, 4), Some(20));
//! ```

use crate::utils::error::BuildError;

/// Largest integer magnitude a bound may have (`2^53 - 1`), the range in which
/// every integer has an exact `f64` representation.
pub const MAX_BOUND: i64 = (1 << 53) - 1;

/// Whether a range's upper endpoint is enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundMode {
    /// `min..=max`
    #[default]
    Inclusive,
    /// `min..max`
    Exclusive,
}

/// Options controlling how a grid is built
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableOptions {
    /// Bound inclusivity applied to both axes
    pub bounds: BoundMode,
    /// Refuse to build grids with more body cells than this; `None` builds any size
    pub max_cells: Option<u64>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::range_mode()
    }
}

impl TableOptions {
    /// Preset used by the range form: both endpoints are shown
    pub fn range_mode() -> Self {
        Self {
            bounds: BoundMode::Inclusive,
            max_cells: None,
        }
    }

    /// Preset used by the panning viewport: `[offset, offset + count)`
    pub fn viewport_mode() -> Self {
        Self {
            bounds: BoundMode::Exclusive,
            max_cells: None,
        }
    }

    /// Refuse grids whose body exceeds `limit` cells
    pub fn with_cell_limit(mut self, limit: u64) -> Self {
        self.max_cells = Some(limit);
        self
    }

    /// Disable the cell-count guard
    pub fn unbounded(mut self) -> Self {
        self.max_cells = None;
        self
    }
}

/// One axis of the grid. After construction through [`Range::normalized`],
/// `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    /// Build a range from two endpoints given in either order
    pub fn normalized(a: i64, b: i64) -> Self {
        if a > b {
            Range { min: b, max: a }
        } else {
            Range { min: a, max: b }
        }
    }

    /// Number of labels this range enumerates under `mode`
    pub fn len(&self, mode: BoundMode) -> u64 {
        let span = self.max.abs_diff(self.min);
        match mode {
            BoundMode::Inclusive => span.saturating_add(1),
            BoundMode::Exclusive => span,
        }
    }

    /// Whether the range enumerates nothing under `mode`
    pub fn is_empty(&self, mode: BoundMode) -> bool {
        self.len(mode) == 0
    }

    /// Iterate the labels of this range in ascending order
    pub fn values(&self, mode: BoundMode) -> impl Iterator<Item = i64> {
        let (min, max) = (self.min, self.max);
        let upper = match mode {
            BoundMode::Inclusive => Some(max),
            BoundMode::Exclusive => (min < max).then(|| max - 1),
        };
        upper.into_iter().flat_map(move |upper| min..=upper)
    }
}

/// A body row: its label plus one product per column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRow {
    pub label: i64,
    pub cells: Vec<i128>,
}

/// A built multiplication grid
///
/// Immutable once built. Callers replace a displayed grid wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    columns: Range,
    rows_range: Range,
    bounds: BoundMode,
    column_headers: Vec<i64>,
    rows: Vec<GridRow>,
}

impl Grid {
    /// Normalized column range the grid was built from
    pub fn columns(&self) -> Range {
        self.columns
    }

    /// Normalized row range the grid was built from
    pub fn row_range(&self) -> Range {
        self.rows_range
    }

    /// Bound mode the grid was built with
    pub fn bounds(&self) -> BoundMode {
        self.bounds
    }

    /// Column header values, in display order
    pub fn column_headers(&self) -> &[i64] {
        &self.column_headers
    }

    /// Body rows, in display order
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Row header values, in display order
    pub fn row_headers(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.label).collect()
    }

    /// Column header labels as decimal strings
    pub fn column_labels(&self) -> Vec<String> {
        self.column_headers.iter().map(i64::to_string).collect()
    }

    /// Row header labels as decimal strings
    pub fn row_labels(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.label.to_string()).collect()
    }

    /// Number of data columns
    pub fn column_count(&self) -> usize {
        self.column_headers.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Look up the product at row label `row`, column label `col`
    pub fn cell(&self, row: i64, col: i64) -> Option<i128> {
        let r = self.rows.iter().position(|gr| gr.label == row)?;
        let c = self.column_headers.iter().position(|&h| h == col)?;
        self.rows[r].cells.get(c).copied()
    }
}

/// Build a grid from four bounds.
///
/// Each bound is truncated toward zero. Reversed pairs are swapped, so
/// `build(5, 1, 5, 1)` equals `build(1, 5, 1, 5)`.
pub fn build(
    col_min: f64,
    col_max: f64,
    row_min: f64,
    row_max: f64,
    options: &TableOptions,
) -> Result<Grid, BuildError> {
    let [col_min, col_max, row_min, row_max] =
        [col_min, col_max, row_min, row_max].map(f64::trunc);

    tracing::debug!(col_min, col_max, row_min, row_max, "building table");

    if ![col_min, col_max, row_min, row_max]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(BuildError::NonFinite);
    }

    let columns = Range::normalized(to_bound(col_min)?, to_bound(col_max)?);
    let rows = Range::normalized(to_bound(row_min)?, to_bound(row_max)?);

    build_ranges(columns, rows, options)
}

/// Build with [`TableOptions::range_mode`]
pub fn build_inclusive(
    col_min: f64,
    col_max: f64,
    row_min: f64,
    row_max: f64,
) -> Result<Grid, BuildError> {
    build(col_min, col_max, row_min, row_max, &TableOptions::range_mode())
}

/// Build with [`TableOptions::viewport_mode`]
pub fn build_exclusive(
    col_min: f64,
    col_max: f64,
    row_min: f64,
    row_max: f64,
) -> Result<Grid, BuildError> {
    build(
        col_min,
        col_max,
        row_min,
        row_max,
        &TableOptions::viewport_mode(),
    )
}

/// Build a grid from already-normalized integer ranges
pub fn build_ranges(
    columns: Range,
    rows: Range,
    options: &TableOptions,
) -> Result<Grid, BuildError> {
    for value in [columns.min, columns.max, rows.min, rows.max] {
        if value.unsigned_abs() > MAX_BOUND as u64 {
            return Err(BuildError::OutOfRange { value });
        }
    }

    let mode = options.bounds;
    if let Some(limit) = options.max_cells {
        let cells = columns.len(mode).saturating_mul(rows.len(mode));
        if cells > limit {
            return Err(BuildError::TooLarge { cells, limit });
        }
    }

    let column_headers: Vec<i64> = columns.values(mode).collect();
    let body = rows
        .values(mode)
        .map(|r| GridRow {
            label: r,
            cells: column_headers
                .iter()
                .map(|&c| i128::from(r) * i128::from(c))
                .collect(),
        })
        .collect();

    Ok(Grid {
        columns,
        rows_range: rows,
        bounds: mode,
        column_headers,
        rows: body,
    })
}

fn to_bound(value: f64) -> Result<i64, BuildError> {
    if value.abs() > MAX_BOUND as f64 {
        // The value is integral and finite here; report it clamped to i64
        return Err(BuildError::OutOfRange {
            value: value as i64,
        });
    }
    Ok(value as i64)
}
