//! Python bindings for multab

use multab::{RawValue, TableOptions};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyString;

fn options(inclusive: bool) -> TableOptions {
    if inclusive {
        TableOptions::range_mode()
    } else {
        TableOptions::viewport_mode()
    }
}

/// Validate a form value; returns the finite number or None
#[pyfunction]
#[pyo3(signature = (value))]
fn validate(value: Option<&Bound<'_, PyAny>>) -> PyResult<Option<f64>> {
    let Some(value) = value else {
        return Ok(multab::validate(RawValue::Absent));
    };
    if let Ok(text) = value.downcast::<PyString>() {
        return Ok(multab::validate(text.to_str()?));
    }
    if let Ok(number) = value.extract::<f64>() {
        return Ok(multab::validate(number));
    }
    let text = value.str()?;
    Ok(multab::validate(text.to_str()?))
}

/// Build a table as `(column_headers, [(row_header, cells), ...])`
#[pyfunction]
#[pyo3(signature = (col_min, col_max, row_min, row_max, inclusive = true))]
fn build_table(
    col_min: f64,
    col_max: f64,
    row_min: f64,
    row_max: f64,
    inclusive: bool,
) -> PyResult<(Vec<i64>, Vec<(i64, Vec<i128>)>)> {
    let grid = multab::build(col_min, col_max, row_min, row_max, &options(inclusive))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let rows = grid
        .rows()
        .iter()
        .map(|row| (row.label, row.cells.clone()))
        .collect();
    Ok((grid.column_headers().to_vec(), rows))
}

/// Render a table as HTML; invalid bounds give the diagnostic placeholder
#[pyfunction]
#[pyo3(signature = (col_min, col_max, row_min, row_max, inclusive = true))]
fn render_html(
    col_min: f64,
    col_max: f64,
    row_min: f64,
    row_max: f64,
    inclusive: bool,
) -> String {
    multab::build_table_html(col_min, col_max, row_min, row_max, &options(inclusive))
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(build_table, m)?)?;
    m.add_function(wrap_pyfunction!(render_html, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
