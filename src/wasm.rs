//! WASM bindings for multab
//!
//! The page's JavaScript keeps the DOM: it reads form fields and key names,
//! hands them to a [`TablePage`], and applies the returned update (new
//! container markup plus an optional notice).

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{
    app::{CountForm, Outcome, RangeForm, TableApp},
    core::validate::{validate, RawValue},
    utils::config::AppConfig,
    BoundMode, TableOptions,
};

/// A form field as it arrives from JavaScript
#[cfg(feature = "wasm")]
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Number(f64),
    Text(String),
}

#[cfg(feature = "wasm")]
fn raw(field: &Option<FieldValue>) -> RawValue<'_> {
    match field {
        None => RawValue::Absent,
        Some(FieldValue::Number(n)) => RawValue::Number(*n),
        Some(FieldValue::Text(s)) => RawValue::Text(s),
    }
}

/// Range form fields (`Object.fromEntries(new FormData(form))`)
#[cfg(feature = "wasm")]
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RangeFields {
    minimum_column_value: Option<FieldValue>,
    maximum_column_value: Option<FieldValue>,
    minimum_row_value: Option<FieldValue>,
    maximum_row_value: Option<FieldValue>,
}

/// Count form fields
#[cfg(feature = "wasm")]
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct CountFields {
    row_count: Option<FieldValue>,
    column_count: Option<FieldValue>,
}

/// Update handed back to the page after every event
#[cfg(feature = "wasm")]
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    /// `unchanged`, `table`, `placeholder`, `cleared` or `diagnostic`
    pub kind: &'static str,
    /// New container markup; absent when the container is left alone
    pub html: Option<String>,
    /// Notice text to show, replacing any current notice
    pub notice: Option<String>,
    /// Auto-dismiss delay for the notice
    pub timeout_ms: u64,
}

#[cfg(feature = "wasm")]
impl From<Outcome> for PageUpdate {
    fn from(outcome: Outcome) -> Self {
        let (notice, timeout_ms) = match outcome.notice {
            Some(notice) => (Some(notice.message), notice.timeout_ms),
            None => (None, 0),
        };
        PageUpdate {
            kind: outcome.display.kind(),
            html: outcome.display.to_html(),
            notice,
            timeout_ms,
        }
    }
}

#[cfg(feature = "wasm")]
fn to_js(outcome: Outcome) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PageUpdate::from(outcome)).map_err(JsValue::from)
}

/// Initialize panic hook and console logging
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    crate::utils::logging::init_web();
}

/// Validate a raw field value
///
/// # Returns
/// The finite number, or `undefined` when the value is not one
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "validateNumber")]
pub fn validate_number_wasm(value: JsValue) -> Option<f64> {
    if value.is_null() || value.is_undefined() {
        return validate(RawValue::Absent);
    }
    if let Some(n) = value.as_f64() {
        return validate(n);
    }
    value.as_string().and_then(|s| validate(s.as_str()))
}

/// Build a table and return its markup (or the diagnostic placeholder)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "buildTableHtml")]
pub fn build_table_html_wasm(
    col_min: f64,
    col_max: f64,
    row_min: f64,
    row_max: f64,
    inclusive: bool,
) -> String {
    let options = TableOptions {
        bounds: if inclusive {
            BoundMode::Inclusive
        } else {
            BoundMode::Exclusive
        },
        ..TableOptions::default()
    };
    crate::build_table_html(col_min, col_max, row_min, row_max, &options)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// One page session: viewport, placeholder snapshot and settings
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct TablePage {
    app: TableApp,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl TablePage {
    /// `placeholderHtml` is the table markup present at load time.
    /// `config` is an optional object with `AppConfig` fields.
    #[wasm_bindgen(constructor)]
    pub fn new(placeholder_html: Option<String>, config: JsValue) -> TablePage {
        let config: AppConfig = if config.is_undefined() || config.is_null() {
            AppConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).unwrap_or_default()
        };

        let app = TableApp::new(config);
        let app = match placeholder_html {
            Some(markup) => app.with_placeholder(markup),
            None => app,
        };
        TablePage { app }
    }

    #[wasm_bindgen(js_name = "submitRange")]
    pub fn submit_range(&self, fields: JsValue) -> Result<JsValue, JsValue> {
        let fields: RangeFields = serde_wasm_bindgen::from_value(fields).unwrap_or_default();
        let form = RangeForm {
            minimum_column_value: raw(&fields.minimum_column_value),
            maximum_column_value: raw(&fields.maximum_column_value),
            minimum_row_value: raw(&fields.minimum_row_value),
            maximum_row_value: raw(&fields.maximum_row_value),
        };
        to_js(self.app.submit_range(&form))
    }

    #[wasm_bindgen(js_name = "submitCounts")]
    pub fn submit_counts(&mut self, fields: JsValue) -> Result<JsValue, JsValue> {
        let fields: CountFields = serde_wasm_bindgen::from_value(fields).unwrap_or_default();
        let form = CountForm {
            row_count: raw(&fields.row_count),
            column_count: raw(&fields.column_count),
        };
        to_js(self.app.submit_counts(&form))
    }

    /// Handle `KeyboardEvent.key`; non-arrow keys yield `kind: "unchanged"`
    #[wasm_bindgen(js_name = "handleKey")]
    pub fn handle_key(&mut self, key: &str) -> Result<JsValue, JsValue> {
        to_js(self.app.handle_key(key))
    }

    /// Current viewport grid, for the first paint
    pub fn current(&self) -> Result<JsValue, JsValue> {
        to_js(self.app.current())
    }

    /// Current viewport offsets and size
    pub fn viewport(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.app.viewport()).map_err(JsValue::from)
    }
}
