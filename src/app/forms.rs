//! Form payloads
//!
//! Field names are the `name` attributes of the page's inputs; they are also
//! what invalid-input notices list.

use crate::core::validate::{validate, RawValue};
use crate::utils::error::FormError;

pub const MINIMUM_COLUMN_VALUE: &str = "minimumColumnValue";
pub const MAXIMUM_COLUMN_VALUE: &str = "maximumColumnValue";
pub const MINIMUM_ROW_VALUE: &str = "minimumRowValue";
pub const MAXIMUM_ROW_VALUE: &str = "maximumRowValue";

pub const ROW_COUNT: &str = "rowCount";
pub const COLUMN_COUNT: &str = "columnCount";

/// Range form fields, in form order
pub const RANGE_FIELDS: [&str; 4] = [
    MINIMUM_COLUMN_VALUE,
    MAXIMUM_COLUMN_VALUE,
    MINIMUM_ROW_VALUE,
    MAXIMUM_ROW_VALUE,
];

/// Count form fields, in form order
pub const COUNT_FIELDS: [&str; 2] = [ROW_COUNT, COLUMN_COUNT];

/// Raw values of the range form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeForm<'a> {
    pub minimum_column_value: RawValue<'a>,
    pub maximum_column_value: RawValue<'a>,
    pub minimum_row_value: RawValue<'a>,
    pub maximum_row_value: RawValue<'a>,
}

/// Validated range form, still in user order (no swapping yet)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValues {
    pub column_min: f64,
    pub column_max: f64,
    pub row_min: f64,
    pub row_max: f64,
}

impl RangeValues {
    /// Whether either axis has `max < min`
    pub fn is_reversed(&self) -> bool {
        self.column_max < self.column_min || self.row_max < self.row_min
    }
}

impl<'a> RangeForm<'a> {
    /// Build from text in `(colMin, colMax, rowMin, rowMax)` order
    pub fn from_text(
        col_min: &'a str,
        col_max: &'a str,
        row_min: &'a str,
        row_max: &'a str,
    ) -> Self {
        Self {
            minimum_column_value: col_min.into(),
            maximum_column_value: col_max.into(),
            minimum_row_value: row_min.into(),
            maximum_row_value: row_max.into(),
        }
    }

    /// Build by asking `lookup` for each field name, like reading `FormData`
    pub fn from_lookup(mut lookup: impl FnMut(&'static str) -> RawValue<'a>) -> Self {
        Self {
            minimum_column_value: lookup(MINIMUM_COLUMN_VALUE),
            maximum_column_value: lookup(MAXIMUM_COLUMN_VALUE),
            minimum_row_value: lookup(MINIMUM_ROW_VALUE),
            maximum_row_value: lookup(MAXIMUM_ROW_VALUE),
        }
    }

    /// Validate all four fields, reporting every invalid one
    pub fn validate(&self) -> Result<RangeValues, FormError> {
        let values = [
            self.minimum_column_value,
            self.maximum_column_value,
            self.minimum_row_value,
            self.maximum_row_value,
        ]
        .map(|raw| validate(raw));

        match values {
            [Some(column_min), Some(column_max), Some(row_min), Some(row_max)] => {
                Ok(RangeValues {
                    column_min,
                    column_max,
                    row_min,
                    row_max,
                })
            }
            _ => Err(invalid_fields(&RANGE_FIELDS, &values)),
        }
    }
}

/// Raw values of the count form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountForm<'a> {
    pub row_count: RawValue<'a>,
    pub column_count: RawValue<'a>,
}

impl<'a> CountForm<'a> {
    pub fn from_text(rows: &'a str, columns: &'a str) -> Self {
        Self {
            row_count: rows.into(),
            column_count: columns.into(),
        }
    }

    pub fn from_lookup(mut lookup: impl FnMut(&'static str) -> RawValue<'a>) -> Self {
        Self {
            row_count: lookup(ROW_COUNT),
            column_count: lookup(COLUMN_COUNT),
        }
    }

    /// Validate both counts into `(rows, columns)`.
    ///
    /// Counts must be greater than zero and are then truncated toward zero,
    /// so a fractional count below one gives an empty axis.
    pub fn validate(&self) -> Result<(u32, u32), FormError> {
        let values = [self.row_count, self.column_count].map(|raw| validate(raw));
        let [Some(rows), Some(columns)] = values else {
            return Err(invalid_fields(&COUNT_FIELDS, &values));
        };

        if rows <= 0.0 || columns <= 0.0 {
            return Err(FormError::NonPositiveCount);
        }

        // Float-to-int `as` truncates and saturates at u32::MAX
        Ok((rows as u32, columns as u32))
    }
}

fn invalid_fields(names: &[&'static str], values: &[Option<f64>]) -> FormError {
    FormError::InvalidFields(
        names
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect(),
    )
}
