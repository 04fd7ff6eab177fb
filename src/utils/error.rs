//! Error handling for multab
//!
//! Every error here is local and recoverable: build errors turn into a
//! diagnostic placeholder, form errors into a transient notice.

use thiserror::Error;

/// Failure while building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// One of the bounds is NaN or infinite after coercion
    #[error("Invalid range values")]
    NonFinite,
    /// A bound is finite but too large to enumerate exactly
    #[error("Range value {value} is too large")]
    OutOfRange { value: i64 },
    /// The grid would hold more cells than allowed
    #[error("Table too large: {cells} cells (limit {limit})")]
    TooLarge { cells: u64, limit: u64 },
}

/// Rejected form submission
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Fields whose raw text is not a finite number, in form order
    #[error("Please enter valid numbers for: {}", .0.join(", "))]
    InvalidFields(Vec<&'static str>),
    /// `max < min` on at least one axis
    #[error("Invalid ranges (max < min).")]
    InvalidRanges,
    /// A row or column count below one
    #[error("Row and column counts must be positive.")]
    NonPositiveCount,
}

/// Failure loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "config-file")]
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
