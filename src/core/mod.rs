//! Core table modules
//!
//! - `validate`: raw field value → finite number
//! - `grid`: bounds → normalized multiplication grid
//! - `viewport`: panning window over the infinite grid
//! - `render`: grid → HTML / text

pub mod grid;
pub mod render;
pub mod validate;
pub mod viewport;

pub use grid::{
    build, build_exclusive, build_inclusive, BoundMode, Grid, GridRow, Range, TableOptions,
};
pub use validate::{validate, RawValue, ValidatedNumber};
pub use viewport::{ArrowKey, ViewportState};
