//! Panning viewport over the infinite multiplication grid
//!
//! The viewport is a fixed-size window whose origin moves one step per arrow
//! key. Horizontal offset and width select columns; vertical offset and height
//! select rows. Bounds are half-open: `[offset, offset + size)`.

use super::grid::Range;

/// Default window size on both axes
pub const DEFAULT_SIZE: u32 = 10;

/// Arrow key that pans the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Map a DOM `KeyboardEvent.key` name; other keys are not arrows.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(ArrowKey::Up),
            "ArrowDown" => Some(ArrowKey::Down),
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }

    pub fn key_name(self) -> &'static str {
        match self {
            ArrowKey::Up => "ArrowUp",
            ArrowKey::Down => "ArrowDown",
            ArrowKey::Left => "ArrowLeft",
            ArrowKey::Right => "ArrowRight",
        }
    }

    /// `(horizontal, vertical)` step. Up moves toward smaller row labels.
    pub fn delta(self) -> (i64, i64) {
        match self {
            ArrowKey::Up => (0, -1),
            ArrowKey::Down => (0, 1),
            ArrowKey::Left => (-1, 0),
            ArrowKey::Right => (1, 0),
        }
    }
}

/// Origin and size of the visible window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportState {
    /// First visible column label
    pub horizontal: i64,
    /// First visible row label
    pub vertical: i64,
    /// Number of visible columns
    pub width: u32,
    /// Number of visible rows
    pub height: u32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            horizontal: 0,
            vertical: 0,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

impl ViewportState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Move the origin one step in the direction of `key`
    pub fn pan(&mut self, key: ArrowKey) {
        let (dx, dy) = key.delta();
        self.horizontal = self.horizontal.saturating_add(dx);
        self.vertical = self.vertical.saturating_add(dy);
    }

    /// Replace the window size, keeping the origin
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Visible column range, upper bound excluded
    pub fn column_range(&self) -> Range {
        Range {
            min: self.horizontal,
            max: self.horizontal.saturating_add(i64::from(self.width)),
        }
    }

    /// Visible row range, upper bound excluded
    pub fn row_range(&self) -> Range {
        Range {
            min: self.vertical,
            max: self.vertical.saturating_add(i64::from(self.height)),
        }
    }
}
