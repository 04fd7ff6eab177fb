//! Application configuration
//!
//! Defaults match the browser page: a 10×10 viewport at the origin, notices
//! that disappear after three seconds and no cap on grid size.
//!
//! With the `config-file` feature the same settings can be read from TOML:
//!
//! ```toml
//! notice_timeout_ms = 5000
//! max_cells = 1000000      # 0 disables the guard
//!
//! [initial_viewport]
//! width = 12
//! height = 8
//! ```

use crate::core::grid::TableOptions;
use crate::core::viewport::ViewportState;

#[cfg(feature = "config-file")]
use crate::utils::error::ConfigError;

/// Default lifetime of a transient notice
pub const DEFAULT_NOTICE_TIMEOUT_MS: u64 = 3000;

/// Settings shared by every front-end
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppConfig {
    /// How long the host should keep a notice on screen; 0 keeps it until replaced
    pub notice_timeout_ms: u64,
    /// Largest grid body allowed; 0 means unlimited
    pub max_cells: u64,
    /// Viewport state at startup
    pub initial_viewport: ViewportState,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            max_cells: 0,
            initial_viewport: ViewportState::default(),
        }
    }
}

impl AppConfig {
    /// Options for the range form (inclusive bounds)
    pub fn range_options(&self) -> TableOptions {
        TableOptions {
            max_cells: self.cell_limit(),
            ..TableOptions::range_mode()
        }
    }

    /// Options for the panning viewport (exclusive bounds)
    pub fn viewport_options(&self) -> TableOptions {
        TableOptions {
            max_cells: self.cell_limit(),
            ..TableOptions::viewport_mode()
        }
    }

    fn cell_limit(&self) -> Option<u64> {
        (self.max_cells > 0).then_some(self.max_cells)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from a TOML file
    #[cfg(feature = "config-file")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
