//! Utility modules
//!
//! - Error types
//! - Configuration
//! - Logging setup for the front-ends

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used items
pub use config::{AppConfig, DEFAULT_NOTICE_TIMEOUT_MS};
pub use error::{BuildError, ConfigError, FormError};
