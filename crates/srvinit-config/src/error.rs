//! Error types for settings resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
    /// The settings document could not be read.
    #[error("failed to read settings document {}", path.display())]
    Read {
        /// Path of the settings document.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The settings document was not valid JSON for the settings schema.
    #[error("failed to parse settings document {}", path.display())]
    Parse {
        /// Path of the settings document.
        path: PathBuf,
        /// Underlying serde error.
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(
        field: &'static str,
        reason: &'static str,
        value: impl Into<Option<String>>,
    ) -> Self {
        Self::InvalidField {
            field,
            reason,
            value: value.into(),
        }
    }
}
