//! Error types for configuration loading.

use std::path::PathBuf;

/// Result type for configuration loading operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a gateway service configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    ///
    /// Carries the path that was requested so callers can report which file
    /// was at fault.
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        /// Path of the configuration file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The contents are not valid JSON or do not match the service layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use gateway_postman_config::{ConfigError, ServiceConfig};
    ///
    /// let result = ServiceConfig::from_json("{not json");
    /// assert!(matches!(result, Err(ConfigError::Parse { .. })));
    /// ```
    #[error("Invalid configuration JSON: {source}")]
    Parse {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Returns `true` if the error came from reading the file rather than
    /// decoding its contents.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Returns `true` if the error came from decoding the JSON contents.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
