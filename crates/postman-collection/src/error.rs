//! Error and warning types for collection generation.
//!
//! Conversion degrades gracefully: malformed options and version strings
//! become [`ParseWarning`]s and the document is still produced. The only
//! fatal condition is [`ParseError::MissingFolder`], which signals that the
//! two build phases disagreed about the folder skeleton.

use thiserror::Error;

/// Result type for collection generation operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Fatal errors that abort collection generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An endpoint referenced a folder path that the skeleton phase never
    /// created.
    ///
    /// The skeleton phase processes every referenced path before placement
    /// starts, so a lookup miss means the two phases disagree and the
    /// output would drop the endpoint. This is an internal-consistency
    /// failure, never silently swallowed.
    #[error("internal consistency failure: folder `{path}` was not created during the skeleton phase")]
    MissingFolder {
        /// Raw folder path, as written in the endpoint options.
        path: String,
    },
}

/// Non-fatal problems found while interpreting a configuration.
///
/// Warnings accompany a complete document; nothing was aborted.
#[derive(Error, Debug)]
pub enum ParseWarning {
    /// The service-level options block could not be interpreted; defaults
    /// were used instead.
    #[error(transparent)]
    ServiceOptions(#[from] OptionsError),

    /// The service version string was rejected; the version field was
    /// omitted from the document.
    #[error(transparent)]
    Version(#[from] VersionError),
}

impl ParseWarning {
    /// Returns `true` when the warning concerns the service options block.
    #[must_use]
    pub const fn is_service_options(&self) -> bool {
        matches!(self, Self::ServiceOptions(_))
    }

    /// Returns `true` when the warning concerns the version string.
    ///
    /// # Examples
    ///
    /// ```
    /// use gateway_postman_collection::{ParseWarning, VersionError};
    ///
    /// let warning = ParseWarning::from(VersionError { value: "meh".to_owned() });
    /// assert!(warning.is_version());
    /// ```
    #[must_use]
    pub const fn is_version(&self) -> bool {
        matches!(self, Self::Version(_))
    }
}

/// Errors decoding a `documentation/postman` options block.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The service-level block is present but not of the expected shape.
    #[error("invalid service config: {source}")]
    Service {
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// An endpoint-level block is present but not of the expected shape.
    #[error("invalid endpoint config: {method} {endpoint}: {source}")]
    Endpoint {
        /// HTTP method of the endpoint whose block was malformed
        method: String,
        /// Route of the endpoint whose block was malformed
        endpoint: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

impl OptionsError {
    /// Returns `true` for malformed service-level blocks.
    #[must_use]
    pub const fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Returns `true` for malformed endpoint-level blocks.
    #[must_use]
    pub const fn is_endpoint(&self) -> bool {
        matches!(self, Self::Endpoint { .. })
    }
}

/// Error returned when a version string is not `major.minor.patch`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("the provided version is not in semver format: `{value}`")]
pub struct VersionError {
    /// The rejected version string.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<i32>("\"not a number\"").unwrap_err()
    }

    #[test]
    fn test_missing_folder_display() {
        let error = ParseError::MissingFolder {
            path: "/a/b".to_owned(),
        };

        let display = format!("{}", error);
        assert!(display.contains("internal consistency failure"));
        assert!(display.contains("/a/b"));
    }

    #[test]
    fn test_service_options_warning_display() {
        let warning = ParseWarning::from(OptionsError::Service {
            source: decode_error(),
        });

        let display = format!("{}", warning);
        assert!(display.contains("invalid service config"));
        assert!(warning.is_service_options());
        assert!(!warning.is_version());
    }

    #[test]
    fn test_endpoint_options_display() {
        let error = OptionsError::Endpoint {
            method: "GET".to_owned(),
            endpoint: "/foo".to_owned(),
            source: decode_error(),
        };

        let display = format!("{}", error);
        assert!(display.contains("invalid endpoint config"));
        assert!(display.contains("GET /foo"));
        assert!(error.is_endpoint());
        assert!(!error.is_service());
    }

    #[test]
    fn test_version_warning_display() {
        let warning = ParseWarning::from(VersionError {
            value: "not-a-version".to_owned(),
        });

        let display = format!("{}", warning);
        assert!(display.contains("not in semver format"));
        assert!(display.contains("not-a-version"));
        assert!(warning.is_version());
    }

    #[test]
    fn test_warning_source_chain() {
        use std::error::Error;

        let warning = ParseWarning::from(OptionsError::Service {
            source: decode_error(),
        });
        // transparent: the source chain goes through the options error.
        assert!(warning.source().is_some());
    }
}
