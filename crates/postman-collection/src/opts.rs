//! The `documentation/postman` options namespace.
//!
//! Service and endpoint configurations may carry documentation metadata
//! under the [`NAMESPACE`] key of their `extra_config`. The two levels are
//! read with different tolerance:
//!
//! - Service options are lenient about absence: configurations that predate
//!   the namespace get defaults without complaint. A block that is present
//!   but malformed is an error the assembler downgrades to a warning.
//! - Endpoint options distinguish "not applicable" (`Ok(None)`) from
//!   "malformed" (`Err`) so callers cannot confuse the two. The assembler
//!   treats both as absent, logging the latter.

use gateway_postman_config::{EndpointConfig, ServiceConfig};
use serde::Deserialize;

use crate::collection::Version;
use crate::error::{OptionsError, VersionError};

/// `extra_config` namespace inspected for documentation metadata.
pub const NAMESPACE: &str = "documentation/postman";

/// Description used when the service options do not provide one.
pub const DEFAULT_DESCRIPTION: &str = "Collection parsed from the gateway configuration";

/// Resolved service-level documentation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Collection title. Defaults to the service name.
    pub name: String,

    /// Collection description. Defaults to [`DEFAULT_DESCRIPTION`].
    pub description: String,

    /// Raw semantic version string, if the service declared one.
    pub version: Option<String>,

    /// Folder metadata records, in declaration order.
    pub folders: Vec<FolderOptions>,
}

/// Wire shape of the service-level block. Absent fields keep their
/// defaults, mirroring decode-into-prefilled-struct semantics.
#[derive(Debug, Default, Deserialize)]
struct RawServiceOptions {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    folder: Option<Vec<FolderOptions>>,
}

impl ServiceOptions {
    /// Returns the options used when the service declares none.
    #[must_use]
    pub fn defaults(cfg: &ServiceConfig) -> Self {
        Self {
            name: cfg.name.clone(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            version: None,
            folders: Vec::new(),
        }
    }

    /// Reads the service options out of the configuration.
    ///
    /// An absent or non-object namespace value yields [`Self::defaults`]
    /// without complaint. Fields not present in the block keep their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Service`] when the block is an object that
    /// does not decode. Callers are expected to downgrade this to a warning
    /// and continue with defaults.
    pub fn parse(cfg: &ServiceConfig) -> Result<Self, OptionsError> {
        let Some(value) = cfg.extra_config.get(NAMESPACE) else {
            return Ok(Self::defaults(cfg));
        };
        if !value.is_object() {
            return Ok(Self::defaults(cfg));
        }

        let raw: RawServiceOptions = serde_json::from_value(value.clone())
            .map_err(|source| OptionsError::Service { source })?;

        Ok(Self {
            name: raw.name.unwrap_or_else(|| cfg.name.clone()),
            description: raw
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
            version: raw.version,
            folders: raw.folder.unwrap_or_default(),
        })
    }

    /// Looks up folder metadata for a raw folder path.
    ///
    /// Matching is by raw string identity against each record's `name` key,
    /// and the first matching record wins. There is no normalization:
    /// `/a/b`, `a/b` and `/a/b/` are three distinct keys even though they
    /// tokenize to the same folder chain. Metadata must be keyed with the
    /// exact string the endpoints use.
    ///
    /// # Examples
    ///
    /// ```
    /// use gateway_postman_collection::opts::{FolderOptions, ServiceOptions};
    ///
    /// let opts = ServiceOptions {
    ///     name: "sample".to_owned(),
    ///     description: String::new(),
    ///     version: None,
    ///     folders: vec![FolderOptions {
    ///         name: "/a/b".to_owned(),
    ///         description: Some("docs".to_owned()),
    ///     }],
    /// };
    ///
    /// assert!(opts.folder_options("/a/b").is_some());
    /// assert!(opts.folder_options("a/b").is_none());
    /// ```
    #[must_use]
    pub fn folder_options(&self, raw_path: &str) -> Option<&FolderOptions> {
        self.folders.iter().find(|folder| folder.name == raw_path)
    }
}

/// Metadata record describing one folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FolderOptions {
    /// Raw folder path this record applies to, matched exactly.
    #[serde(default)]
    pub name: String,

    /// Description copied onto the folder node when it is created.
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-endpoint documentation options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EndpointOptions {
    /// Display name overriding the route identifier.
    #[serde(default)]
    pub name: Option<String>,

    /// Request description.
    #[serde(default)]
    pub description: Option<String>,

    /// Raw target folder path.
    #[serde(default)]
    pub folder: Option<String>,
}

impl EndpointOptions {
    /// Reads the endpoint options out of an endpoint configuration.
    ///
    /// Returns `Ok(None)` when the namespace is absent or not an object,
    /// meaning the endpoint simply has no documentation metadata.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Endpoint`] when the block is an object that
    /// does not decode, identifying the endpoint by method and route.
    pub fn parse(endpoint: &EndpointConfig) -> Result<Option<Self>, OptionsError> {
        let Some(value) = endpoint.extra_config.get(NAMESPACE) else {
            return Ok(None);
        };
        if !value.is_object() {
            return Ok(None);
        }

        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|source| OptionsError::Endpoint {
                method: endpoint.method.clone(),
                endpoint: endpoint.endpoint.clone(),
                source,
            })
    }

    /// Returns the folder path when it actually targets a folder.
    ///
    /// Empty strings and the root alias `/` mean "place at the root" and
    /// yield `None`.
    #[must_use]
    pub fn folder_path(&self) -> Option<&str> {
        self.folder
            .as_deref()
            .filter(|folder| !folder.is_empty() && *folder != "/")
    }

    /// Display name override, ignoring explicit empty strings.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Request description, ignoring explicit empty strings.
    #[must_use]
    pub fn request_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
    }
}

/// Parses a service version string into document version components.
///
/// Accepts the forms real configurations carry: an optional `v` prefix and
/// pre-release or build suffixes (`1.2.3-beta.1`, `2.0.0+build5`). The core
/// must be exactly `major.minor.patch` with numeric parts; shorter forms
/// like `1.2` are rejected rather than zero-filled.
///
/// # Errors
///
/// Returns a [`VersionError`] carrying the rejected string.
///
/// # Examples
///
/// ```
/// use gateway_postman_collection::opts::parse_version;
///
/// let version = parse_version("v1.2.3-beta.1")?;
/// assert_eq!((version.major, version.minor, version.patch), (1, 2, 3));
///
/// assert!(parse_version("not-a-version").is_err());
/// # Ok::<(), gateway_postman_collection::VersionError>(())
/// ```
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    let error = || VersionError {
        value: version.to_owned(),
    };

    let trimmed = version.strip_prefix('v').unwrap_or(version);
    let core = trimmed.split_once('-').map_or(trimmed, |(core, _)| core);
    let core = core.split_once('+').map_or(core, |(core, _)| core);

    let mut parts = core.split('.');
    let (Some(major), Some(minor), Some(patch), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(error());
    };

    Ok(Version {
        major: parse_part(major).ok_or_else(error)?,
        minor: parse_part(minor).ok_or_else(error)?,
        patch: parse_part(patch).ok_or_else(error)?,
    })
}

fn parse_part(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
