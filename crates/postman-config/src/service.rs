//! Serde model of the gateway service configuration.
//!
//! Only the parts of the configuration that influence the generated Postman
//! document are modeled. Everything else is either ignored by serde or kept
//! opaque inside [`ExtraConfig`] until a consumer asks for its namespace.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Namespaced vendor extensions, keyed by namespace string.
///
/// Values are kept as raw JSON. Each consumer decodes its own namespace and
/// decides how to treat malformed content.
pub type ExtraConfig = HashMap<String, serde_json::Value>;

/// Top-level gateway service configuration.
///
/// # Examples
///
/// ```
/// use gateway_postman_config::ServiceConfig;
///
/// let config = ServiceConfig::from_json(r#"{
///     "name": "My service",
///     "port": 8080,
///     "endpoints": [{ "endpoint": "/users", "method": "GET" }]
/// }"#)?;
///
/// assert_eq!(config.name, "My service");
/// assert_eq!(config.endpoints.len(), 1);
/// assert_eq!(config.authority(), "localhost:8080");
/// # Ok::<(), gateway_postman_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// Service name, used as the collection title unless overridden.
    #[serde(default)]
    pub name: String,

    /// Interface the gateway binds to. Empty falls back to `localhost`.
    #[serde(default)]
    pub address: String,

    /// Port the gateway listens on.
    #[serde(default)]
    pub port: u16,

    /// TLS block. Its presence switches the advertised scheme to `https`
    /// unless the block is explicitly disabled.
    #[serde(default)]
    pub tls: Option<TlsConfig>,

    /// Declared endpoints, in declaration order.
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,

    /// Namespaced vendor extensions attached to the service.
    #[serde(default)]
    pub extra_config: ExtraConfig,
}

impl ServiceConfig {
    /// Loads a service configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents cannot be decoded.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Decodes a service configuration from a JSON string.
    ///
    /// Unknown fields are ignored, so a full gateway configuration file can
    /// be fed in unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the string is not valid JSON or
    /// does not match the service layout.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }

    /// Returns the `host:port` pair clients reach the service on.
    ///
    /// An empty `address` falls back to `localhost`. IPv6 literals are
    /// bracketed so the pair stays parseable.
    ///
    /// # Examples
    ///
    /// ```
    /// use gateway_postman_config::ServiceConfig;
    ///
    /// let config = ServiceConfig {
    ///     port: 8080,
    ///     ..ServiceConfig::default()
    /// };
    /// assert_eq!(config.authority(), "localhost:8080");
    ///
    /// let config = ServiceConfig {
    ///     address: "::1".to_string(),
    ///     ..config
    /// };
    /// assert_eq!(config.authority(), "[::1]:8080");
    /// ```
    #[must_use]
    pub fn authority(&self) -> String {
        let host = if self.address.is_empty() {
            "localhost"
        } else {
            self.address.as_str()
        };
        if host.contains(':') {
            format!("[{host}]:{port}", port = self.port)
        } else {
            format!("{host}:{port}", port = self.port)
        }
    }

    /// Returns `true` when the service advertises TLS.
    ///
    /// A `tls` block that is present but disabled does not count.
    #[must_use]
    pub fn tls_enabled(&self) -> bool {
        self.tls.as_ref().is_some_and(|tls| !tls.disabled)
    }
}

/// TLS block of the service configuration.
///
/// Only the `disabled` flag matters for document generation; certificate
/// material and cipher settings are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    /// Keeps the block in place while the service serves plain HTTP.
    #[serde(default)]
    pub disabled: bool,
}

/// A single endpoint exposed by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// Route pattern as exposed by the gateway, e.g. `/users/{id}`.
    pub endpoint: String,

    /// HTTP method. Defaults to `GET` when omitted.
    #[serde(default = "default_method")]
    pub method: String,

    /// Namespaced vendor extensions attached to the endpoint.
    #[serde(default)]
    pub extra_config: ExtraConfig,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            method: default_method(),
            extra_config: ExtraConfig::default(),
        }
    }
}

fn default_method() -> String {
    "GET".to_owned()
}
