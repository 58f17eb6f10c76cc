//! Gateway service configuration model.
//!
//! Decodes the declarative JSON configuration of a gateway service into the
//! handful of fields Postman collection generation cares about: the service
//! identity, its listen address, TLS posture, the declared endpoints, and the
//! namespaced `extra_config` blocks that carry documentation metadata.
//!
//! # Examples
//!
//! ```
//! use gateway_postman_config::ServiceConfig;
//!
//! let config = ServiceConfig::from_json(r#"{
//!     "name": "Billing API",
//!     "port": 8443,
//!     "tls": {},
//!     "endpoints": [{ "endpoint": "/invoices", "method": "POST" }]
//! }"#)?;
//!
//! assert!(config.tls_enabled());
//! assert_eq!(config.authority(), "localhost:8443");
//! # Ok::<(), gateway_postman_config::ConfigError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod error;
pub mod service;

pub use error::{ConfigError, Result};
pub use service::{EndpointConfig, ExtraConfig, ServiceConfig, TlsConfig};
