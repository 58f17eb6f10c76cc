//! Postman collection generation for declarative gateway configurations.
//!
//! Converts a service configuration (endpoints plus optional documentation
//! metadata) into a collection document: each endpoint becomes a request
//! templated on the `HOST` and `SCHEMA` variables, and per-endpoint folder
//! options group requests into a nested folder hierarchy.
//!
//! # Architecture
//!
//! - [`path`] tokenizes raw folder paths into segments.
//! - [`tree`] holds the folder hierarchy in an arena while it is built.
//! - [`opts`] reads the `documentation/postman` metadata namespace.
//! - [`item`] models the serialized `item` axis of the document.
//! - [`collection`] assembles the document in two phases and owns the
//!   envelope types.
//!
//! # Examples
//!
//! ```
//! use gateway_postman_collection::parse;
//! use gateway_postman_config::ServiceConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ServiceConfig::from_json(r#"{
//!     "name": "sample",
//!     "port": 8080,
//!     "endpoints": [
//!         { "endpoint": "/foo", "method": "GET" },
//!         {
//!             "endpoint": "/bar",
//!             "method": "POST",
//!             "extra_config": {
//!                 "documentation/postman": { "folder": "/admin" }
//!             }
//!         }
//!     ]
//! }"#)?;
//!
//! let parsed = parse(&cfg)?;
//! let items = &parsed.collection.items;
//!
//! // Folders come first, root-level requests after.
//! assert_eq!(items[0].name, "admin");
//! assert_eq!(items[0].items[0].name, "/bar");
//! assert_eq!(items[1].name, "/foo");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod collection;
pub mod error;
pub mod item;
pub mod opts;
pub mod path;
pub mod tree;

pub use collection::{
    Collection, Info, POSTMAN_SCHEMA, ParsedCollection, Variable, Version, parse, stable_id,
};
pub use error::{OptionsError, ParseError, ParseWarning, Result, VersionError};
pub use item::{Body, Branch, Header, Item, Request, Url, find_by_path, find_item};
pub use opts::{
    DEFAULT_DESCRIPTION, EndpointOptions, FolderOptions, NAMESPACE, ServiceOptions, parse_version,
};
pub use tree::{FolderTree, NodeId};
