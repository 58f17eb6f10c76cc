//! Collection envelope and the two-phase document assembler.
//!
//! [`parse`] turns a service configuration into a complete collection
//! document in one synchronous pass over immutable input. The folder
//! hierarchy is built first from the full set of requested folder paths
//! (sorted, so the shape never depends on endpoint order), then endpoints
//! are placed into it in input order. Interpretation problems degrade to
//! [`ParseWarning`]s; the only fatal condition is an internal disagreement
//! between the two phases.

use gateway_postman_config::{EndpointConfig, ServiceConfig};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224};
use tracing::{debug, warn};

use crate::error::{ParseError, ParseWarning, Result};
use crate::item::{Branch, Item, Request};
use crate::opts::{EndpointOptions, ServiceOptions, parse_version};
use crate::path;
use crate::tree::FolderTree;

/// Collection schema identifier stamped into every document.
pub const POSTMAN_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// A complete collection document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Variables the templated request URLs resolve against.
    pub variables: Vec<Variable>,

    /// Document header.
    pub info: Info,

    /// Root sequence: folders first (creation order), then root-level
    /// request leaves (endpoint order). Always serialized, even when empty.
    #[serde(rename = "item", default)]
    pub items: Branch,
}

/// Document header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// Collection title.
    pub name: String,

    /// Stable collection identifier, derived from the title.
    #[serde(rename = "_postman_id")]
    pub postman_id: String,

    /// Collection description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Schema the document conforms to, see [`POSTMAN_SCHEMA`].
    pub schema: String,

    /// Service version, when one was declared and valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

/// Document version components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Major component.
    pub major: u64,
    /// Minor component.
    pub minor: u64,
    /// Patch component.
    pub patch: u64,
}

/// A collection-scoped variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Stable identifier, derived from the key.
    pub id: String,

    /// Name referenced as `{{KEY}}` in templated URLs.
    pub key: String,

    /// Resolved value.
    pub value: String,

    /// Variable type, always `string` for generated documents.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Outcome of a conversion: the document plus everything non-fatal that
/// went wrong while interpreting the configuration.
#[derive(Debug)]
pub struct ParsedCollection {
    /// The complete generated document.
    pub collection: Collection,

    /// Non-fatal problems, in the order they were found.
    pub warnings: Vec<ParseWarning>,
}

impl ParsedCollection {
    /// Returns `true` when the conversion reported nothing.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Deterministic identifier derived from a string.
///
/// Lowercase-hex SHA-224, used for the `_postman_id` and the variable ids
/// so regenerating a document for the same service yields the same ids.
///
/// # Examples
///
/// ```
/// use gateway_postman_collection::stable_id;
///
/// assert_eq!(stable_id("sample"), stable_id("sample"));
/// assert_eq!(stable_id("sample").len(), 56);
/// ```
#[must_use]
pub fn stable_id(input: &str) -> String {
    hex::encode(Sha224::digest(input.as_bytes()))
}

/// Converts a service configuration into a collection document.
///
/// The folder hierarchy is built in two phases. The skeleton phase collects
/// every requested folder path, sorts and deduplicates the raw strings, and
/// creates the folder chains; sorting makes sibling order independent of
/// endpoint enumeration order. The placement phase then walks endpoints in
/// input order and appends each request leaf to its folder, or to the root
/// when it has no usable folder option.
///
/// Interpretation problems never abort the conversion. Malformed service
/// options fall back to defaults with a warning, an invalid version string
/// is omitted with a warning, and malformed endpoint options are treated as
/// absent (debug-logged only), landing the endpoint at the root.
///
/// # Errors
///
/// Returns [`ParseError::MissingFolder`] when the placement phase cannot
/// find a folder the skeleton phase was supposed to create. That would mean
/// the two phases disagree, so it is surfaced instead of being swallowed.
///
/// # Examples
///
/// ```
/// use gateway_postman_collection::parse;
/// use gateway_postman_config::ServiceConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cfg = ServiceConfig::from_json(r#"{
///     "name": "sample",
///     "port": 8080,
///     "endpoints": [{ "endpoint": "/foo", "method": "GET" }]
/// }"#)?;
///
/// let parsed = parse(&cfg)?;
/// assert_eq!(parsed.collection.info.name, "sample");
/// assert_eq!(parsed.collection.items[0].name, "/foo");
/// assert!(parsed.is_clean());
/// # Ok(())
/// # }
/// ```
pub fn parse(cfg: &ServiceConfig) -> Result<ParsedCollection> {
    let mut warnings = Vec::new();

    let service_opts = match ServiceOptions::parse(cfg) {
        Ok(opts) => opts,
        Err(error) => {
            warn!("service options ignored, using defaults: {}", error);
            warnings.push(ParseWarning::from(error));
            ServiceOptions::defaults(cfg)
        }
    };

    let version = service_opts
        .version
        .as_deref()
        .and_then(|raw| match parse_version(raw) {
            Ok(version) => Some(version),
            Err(error) => {
                warn!("version omitted from the document: {}", error);
                warnings.push(ParseWarning::from(error));
                None
            }
        });

    // Endpoint options are resolved once and reused by both phases.
    let endpoint_opts: Vec<Option<EndpointOptions>> = cfg
        .endpoints
        .iter()
        .map(|endpoint| match EndpointOptions::parse(endpoint) {
            Ok(opts) => opts,
            Err(error) => {
                debug!("endpoint options ignored: {}", error);
                None
            }
        })
        .collect();

    // Skeleton phase. Sorting the deduplicated raw paths is a correctness
    // requirement: without it the tree shape would vary with endpoint order.
    let mut folder_paths: Vec<&str> = endpoint_opts
        .iter()
        .filter_map(|opts| opts.as_ref().and_then(EndpointOptions::folder_path))
        .collect();
    folder_paths.sort_unstable();
    folder_paths.dedup();

    let mut tree = FolderTree::new();
    for raw_path in folder_paths {
        let description = service_opts
            .folder_options(raw_path)
            .and_then(|folder| folder.description.as_deref())
            .filter(|description| !description.is_empty());
        tree.ensure_path(&path::segments(raw_path), description);
    }

    // Placement phase: endpoints keep their input order.
    let mut root_leaves = Branch::new();
    for (endpoint, opts) in cfg.endpoints.iter().zip(&endpoint_opts) {
        let leaf = leaf_item(endpoint, opts.as_ref());

        match opts.as_ref().and_then(EndpointOptions::folder_path) {
            None => root_leaves.push(leaf),
            Some(raw_path) => {
                let segments = path::segments(raw_path);
                if segments.is_empty() {
                    // Paths like "//" tokenize to nothing and fall back to
                    // the root, same as the explicit root alias.
                    root_leaves.push(leaf);
                } else if let Some(id) = tree.find_by_path(&segments) {
                    tree.push_item(id, leaf);
                } else {
                    return Err(ParseError::MissingFolder {
                        path: raw_path.to_owned(),
                    });
                }
            }
        }
    }

    let mut items = tree.into_branch();
    items.append(&mut root_leaves);

    let ServiceOptions {
        name, description, ..
    } = service_opts;
    let collection = Collection {
        variables: variables(cfg),
        info: Info {
            postman_id: stable_id(&name),
            name,
            description: Some(description).filter(|description| !description.is_empty()),
            schema: POSTMAN_SCHEMA.to_owned(),
            version,
        },
        items,
    };

    Ok(ParsedCollection {
        collection,
        warnings,
    })
}

fn leaf_item(endpoint: &EndpointConfig, opts: Option<&EndpointOptions>) -> Item {
    let mut request = Request::templated(&endpoint.endpoint, endpoint.method.as_str());
    request.description = opts
        .and_then(EndpointOptions::request_description)
        .map(str::to_owned);

    let name = opts
        .and_then(EndpointOptions::display_name)
        .unwrap_or(&endpoint.endpoint);

    Item {
        name: name.to_owned(),
        description: None,
        request: Some(request),
        items: Branch::new(),
    }
}

fn variables(cfg: &ServiceConfig) -> Vec<Variable> {
    let schema = if cfg.tls_enabled() { "https" } else { "http" };
    vec![
        Variable {
            id: stable_id("HOST"),
            key: "HOST".to_owned(),
            value: cfg.authority(),
            kind: "string".to_owned(),
        },
        Variable {
            id: stable_id("SCHEMA"),
            key: "SCHEMA".to_owned(),
            value: schema.to_owned(),
            kind: "string".to_owned(),
        },
    ]
}
