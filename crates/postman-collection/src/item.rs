//! Document model for the `item` axis of a collection.
//!
//! These types mirror the external collection schema: field declaration
//! order is serialization order, and optional fields are skipped entirely
//! when empty so the output stays byte-comparable with documents produced
//! by other tooling.

use serde::{Deserialize, Serialize};

use crate::path;

/// An ordered sequence of sibling [`Item`]s.
pub type Branch = Vec<Item>;

/// One entry in the collection tree.
///
/// An item is either a folder (no request, possibly nested children) or a
/// leaf describing a single endpoint request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the folder or request.
    pub name: String,

    /// Optional folder description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Request details. Present on leaves, absent on folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,

    /// Nested children. Folders first (creation order), then leaves
    /// (placement order).
    #[serde(rename = "item", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Branch,
}

impl Item {
    /// Creates an empty item with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            request: None,
            items: Branch::new(),
        }
    }

    /// Returns `true` when the item is a folder rather than a request leaf.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.request.is_none()
    }

    /// Returns the direct child with the given name, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.items.iter().find(|child| child.name == name)
    }
}

/// Finds the entry with the given name in a branch.
#[must_use]
pub fn find_item<'a>(items: &'a [Item], name: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.name == name)
}

/// Resolves a folder path against a produced branch.
///
/// The path is tokenized with [`path::segments`], so separator placement is
/// irrelevant. Returns `None` for paths that tokenize to nothing.
///
/// # Examples
///
/// ```
/// use gateway_postman_collection::item::{find_by_path, Item};
///
/// let mut parent = Item::new("a");
/// parent.items.push(Item::new("b"));
/// let branch = vec![parent];
///
/// assert_eq!(find_by_path(&branch, "/a/b").map(|i| i.name.as_str()), Some("b"));
/// assert!(find_by_path(&branch, "/a/missing").is_none());
/// ```
#[must_use]
pub fn find_by_path<'a>(items: &'a [Item], path: &str) -> Option<&'a Item> {
    let segments = path::segments(path);
    let (first, rest) = segments.split_first()?;
    let mut current = find_item(items, first)?;
    for segment in rest {
        current = current.child(segment)?;
    }
    Some(current)
}

/// Request details carried by a leaf item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Target URL, templated on the `HOST` and `SCHEMA` variables.
    pub url: Url,

    /// HTTP method.
    pub method: String,

    /// Request headers. The generator leaves these empty.
    #[serde(rename = "header", default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    /// Request body. The generator leaves this empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,

    /// Optional request description taken from endpoint metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Request {
    /// Builds a request for a route, templated on the collection variables.
    ///
    /// The raw URL becomes `{{SCHEMA}}://{{HOST}}` followed by the route,
    /// and the path component is the route with its leading `/` removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gateway_postman_collection::item::Request;
    ///
    /// let request = Request::templated("/users/{id}", "GET");
    /// assert_eq!(request.url.raw, "{{SCHEMA}}://{{HOST}}/users/{id}");
    /// assert_eq!(request.url.path, ["users/{id}"]);
    /// assert_eq!(request.method, "GET");
    /// ```
    #[must_use]
    pub fn templated(route: &str, method: impl Into<String>) -> Self {
        Self {
            url: Url {
                raw: format!("{{{{SCHEMA}}}}://{{{{HOST}}}}{route}"),
                protocol: "{{SCHEMA}}".to_owned(),
                host: vec!["{{HOST}}".to_owned()],
                path: vec![route.strip_prefix('/').unwrap_or(route).to_owned()],
            },
            method: method.into(),
            headers: Vec::new(),
            body: None,
            description: None,
        }
    }
}

/// URL of a request, split into the components the schema expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    /// Full templated URL.
    pub raw: String,

    /// Scheme component, `{{SCHEMA}}` for generated documents.
    pub protocol: String,

    /// Host components, `{{HOST}}` for generated documents.
    pub host: Vec<String>,

    /// Path component, the route without its leading separator.
    pub path: Vec<String>,
}

/// A single request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name.
    pub key: String,

    /// Header value.
    pub value: String,

    /// Optional header description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Payload mode, e.g. `raw`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Raw payload contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}
