//! Folder hierarchy under construction.
//!
//! [`FolderTree`] holds the folder skeleton while a collection is being
//! assembled. Nodes live in a single arena and reference each other by
//! index, so parents and children never borrow one another; the tree is
//! exclusively owned by one conversion run and is consumed at the end by
//! [`FolderTree::into_branch`].
//!
//! Sibling order is creation order. Combined with the caller feeding paths
//! in sorted, deduplicated order, this makes the skeleton deterministic
//! regardless of how endpoints were enumerated.
//!
//! # Examples
//!
//! ```
//! use gateway_postman_collection::tree::FolderTree;
//!
//! let mut tree = FolderTree::new();
//! let node = tree.ensure_path(&["a", "b"], Some("Inner docs")).unwrap();
//! assert_eq!(tree.find_by_path(&["a", "b"]), Some(node));
//! assert_eq!(tree.folder_count(), 2);
//!
//! let branch = tree.into_branch();
//! assert_eq!(branch[0].name, "a");
//! assert_eq!(branch[0].items[0].name, "b");
//! assert_eq!(branch[0].items[0].description.as_deref(), Some("Inner docs"));
//! ```

use crate::item::{Branch, Item};

/// Handle to a folder node inside a [`FolderTree`].
///
/// A `NodeId` is only meaningful for the tree that produced it; feeding it
/// to another tree resolves to an arbitrary node or panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single folder in the arena.
#[derive(Debug, Default)]
struct FolderNode {
    name: String,
    description: Option<String>,
    /// Sub-folder ids, in creation order.
    children: Vec<NodeId>,
    /// Request leaves, in placement order.
    items: Vec<Item>,
}

/// Arena-backed folder hierarchy.
#[derive(Debug, Default)]
pub struct FolderTree {
    nodes: Vec<FolderNode>,
    roots: Vec<NodeId>,
}

impl FolderTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Walks the segment chain, creating missing folders along the way, and
    /// returns the terminal node.
    ///
    /// Existing folders are reused, so paths sharing a prefix share a single
    /// node chain. A description attaches to the terminal node only, and
    /// only when that node has no description yet: the first supplier wins.
    /// An empty segment list addresses the root, which is not a node, so it
    /// returns `None`.
    ///
    /// Calling this twice with the same segments is a no-op the second time.
    pub fn ensure_path(&mut self, segments: &[&str], description: Option<&str>) -> Option<NodeId> {
        let mut current = None;
        for segment in segments {
            let next = match self.find_child(current, segment) {
                Some(existing) => existing,
                None => self.push_child(current, segment),
            };
            current = Some(next);
        }

        if let (Some(id), Some(description)) = (current, description) {
            let node = &mut self.nodes[id.0];
            if node.description.is_none() {
                node.description = Some(description.to_owned());
            }
        }
        current
    }

    /// Resolves a segment chain without creating anything.
    ///
    /// Returns `None` when any segment is missing, or when the segment list
    /// is empty.
    #[must_use]
    pub fn find_by_path(&self, segments: &[&str]) -> Option<NodeId> {
        let mut current = None;
        for segment in segments {
            current = Some(self.find_child(current, segment)?);
        }
        current
    }

    /// Appends a request leaf to the given folder.
    ///
    /// Leaves keep their append order, which the caller aligns with endpoint
    /// input order.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds for this tree.
    pub fn push_item(&mut self, id: NodeId, item: Item) {
        self.nodes[id.0].items.push(item);
    }

    /// Returns the display name of a folder.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds for this tree.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Returns the description of a folder, if one was attached.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds for this tree.
    #[must_use]
    pub fn description(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].description.as_deref()
    }

    /// Total number of folders in the tree.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no folder has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consumes the tree into the nested document shape.
    ///
    /// Within every folder, sub-folders come first (creation order), then
    /// request leaves (placement order). The same rule applies to the
    /// returned top-level branch.
    #[must_use]
    pub fn into_branch(mut self) -> Branch {
        let roots = std::mem::take(&mut self.roots);
        roots.into_iter().map(|id| self.take_subtree(id)).collect()
    }

    fn take_subtree(&mut self, id: NodeId) -> Item {
        let node = std::mem::take(&mut self.nodes[id.0]);
        let mut items = Branch::with_capacity(node.children.len() + node.items.len());
        for child in node.children {
            items.push(self.take_subtree(child));
        }
        items.extend(node.items);

        Item {
            name: node.name,
            description: node.description,
            request: None,
            items,
        }
    }

    fn level(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            None => &self.roots,
            Some(id) => &self.nodes[id.0].children,
        }
    }

    fn find_child(&self, parent: Option<NodeId>, name: &str) -> Option<NodeId> {
        self.level(parent)
            .iter()
            .copied()
            .find(|id| self.nodes[id.0].name == name)
    }

    fn push_child(&mut self, parent: Option<NodeId>, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(FolderNode {
            name: name.to_owned(),
            ..FolderNode::default()
        });
        match parent {
            None => self.roots.push(id),
            Some(parent) => self.nodes[parent.0].children.push(id),
        }
        id
    }
}
