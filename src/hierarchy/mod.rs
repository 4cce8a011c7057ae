// Hierarchy model: raw category document -> immutable arena of laid-out nodes.
//
// What this does:
// - Deserializes the nested `{name, description?, children?}` document
// - Validates it (root must carry `children`, every name non-empty)
// - Sorts siblings by name once, top-down, before any geometry exists
// - Flattens the tree into a Vec<LayoutNode> with parent/child NodeIds
// - Runs the radial partition (see partition.rs)
//
// The arena is never mutated after `build` returns.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::focus::Geometry;

mod partition;

pub use partition::partition;

/// One node of the raw hierarchy document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoryNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent on algorithms (leaves).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CategoryNode>>,
}

impl CategoryNode {
    pub fn leaf(name: &str) -> Self {
        Self { name: name.to_string(), description: None, children: None }
    }

    pub fn category(name: &str, children: Vec<CategoryNode>) -> Self {
        Self { name: name.to_string(), description: None, children: Some(children) }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("malformed hierarchy: root has no `children` field")]
    MissingChildren,
    #[error("malformed hierarchy: node at `{path}` has an empty name")]
    EmptyName { path: String },
    #[error("malformed hierarchy: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct LayoutNode {
    pub id: NodeId,
    pub name: String,
    pub description: Option<String>,
    pub parent: Option<NodeId>,
    /// Sorted by name at construction time.
    pub children: Vec<NodeId>,
    pub depth: usize,
    /// Number of leaves in this subtree (a leaf weighs 1).
    pub weight: usize,
    pub geometry: Geometry,
}

impl LayoutNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub root: NodeId,
    /// Pre-order: every parent precedes its descendants.
    pub nodes: Vec<LayoutNode>,
    /// Deepest depth in the tree (root = 0).
    pub height: usize,
}

impl Hierarchy {
    pub fn from_json(input: &str) -> Result<Self, HierarchyError> {
        let raw: CategoryNode = serde_json::from_str(input)?;
        Self::build(&raw)
    }

    pub fn build(raw: &CategoryNode) -> Result<Self, HierarchyError> {
        if raw.children.is_none() {
            return Err(HierarchyError::MissingChildren);
        }
        validate_names(raw, &mut Vec::new())?;

        let mut hierarchy = Hierarchy { root: NodeId(0), nodes: Vec::new(), height: 0 };
        hierarchy.push_subtree(raw, None, 0);
        partition(&mut hierarchy);

        info!(
            nodes = hierarchy.nodes.len(),
            leaves = hierarchy.node(hierarchy.root).weight,
            height = hierarchy.height,
            "hierarchy built"
        );
        Ok(hierarchy)
    }

    /// Appends `raw` and its descendants in pre-order; returns the new node's id.
    fn push_subtree(&mut self, raw: &CategoryNode, parent: Option<NodeId>, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.height = self.height.max(depth);
        self.nodes.push(LayoutNode {
            id,
            name: raw.name.clone(),
            description: raw.description.clone(),
            parent,
            children: Vec::new(),
            depth,
            weight: 0,
            geometry: Geometry::default(),
        });

        let mut sorted: Vec<&CategoryNode> = raw.children.iter().flatten().collect();
        sorted.sort_by(|a, b| name_order(&a.name, &b.name));

        let mut children = Vec::with_capacity(sorted.len());
        for child in sorted {
            children.push(self.push_subtree(child, Some(id), depth + 1));
        }
        self.nodes[id.0].children = children;
        id
    }

    pub fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.name == name).map(|n| n.id)
    }

    /// Walks up to the depth-1 ancestor (the top-level category). None for the root.
    pub fn top_level_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.node(id);
        if cur.depth == 0 {
            return None;
        }
        while cur.depth > 1 {
            cur = self.node(cur.parent?);
        }
        Some(cur.id)
    }
}

/// Sibling order: ascending by UTF-16 code units, the order browsers use when
/// comparing strings. Differs from byte order only above U+FFFF.
fn name_order(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

fn validate_names(node: &CategoryNode, path: &mut Vec<String>) -> Result<(), HierarchyError> {
    if node.name.is_empty() {
        path.push("<unnamed>".to_string());
        return Err(HierarchyError::EmptyName { path: path.join("/") });
    }
    path.push(node.name.clone());
    for child in node.children.iter().flatten() {
        validate_names(child, path)?;
    }
    path.pop();
    Ok(())
}
