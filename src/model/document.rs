//! Serialized form of a layout tree
//!
//! A `LayoutDocument` is the nested shape used to persist and exchange
//! layouts (YAML or JSON):
//!
//! ```yaml
//! branches:
//!   - window: table
//!     size: 2
//!   - branches:
//!       - window: chart
//!       - window: map
//! ```
//!
//! Model handles are runtime-only and are never serialized.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::layout::{Leaf, LayoutTree, NodeId, NodeKind};
use super::orientation::Orientation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<LayoutDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LayoutDocument {
    /// A panel document for the given window
    pub fn leaf(window: impl Into<String>) -> Self {
        Self {
            window: Some(window.into()),
            ..Default::default()
        }
    }

    /// A branch document
    pub fn branch(branches: Vec<LayoutDocument>) -> Self {
        Self {
            branches,
            ..Default::default()
        }
    }

    /// Builder-style weight assignment
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Load a document, choosing JSON or YAML by file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let doc = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON layout {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML layout {}", path.display()))?
        };
        tracing::info!("Loaded layout from {}", path.display());
        Ok(doc)
    }
}

impl LayoutTree {
    /// Build a tree from a document.
    ///
    /// Branches with a single child are collapsed into that child (keeping the
    /// branch's weight), so a loaded tree never starts out malformed.
    pub fn from_document(doc: &LayoutDocument, root_orientation: Orientation) -> Self {
        let mut tree = LayoutTree::empty(root_orientation);
        let root = build_node(&mut tree, doc, None);
        tree.set_root(root);
        tree
    }

    /// Snapshot the attached tree as a document
    pub fn to_document(&self) -> LayoutDocument {
        self.document_for(self.root())
    }

    fn document_for(&self, id: NodeId) -> LayoutDocument {
        let Some(node) = self.node(id) else {
            return LayoutDocument::default();
        };
        match &node.kind {
            NodeKind::Leaf(leaf) => LayoutDocument {
                branches: Vec::new(),
                size: node.size,
                window: leaf.window.clone(),
                name: leaf.name.clone(),
            },
            NodeKind::Branch(children) => LayoutDocument {
                branches: children.iter().map(|c| self.document_for(*c)).collect(),
                size: node.size,
                window: None,
                name: None,
            },
        }
    }
}

fn build_node(tree: &mut LayoutTree, doc: &LayoutDocument, parent: Option<NodeId>) -> NodeId {
    match doc.branches.as_slice() {
        [] => tree.insert_node(
            parent,
            doc.size,
            NodeKind::Leaf(Leaf {
                window: doc.window.clone(),
                name: doc.name.clone(),
                model: None,
            }),
        ),
        [only] => {
            let collapsed = LayoutDocument {
                size: doc.size.or(only.size),
                ..only.clone()
            };
            build_node(tree, &collapsed, parent)
        }
        branches => {
            let id = tree.insert_node(parent, doc.size, NodeKind::Branch(Vec::new()));
            let children = branches
                .iter()
                .map(|child| build_node(tree, child, Some(id)))
                .collect();
            tree.set_children(id, children);
            id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_shape_parses() {
        let yaml = "branches:\n  - window: table\n    size: 2\n  - window: chart\n";
        let doc: LayoutDocument = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.branches.len(), 2);
        assert_eq!(doc.branches[0].size, Some(2.0));
        assert_eq!(doc.branches[1].window.as_deref(), Some("chart"));
    }

    #[test]
    fn test_single_child_branch_collapses_on_load() {
        let doc = LayoutDocument::branch(vec![LayoutDocument::branch(vec![
            LayoutDocument::leaf("only"),
        ])
        .with_size(3.0)]);
        let tree = LayoutTree::from_document(&doc, Orientation::Horizontal);
        let root = tree.node(tree.root()).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.size, Some(3.0));
        tree.validate().unwrap();
    }

    #[test]
    fn test_to_document_preserves_order_and_sizes() {
        let doc = LayoutDocument::branch(vec![
            LayoutDocument::leaf("a").with_size(2.0),
            LayoutDocument::branch(vec![LayoutDocument::leaf("b"), LayoutDocument::leaf("c")]),
        ]);
        let tree = LayoutTree::from_document(&doc, Orientation::Vertical);
        assert_eq!(tree.to_document(), doc);
    }
}
