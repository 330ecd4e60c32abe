//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use treedock::config::{DockConfig, WindowSpec};
use treedock::model::{
    AppModel, LayoutDocument, LayoutTree, ModelStore, NodeId, NodeKind, Orientation,
};

/// Panel document with an explicit weight
pub fn leaf(window: &str, size: f64) -> LayoutDocument {
    LayoutDocument::leaf(window).with_size(size)
}

/// Branch document
pub fn branch(children: Vec<LayoutDocument>) -> LayoutDocument {
    LayoutDocument::branch(children)
}

/// Build and activate a tree
pub fn tree_from(doc: &LayoutDocument, orientation: Orientation) -> (LayoutTree, ModelStore) {
    let mut tree = LayoutTree::from_document(doc, orientation);
    let mut models = ModelStore::new();
    tree.activate_all(&mut models);
    (tree, models)
}

/// Config with a small window catalog:
/// - chart consumes `x` and `y`
/// - table produces `x`
/// - plot produces `y` and `z`
/// - notes produces `w`
pub fn test_config() -> DockConfig {
    let mut config = DockConfig::default();
    let spec = |inputs: &[&str], outputs: &[&str]| WindowSpec {
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        outputs: outputs.iter().map(|s| s.to_string()).collect(),
    };
    config.windows.insert("chart".into(), spec(&["x", "y"], &[]));
    config.windows.insert("table".into(), spec(&[], &["x"]));
    config.windows.insert("plot".into(), spec(&[], &["y", "z"]));
    config.windows.insert("notes".into(), spec(&[], &["w"]));
    config
}

/// Application model over `doc` with the test catalog
pub fn test_model(doc: &LayoutDocument) -> AppModel {
    AppModel::new(doc, test_config())
}

/// Look up an attached panel by name
pub fn id(tree: &LayoutTree, name: &str) -> NodeId {
    tree.find_leaf(name)
        .unwrap_or_else(|| panic!("no panel named {}", name))
}

/// Labels of a branch's children; nested branches show as `*`
pub fn labels(tree: &LayoutTree, branch: NodeId) -> Vec<String> {
    tree.children(branch)
        .iter()
        .map(|c| match &tree.node(*c).unwrap().kind {
            NodeKind::Leaf(leaf) => leaf.label().to_string(),
            NodeKind::Branch(_) => "*".to_string(),
        })
        .collect()
}

/// Weights of a branch's children
pub fn sizes(tree: &LayoutTree, branch: NodeId) -> Vec<f64> {
    tree.children(branch)
        .iter()
        .map(|c| tree.weight(*c))
        .collect()
}

/// Sum of a branch's child weights
pub fn total(tree: &LayoutTree, branch: NodeId) -> f64 {
    sizes(tree, branch).iter().sum()
}
