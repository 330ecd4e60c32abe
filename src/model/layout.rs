//! Layout tree - the recursive split/panel structure and its mutation engine
//!
//! Nodes live in an arena keyed by `NodeId`. Every node keeps a back-reference
//! to its parent, so the owner of any child list is found by direct lookup
//! rather than by relaying events up through every ancestor.
//!
//! Orientation is not stored per node. The tree stores the root's orientation
//! and every deeper level uses the inverse of its parent's.

use std::collections::HashMap;
use std::fmt::Write as _;

use super::drag::DragInfo;
use super::model_ptr::{ModelId, ModelStore};
use super::orientation::Orientation;
use crate::error::LayoutError;

/// Weight assigned to nodes that have none when activated
pub const DEFAULT_SIZE: f64 = 1.0;

// ============================================================================
// Identifiers and Nodes
// ============================================================================

/// Unique identifier for a tree node. Never reused within a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Content of a leaf panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaf {
    /// Identity of the window type hosted by this panel
    pub window: Option<String>,
    /// Display name; defaults to `window`
    pub name: Option<String>,
    /// Data-binding handle, allocated on activation
    pub model: Option<ModelId>,
}

impl Leaf {
    pub fn new(window: impl Into<String>) -> Self {
        Self {
            window: Some(window.into()),
            ..Default::default()
        }
    }

    /// Name shown to the user
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.window.as_deref())
            .unwrap_or("untitled")
    }
}

/// A node is either a panel or an ordered list of child nodes
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf(Leaf),
    Branch(Vec<NodeId>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    /// Relative weight among siblings
    pub size: Option<f64>,
    pub kind: NodeKind,
    /// Sibling whose weight was halved to make room for this node
    split_from: Option<NodeId>,
}

impl TreeNode {
    fn new(id: NodeId, parent: Option<NodeId>, kind: NodeKind) -> Self {
        Self {
            id,
            parent,
            size: None,
            kind,
            split_from: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn leaf(&self) -> Option<&Leaf> {
        match &self.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Branch(_) => None,
        }
    }

    /// Child ids (empty for leaves)
    pub fn branches(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Branch(children) => children,
        }
    }

    /// Effective weight; unset sizes count as the default
    pub fn weight(&self) -> f64 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }
}

// ============================================================================
// Layout Tree
// ============================================================================

#[derive(Debug, Clone)]
pub struct LayoutTree {
    nodes: HashMap<NodeId, TreeNode>,
    root: NodeId,
    root_orientation: Orientation,
    next_node_id: u64,
}

impl LayoutTree {
    /// Create a tree holding a single panel
    pub fn with_leaf(leaf: Leaf, root_orientation: Orientation) -> Self {
        let root = NodeId(1);
        let mut nodes = HashMap::new();
        nodes.insert(root, TreeNode::new(root, None, NodeKind::Leaf(leaf)));
        Self {
            nodes,
            root,
            root_orientation,
            next_node_id: 2,
        }
    }

    /// Create an empty arena; the caller must install a root with `set_root`
    pub(crate) fn empty(root_orientation: Orientation) -> Self {
        Self {
            nodes: HashMap::new(),
            root: NodeId(0),
            root_orientation,
            next_node_id: 1,
        }
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    pub(crate) fn insert_node(
        &mut self,
        parent: Option<NodeId>,
        size: Option<f64>,
        kind: NodeKind,
    ) -> NodeId {
        let id = self.alloc_id();
        let mut node = TreeNode::new(id, parent, kind);
        node.size = size;
        self.nodes.insert(id, node);
        id
    }

    pub(crate) fn set_children(&mut self, branch: NodeId, children: Vec<NodeId>) {
        for child in &children {
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = Some(branch);
            }
        }
        if let Some(node) = self.nodes.get_mut(&branch) {
            node.kind = NodeKind::Branch(children);
        }
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        if let Some(node) = self.nodes.get_mut(&root) {
            node.parent = None;
        }
        self.root = root;
    }

    /// Create a panel that is not yet part of the tree, e.g. a new panel being
    /// dragged in from a window catalog. Dropping it inserts a copy and closing
    /// the origin discards it.
    pub fn new_detached_leaf(&mut self, leaf: Leaf) -> NodeId {
        self.insert_node(None, None, NodeKind::Leaf(leaf))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_orientation(&self) -> Orientation {
        self.root_orientation
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes in the arena, including detached ones
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Children of a node (empty for leaves and unknown ids)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map(|n| n.branches()).unwrap_or(&[])
    }

    /// Weight of a node (default weight for unknown ids)
    pub fn weight(&self, id: NodeId) -> f64 {
        self.nodes.get(&id).map(|n| n.weight()).unwrap_or(DEFAULT_SIZE)
    }

    pub fn model_of(&self, id: NodeId) -> Option<ModelId> {
        self.nodes.get(&id)?.leaf()?.model
    }

    /// Number of ancestors between a node and the root
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.nodes.get(&id)?;
        while let Some(parent) = current.parent {
            current = self.nodes.get(&parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Orientation in effect at a branch (derived from depth)
    pub fn orientation_of(&self, id: NodeId) -> Option<Orientation> {
        let depth = self.depth_of(id)?;
        Some(if depth % 2 == 0 {
            self.root_orientation
        } else {
            self.root_orientation.inverse()
        })
    }

    /// Whether `ancestor` lies on the parent chain of `node` (or is `node`)
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent_of(id);
        }
        false
    }

    /// Whether a node is reachable from the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.contains(id) && self.is_ancestor(self.root, id)
    }

    /// All panels reachable from the root, in layout order
    pub fn leaves(&self) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|id| self.nodes.get(id).is_some_and(|n| n.is_leaf()))
            .collect()
    }

    /// All nodes reachable from the root, in pre-order
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            out.push(id);
            stack.extend(node.branches().iter().rev().copied());
        }
        out
    }

    /// First attached panel whose name (or window) matches
    pub fn find_leaf(&self, name: &str) -> Option<NodeId> {
        self.leaves().into_iter().find(|id| {
            self.nodes
                .get(id)
                .and_then(|n| n.leaf())
                .is_some_and(|leaf| {
                    leaf.name.as_deref() == Some(name) || leaf.window.as_deref() == Some(name)
                })
        })
    }

    fn branch_children(&self, id: NodeId) -> Result<&Vec<NodeId>, LayoutError> {
        match self.nodes.get(&id) {
            Some(TreeNode {
                kind: NodeKind::Branch(children),
                ..
            }) => Ok(children),
            Some(_) => Err(LayoutError::invariant(format!(
                "{:?} is a panel, not a branch",
                id
            ))),
            None => Err(LayoutError::not_found(id, "layout tree")),
        }
    }

    fn branch_children_mut(&mut self, id: NodeId) -> Result<&mut Vec<NodeId>, LayoutError> {
        match self.nodes.get_mut(&id) {
            Some(TreeNode {
                kind: NodeKind::Branch(children),
                ..
            }) => Ok(children),
            Some(_) => Err(LayoutError::invariant(format!(
                "{:?} is a panel, not a branch",
                id
            ))),
            None => Err(LayoutError::not_found(id, "layout tree")),
        }
    }

    fn position_in(&self, parent: NodeId, child: NodeId) -> Result<usize, LayoutError> {
        self.branch_children(parent)?
            .iter()
            .position(|&c| c == child)
            .ok_or_else(|| LayoutError::not_found(child, format!("children of {:?}", parent)))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Apply first-activation defaults to a node:
    /// - weight 1 if unset, non-positive or not finite
    /// - a fresh model handle for panels without one
    /// - `name = window` for panels without a name
    ///
    /// Re-activating a node is a no-op.
    pub fn activate(&mut self, id: NodeId, models: &mut ModelStore) -> Result<(), LayoutError> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or_else(|| LayoutError::not_found(id, "layout tree"))?;

        if node.size.map_or(true, |s| !s.is_finite() || s <= 0.0) {
            node.size = Some(DEFAULT_SIZE);
        }

        if let NodeKind::Leaf(leaf) = &mut node.kind {
            if leaf.model.is_none() {
                leaf.model = Some(models.allocate());
            }
            if leaf.name.is_none() {
                leaf.name = leaf.window.clone();
            }
        }
        Ok(())
    }

    /// Activate every node in the arena, in id order
    pub fn activate_all(&mut self, models: &mut ModelStore) {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort();
        for id in ids {
            // Ids come straight from the arena, so activation cannot miss
            let _ = self.activate(id, models);
        }
    }

    // =========================================================================
    // Mutation Engine
    // =========================================================================

    /// Insert the drag source next to its target inside `parent`.
    ///
    /// When the drop direction runs along `orientation` (the orientation in
    /// effect at `parent`), a copy of the source becomes the target's
    /// neighbour. Otherwise the target's slot becomes a new branch holding the
    /// target and the copy. Either way the target's weight is split evenly
    /// between the two.
    ///
    /// The source itself is left in place; the caller closes the origin
    /// afterwards. Returns the id of the inserted copy.
    pub fn insert_panel(
        &mut self,
        parent: NodeId,
        drag: &DragInfo,
        orientation: Orientation,
    ) -> Result<NodeId, LayoutError> {
        let target = drag
            .target
            .ok_or_else(|| LayoutError::invariant("drag has no target"))?;
        if drag.is_self_drop() {
            return Err(LayoutError::invariant(format!(
                "cannot drop {:?} onto itself",
                target
            )));
        }
        let axis = drag.direction.split_axis().ok_or_else(|| {
            LayoutError::invariant("center drops must be normalized before insertion")
        })?;
        let index = self.position_in(parent, target)?;
        if !self.contains(drag.source) {
            return Err(LayoutError::not_found(drag.source, "layout tree"));
        }
        if self.is_ancestor(drag.source, target) {
            return Err(LayoutError::invariant(format!(
                "cannot drop {:?} into its own subtree",
                drag.source
            )));
        }

        let before = drag.direction.inserts_before();
        let target_weight = self.weight(target);
        let half = target_weight / 2.0;

        let copy = self.clone_subtree(drag.source, Some(parent))?;
        if let Some(node) = self.nodes.get_mut(&copy) {
            node.size = Some(half);
            node.split_from = Some(target);
        }

        if axis == orientation {
            if let Some(node) = self.nodes.get_mut(&target) {
                node.size = Some(half);
            }
            let at = if before { index } else { index + 1 };
            self.branch_children_mut(parent)?.insert(at, copy);
            tracing::debug!(
                ?parent,
                ?target,
                ?copy,
                direction = ?drag.direction,
                "Inserted panel beside target"
            );
        } else {
            let pair = if before {
                vec![copy, target]
            } else {
                vec![target, copy]
            };
            let inherited = self.nodes.get_mut(&target).and_then(|n| n.split_from.take());
            let wrapper = self.insert_node(Some(parent), Some(target_weight), NodeKind::Branch(Vec::new()));
            if let Some(node) = self.nodes.get_mut(&wrapper) {
                node.split_from = inherited;
            }
            self.set_children(wrapper, pair);
            if let Some(node) = self.nodes.get_mut(&target) {
                node.size = Some(half);
            }
            self.branch_children_mut(parent)?[index] = wrapper;
            tracing::debug!(
                ?parent,
                ?target,
                ?copy,
                ?wrapper,
                direction = ?drag.direction,
                "Split target into new branch"
            );
        }

        Ok(copy)
    }

    /// Remove `child` from `parent`'s children.
    ///
    /// The removed weight goes back to the sibling it was split from, or else
    /// to the previous sibling (the next one if `child` was first). A branch
    /// left with a single child is not collapsed here; see `promote_panel`.
    pub fn delete_panel(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        let index = self.position_in(parent, child)?;
        let (weight, split_from) = self
            .nodes
            .get(&child)
            .map(|n| (n.weight(), n.split_from))
            .unwrap_or((DEFAULT_SIZE, None));

        let children = self.branch_children_mut(parent)?;
        children.remove(index);

        let recipient = split_from
            .filter(|s| children.contains(s))
            .or_else(|| {
                if index > 0 {
                    children.get(index - 1).copied()
                } else {
                    children.first().copied()
                }
            });

        if let Some(node) = recipient.and_then(|r| self.nodes.get_mut(&r)) {
            node.size = Some(node.weight() + weight);
        }
        self.remove_subtree(child);

        tracing::debug!(?parent, ?child, ?recipient, "Deleted panel");
        Ok(())
    }

    /// Replace a single-child `branch` inside `parent` with its only child.
    ///
    /// The child takes over the branch's position and weight slot; the
    /// wrapper is discarded.
    pub fn promote_panel(&mut self, parent: NodeId, branch: NodeId) -> Result<(), LayoutError> {
        let index = self.position_in(parent, branch)?;
        let only = self.sole_child(branch)?;

        let (size, split_from) = self
            .nodes
            .get(&branch)
            .map(|n| (n.size, n.split_from))
            .unwrap_or((None, None));
        if let Some(node) = self.nodes.get_mut(&only) {
            node.parent = Some(parent);
            node.size = size;
            node.split_from = split_from;
        }
        self.branch_children_mut(parent)?[index] = only;
        self.nodes.remove(&branch);

        tracing::debug!(?parent, ?branch, promoted = ?only, "Promoted panel");
        Ok(())
    }

    /// Collapse a single-child root into its child.
    ///
    /// A promoted branch moves one level up, so the root orientation flips to
    /// keep its children laid out along the same axis as before.
    pub fn promote_root(&mut self) -> Result<(), LayoutError> {
        let old_root = self.root;
        let only = self.sole_child(old_root)?;
        let size = self.nodes.get(&old_root).and_then(|n| n.size);

        let only_is_branch = self.nodes.get(&only).is_some_and(|n| !n.is_leaf());
        if let Some(node) = self.nodes.get_mut(&only) {
            node.parent = None;
            node.size = size;
            node.split_from = None;
        }
        self.nodes.remove(&old_root);
        self.root = only;
        if only_is_branch {
            self.root_orientation = self.root_orientation.inverse();
        }

        tracing::debug!(?old_root, new_root = ?only, "Promoted root");
        Ok(())
    }

    fn sole_child(&self, branch: NodeId) -> Result<NodeId, LayoutError> {
        match self.branch_children(branch)?.as_slice() {
            [only] => Ok(*only),
            children => Err(LayoutError::invariant(format!(
                "cannot promote {:?} with {} children",
                branch,
                children.len()
            ))),
        }
    }

    // =========================================================================
    // Controller Operations
    // =========================================================================

    /// Close a panel (or subtree): delete it from its parent and promote the
    /// parent if a single child remains. Detached nodes are simply discarded.
    ///
    /// Returns `false` when the node is the root, which cannot be closed.
    pub fn close_panel(&mut self, node: NodeId) -> Result<bool, LayoutError> {
        if !self.contains(node) {
            return Err(LayoutError::not_found(node, "layout tree"));
        }
        if node == self.root {
            tracing::warn!(?node, "Refusing to close the last panel");
            return Ok(false);
        }

        let Some(parent) = self.parent_of(node) else {
            self.remove_subtree(node);
            return Ok(true);
        };

        self.delete_panel(parent, node)?;

        if self.children(parent).len() == 1 {
            match self.parent_of(parent) {
                Some(grandparent) => self.promote_panel(grandparent, parent)?,
                None if parent == self.root => self.promote_root()?,
                // Detached branch: nothing above it to splice into
                None => {}
            }
        }
        Ok(true)
    }

    /// Complete a drag gesture on `target`.
    ///
    /// Inserts into the target's direct parent, then closes the origin. A drop
    /// onto the root first wraps the root in a new branch split along the drop
    /// axis. Drops of a node onto itself are ignored. Returns the id of the
    /// inserted copy.
    ///
    /// A detached source whose drop is rejected is discarded.
    pub fn drop_panel(
        &mut self,
        target: NodeId,
        drag: DragInfo,
    ) -> Result<Option<NodeId>, LayoutError> {
        let source = drag.source;
        let result = self.try_drop(target, drag);
        if result.is_err() && self.is_detached(source) {
            tracing::debug!(?source, "Discarding source of rejected drop");
            self.remove_subtree(source);
        }
        result
    }

    fn try_drop(&mut self, target: NodeId, drag: DragInfo) -> Result<Option<NodeId>, LayoutError> {
        let mut drag = drag.with_target(target);
        if drag.is_self_drop() {
            tracing::debug!(?target, "Ignoring drop onto self");
            return Ok(None);
        }
        if !self.contains(target) {
            return Err(LayoutError::not_found(target, "layout tree"));
        }
        drag.direction = drag.direction.normalized();

        let parent = match self.parent_of(target) {
            Some(parent) => parent,
            None if target == self.root => {
                if !self.contains(drag.source) {
                    return Err(LayoutError::not_found(drag.source, "layout tree"));
                }
                let axis = drag.direction.split_axis().ok_or_else(|| {
                    LayoutError::invariant("center drops must be normalized before insertion")
                })?;
                self.wrap_root(axis)?
            }
            None => {
                return Err(LayoutError::invariant(format!(
                    "drop target {:?} is not attached to the tree",
                    target
                )))
            }
        };
        let orientation = self
            .orientation_of(parent)
            .ok_or_else(|| LayoutError::not_found(parent, "layout tree"))?;

        let inserted = self.insert_panel(parent, &drag, orientation)?;
        drag.close_origin(self)?;
        Ok(Some(inserted))
    }

    /// Make the root the only child of a new root branch split along `axis`.
    ///
    /// The new root takes over the old root's weight. A root branch already
    /// split along `axis` cannot be wrapped without flipping its own axis.
    fn wrap_root(&mut self, axis: Orientation) -> Result<NodeId, LayoutError> {
        let old_root = self.root;
        let (size, is_branch) = self
            .nodes
            .get(&old_root)
            .map(|n| (n.size, !n.is_leaf()))
            .ok_or_else(|| LayoutError::not_found(old_root, "layout tree"))?;
        if is_branch && self.root_orientation == axis {
            return Err(LayoutError::invariant(format!(
                "root branch already splits {}; drop onto one of its panels",
                axis
            )));
        }

        let wrapper = self.insert_node(None, size, NodeKind::Branch(Vec::new()));
        self.set_children(wrapper, vec![old_root]);
        self.set_root(wrapper);
        self.root_orientation = axis;

        tracing::debug!(?old_root, ?wrapper, %axis, "Wrapped root for drop");
        Ok(wrapper)
    }

    /// Whether a node exists but hangs off nothing, like a panel dragged in
    /// from outside the tree
    fn is_detached(&self, id: NodeId) -> bool {
        self.contains(id) && id != self.root && self.parent_of(id).is_none()
    }

    // =========================================================================
    // Arena Helpers
    // =========================================================================

    fn clone_subtree(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<NodeId, LayoutError> {
        let node = self
            .nodes
            .get(&id)
            .cloned()
            .ok_or_else(|| LayoutError::not_found(id, "layout tree"))?;
        let copy = self.insert_node(parent, node.size, NodeKind::Branch(Vec::new()));
        let kind = match node.kind {
            NodeKind::Leaf(leaf) => NodeKind::Leaf(leaf),
            NodeKind::Branch(children) => {
                let mut copies = Vec::with_capacity(children.len());
                for child in children {
                    copies.push(self.clone_subtree(child, Some(copy))?);
                }
                NodeKind::Branch(copies)
            }
        };
        if let Some(node) = self.nodes.get_mut(&copy) {
            node.kind = kind;
        }
        Ok(copy)
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            if let NodeKind::Branch(children) = node.kind {
                for child in children {
                    self.remove_subtree(child);
                }
            }
        }
    }

    // =========================================================================
    // Rendering Support
    // =========================================================================

    /// Plain-text outline of the tree, one node per line
    pub fn render_outline(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root, self.root_orientation, 0, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, orientation: Orientation, indent: usize, out: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let pad = "  ".repeat(indent);
        match &node.kind {
            NodeKind::Branch(children) => {
                let _ = writeln!(out, "{}{} size={}", pad, orientation.class_name(), node.weight());
                for child in children {
                    self.render_node(*child, orientation.inverse(), indent + 1, out);
                }
            }
            NodeKind::Leaf(leaf) => {
                let _ = writeln!(out, "{}- {} size={}", pad, leaf.label(), node.weight());
            }
        }
    }

    // =========================================================================
    // Invariant Validation
    // =========================================================================

    /// Check the structural invariants of the attached tree:
    /// - the root has no parent
    /// - every branch has at least two children
    /// - every child points back at its branch
    /// - weights are positive
    pub fn validate(&self) -> Result<(), LayoutError> {
        let root = self
            .nodes
            .get(&self.root)
            .ok_or_else(|| LayoutError::not_found(self.root, "layout tree"))?;
        if root.parent.is_some() {
            return Err(LayoutError::invariant("root has a parent"));
        }

        for id in self.walk() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            if node.size.is_some_and(|s| s <= 0.0 || !s.is_finite()) {
                return Err(LayoutError::invariant(format!(
                    "{:?} has invalid size {:?}",
                    id, node.size
                )));
            }
            if let NodeKind::Branch(children) = &node.kind {
                if children.len() < 2 {
                    return Err(LayoutError::invariant(format!(
                        "branch {:?} has {} children",
                        id,
                        children.len()
                    )));
                }
                for child in children {
                    match self.nodes.get(child) {
                        Some(c) if c.parent == Some(id) => {}
                        Some(_) => {
                            return Err(LayoutError::invariant(format!(
                                "{:?} does not point back at {:?}",
                                child, id
                            )))
                        }
                        None => return Err(LayoutError::not_found(*child, "layout tree")),
                    }
                }
            }
        }
        Ok(())
    }

    /// Panics in debug builds if the tree is malformed
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        if let Err(e) = self.validate() {
            panic!("layout invariant broken: {}", e);
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::drag::Direction;

    fn two_panel_tree() -> (LayoutTree, NodeId, NodeId) {
        let mut tree = LayoutTree::empty(Orientation::Horizontal);
        let root = tree.insert_node(None, Some(1.0), NodeKind::Branch(Vec::new()));
        let a = tree.insert_node(None, Some(2.0), NodeKind::Leaf(Leaf::new("a")));
        let b = tree.insert_node(None, Some(2.0), NodeKind::Leaf(Leaf::new("b")));
        tree.set_children(root, vec![a, b]);
        tree.set_root(root);
        (tree, a, b)
    }

    #[test]
    fn test_orientation_alternates_with_depth() {
        let (mut tree, a, _) = two_panel_tree();
        let c = tree.new_detached_leaf(Leaf::new("c"));
        tree.drop_panel(a, DragInfo::new(c, Direction::North)).unwrap();

        let root = tree.root();
        let wrapper = tree.children(root)[0];
        assert_eq!(tree.orientation_of(root), Some(Orientation::Horizontal));
        assert_eq!(tree.orientation_of(wrapper), Some(Orientation::Vertical));
    }

    #[test]
    fn test_clone_subtree_copies_leaf_content() {
        let (mut tree, a, _) = two_panel_tree();
        let copy = tree.clone_subtree(a, None).unwrap();
        assert_ne!(copy, a);
        assert_eq!(tree.node(copy).unwrap().leaf(), tree.node(a).unwrap().leaf());
    }

    #[test]
    fn test_remove_subtree_drops_descendants() {
        let (mut tree, _, _) = two_panel_tree();
        let root = tree.root();
        let before = tree.len();
        let children = tree.children(root).to_vec();
        tree.remove_subtree(root);
        assert_eq!(tree.len(), before - 1 - children.len());
    }

    #[test]
    fn test_validate_rejects_single_child_branch() {
        let (mut tree, a, _) = two_panel_tree();
        let root = tree.root();
        tree.delete_panel(root, a).unwrap();
        assert!(matches!(
            tree.validate(),
            Err(LayoutError::InvariantViolation(_))
        ));
    }
}
