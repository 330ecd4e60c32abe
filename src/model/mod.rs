//! Application model - the complete state of the dock
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod connector;
pub mod document;
pub mod drag;
pub mod layout;
pub mod model_ptr;
pub mod orientation;

pub use connector::{
    ModelConnector, PinIndicator, PinState, StaticWindowMapper, Subscriber, SubscriptionId,
    WindowMapper,
};
pub use document::LayoutDocument;
pub use drag::{Direction, DragInfo};
pub use layout::{LayoutTree, Leaf, NodeId, NodeKind, TreeNode, DEFAULT_SIZE};
pub use model_ptr::{ModelId, ModelPtr, ModelStore};
pub use orientation::Orientation;

use std::collections::HashSet;

use crate::config::DockConfig;
use crate::error::LayoutError;

/// The complete application state
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The panel tree
    pub layout: LayoutTree,
    /// Model handles for every panel
    pub models: ModelStore,
    /// Pin protocol coordinator
    pub connector: ModelConnector<PinIndicator>,
    /// Persisted configuration (window catalog, root orientation)
    pub config: DockConfig,
    /// Most recent rejected operation, cleared by the next successful one
    pub last_error: Option<LayoutError>,
}

impl AppModel {
    /// Build the model from a layout document and activate every node
    pub fn new(doc: &LayoutDocument, config: DockConfig) -> Self {
        let mut layout = LayoutTree::from_document(doc, config.root_orientation);
        let mut models = ModelStore::new();
        layout.activate_all(&mut models);
        Self {
            layout,
            models,
            connector: ModelConnector::new(),
            config,
            last_error: None,
        }
    }

    /// Register a pin indicator for a panel using its window's declared data
    /// flow. Returns `None` for unknown or unactivated panels.
    pub fn subscribe_panel(&mut self, node: NodeId) -> Option<SubscriptionId> {
        let leaf = self.layout.node(node)?.leaf()?;
        let model = leaf.model?;
        let spec = leaf
            .window
            .as_deref()
            .map(|w| self.config.window_spec(w))
            .unwrap_or_default();
        Some(
            self.connector
                .subscribe(PinIndicator::new(model, spec.inputs, spec.outputs)),
        )
    }

    /// Subscribe every attached panel that has no indicator yet, in layout
    /// order. Calling this again after mutations only picks up new panels.
    pub fn subscribe_all_panels(&mut self) -> Vec<SubscriptionId> {
        let subscribed: HashSet<ModelId> =
            self.connector.subscribers().map(|(_, sub)| sub.model).collect();
        let pending: Vec<NodeId> = self
            .layout
            .leaves()
            .into_iter()
            .filter(|id| {
                self.layout
                    .model_of(*id)
                    .is_some_and(|m| !subscribed.contains(&m))
            })
            .collect();
        pending
            .into_iter()
            .filter_map(|id| self.subscribe_panel(id))
            .collect()
    }

    /// Tear down pin indicators whose panel is no longer in the tree.
    ///
    /// A pin in progress for a closed panel is cancelled. Returns the number of
    /// indicators removed.
    pub fn prune_subscriptions(&mut self) -> usize {
        let live: HashSet<ModelId> = self
            .layout
            .leaves()
            .into_iter()
            .filter_map(|id| self.layout.model_of(id))
            .collect();

        let stale: Vec<SubscriptionId> = self
            .connector
            .subscribers()
            .filter(|(_, sub)| !live.contains(&sub.model))
            .map(|(id, _)| id)
            .collect();
        for id in &stale {
            self.connector.unsubscribe(*id);
        }

        if self.connector.binder().is_some_and(|b| !live.contains(&b)) {
            tracing::debug!("Pinning panel was closed, cancelling pin");
            self.connector.clear_pin_status();
        }
        stale.len()
    }
}
