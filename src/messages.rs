//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{DragInfo, ModelId, NodeId, SubscriptionId};

/// Layout messages (drag-and-drop, closing panels, panel actions)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// A drag gesture completed on `target`
    Drop { target: NodeId, drag: DragInfo },

    /// Close a panel; its parent collapses if one child remains
    Close(NodeId),

    /// Apply first-activation defaults to a node
    Activate(NodeId),

    /// Generic panel action, relayed to the host unchanged
    Action { node: NodeId, action: String },
}

/// Pin protocol messages
#[derive(Debug, Clone, PartialEq)]
pub enum PinMsg {
    /// A panel's pin indicator was activated
    Subscribe(NodeId),

    /// A panel's pin indicator was torn down
    Unsubscribe(SubscriptionId),

    /// The panel hosting `node` asked to pin its input
    StartPinning(NodeId),

    /// The user picked the model to pin to
    PinToModel(ModelId),

    /// Cancel any pin in progress
    ClearPinStatus,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    Pin(PinMsg),
}
