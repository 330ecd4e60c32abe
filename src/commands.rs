//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The layout core never renders; `Redraw` is its only notification that the
//! tree or pin indicators changed.

use crate::model::{NodeId, SubscriptionId};

#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// The tree or indicator state changed; observers should re-render
    Redraw,

    /// A panel action for the host to handle
    PanelAction { node: NodeId, action: String },

    /// A pin indicator was registered
    Subscribed(SubscriptionId),
}
