//! Error types for layout and pinning operations

use crate::model::{ModelId, NodeId};

/// Errors raised by the mutation engine and the pin coordinator.
///
/// Structural errors are raised before any mutation is applied, so a rejected
/// operation always leaves the tree unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A pin operation was invoked out of sequence
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// A node is not present where the operation expected it
    #[error("node {node:?} not found in {context}")]
    NotFound { node: NodeId, context: String },

    /// A model handle does not exist in the store
    #[error("model {0:?} not found")]
    ModelNotFound(ModelId),

    /// The operation would break the leaf/branch invariant
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl LayoutError {
    pub(crate) fn not_found(node: NodeId, context: impl Into<String>) -> Self {
        Self::NotFound {
            node,
            context: context.into(),
        }
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
