//! Drag-and-drop gesture descriptor
//!
//! A `DragInfo` is produced by the host's drag-capture layer once a gesture
//! completes, and consumed by the layout controller.

use serde::{Deserialize, Serialize};

use super::layout::{LayoutTree, NodeId};
use super::orientation::Orientation;
use crate::error::LayoutError;

/// Cardinal drop direction relative to the target panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Center,
}

impl Direction {
    /// Replace `Center` with the default split direction (North).
    ///
    /// A center drop has no axis of its own, so it is treated as a drop on the
    /// target's upper half.
    pub fn normalized(self) -> Self {
        match self {
            Direction::Center => Direction::North,
            other => other,
        }
    }

    /// Orientation a branch must have to place the source beside the target
    /// along this direction. `None` for `Center`.
    pub fn split_axis(self) -> Option<Orientation> {
        match self {
            Direction::East | Direction::West => Some(Orientation::Horizontal),
            Direction::North | Direction::South => Some(Orientation::Vertical),
            Direction::Center => None,
        }
    }

    /// Whether the source lands before the target in child order
    pub fn inserts_before(self) -> bool {
        matches!(self, Direction::North | Direction::West)
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            "center" | "c" => Ok(Direction::Center),
            other => Err(format!("Unknown direction: {}", other)),
        }
    }
}

/// One completed drag-and-drop
#[derive(Debug, Clone, PartialEq)]
pub struct DragInfo {
    /// The node being moved
    pub source: NodeId,
    /// The node dropped onto; assigned by the receiving node
    pub target: Option<NodeId>,
    pub direction: Direction,
}

impl DragInfo {
    pub fn new(source: NodeId, direction: Direction) -> Self {
        Self {
            source,
            target: None,
            direction,
        }
    }

    /// Builder-style target assignment
    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    /// Whether dropping would place the source onto itself
    pub fn is_self_drop(&self) -> bool {
        self.target == Some(self.source)
    }

    /// Remove the source from its original location.
    ///
    /// Consumes the descriptor: the origin is closed at most once, and only
    /// after the new location has been committed by the caller.
    pub fn close_origin(self, tree: &mut LayoutTree) -> Result<(), LayoutError> {
        tree.close_panel(self.source).map(|_| ())
    }
}
