//! Split orientation for branch nodes
//!
//! Orientation alternates with tree depth: every branch lays its children out
//! along the inverse of its parent's orientation.

use serde::{Deserialize, Serialize};

/// Axis along which a branch arranges its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children arranged left-to-right
    #[default]
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation
    pub fn inverse(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Structural class name used by renderers
    pub fn class_name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "hor",
            Orientation::Vertical => "vert",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "hor" => Ok(Orientation::Horizontal),
            "vertical" | "vert" => Ok(Orientation::Vertical),
            other => Err(format!("Unknown orientation: {}", other)),
        }
    }
}
