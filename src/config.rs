//! Dock configuration persistence
//!
//! Stores user preferences in `~/.config/treedock/config.yaml`:
//!
//! ```yaml
//! root_orientation: horizontal
//! windows:
//!   chart:
//!     inputs: [series]
//!     outputs: [selection]
//!   table:
//!     outputs: [series]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Orientation, StaticWindowMapper};

/// Data-flow declaration for one window type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Orientation of the root branch
    #[serde(default)]
    pub root_orientation: Orientation,

    /// Catalog of window types and their declared inputs/outputs
    #[serde(default)]
    pub windows: BTreeMap<String, WindowSpec>,
}

impl DockConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Window mapper resolving each cataloged window to its inputs
    pub fn window_mapper(&self) -> StaticWindowMapper {
        let mut mapper = StaticWindowMapper::new();
        for (window, spec) in &self.windows {
            mapper.insert(window.clone(), spec.inputs.clone());
        }
        mapper
    }

    /// Declared data flow of a window (empty for unknown windows)
    pub fn window_spec(&self, window: &str) -> WindowSpec {
        self.windows.get(window).cloned().unwrap_or_default()
    }
}
