//! treedock - recursive panel-docking layout
//!
//! This crate provides the layout tree, its drag-and-drop mutation engine and
//! the model pinning coordinator, wired together with the Elm Architecture
//! pattern: messages go through `update()`, which mutates the model and
//! returns a command (`Cmd::Redraw`) telling observers to re-render.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use error::LayoutError;
pub use messages::Msg;
pub use model::AppModel;
