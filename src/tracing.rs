//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=treedock::model::layout=debug` - mutation engine only
//! - `RUST_LOG=treedock::model::connector=debug` - pin protocol only
//!
//! # Log Files
//!
//! Logs are written to `~/.config/treedock/logs/treedock.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::LayoutTree;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and goes to stderr so it never mixes with
/// rendered layouts on stdout. File logging is always at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "treedock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the tree's shape for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub leaf_count: usize,
    pub branch_count: usize,
    pub max_depth: usize,
}

impl LayoutSnapshot {
    pub fn from_tree(tree: &LayoutTree) -> Self {
        let mut leaf_count = 0;
        let mut branch_count = 0;
        let mut max_depth = 0;
        for id in tree.walk() {
            match tree.node(id) {
                Some(node) if node.is_leaf() => leaf_count += 1,
                Some(_) => branch_count += 1,
                None => continue,
            }
            max_depth = max_depth.max(tree.depth_of(id).unwrap_or(0));
        }
        Self {
            leaf_count,
            branch_count,
            max_depth,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.leaf_count != other.leaf_count {
            changes.push(format!("panels: {} → {}", self.leaf_count, other.leaf_count));
        }
        if self.branch_count != other.branch_count {
            changes.push(format!(
                "branches: {} → {}",
                self.branch_count, other.branch_count
            ));
        }
        if self.max_depth != other.max_depth {
            changes.push(format!("depth: {} → {}", self.max_depth, other.max_depth));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
