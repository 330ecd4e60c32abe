//! Configuration system tests
//!
//! Tests for config paths, dock config persistence and the window catalog.

mod common;

use common::test_config;
use treedock::config::{DockConfig, WindowSpec};
use treedock::config_paths;
use treedock::model::{Orientation, WindowMapper};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("treedock"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Dock Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = DockConfig::default();
    assert_eq!(config.root_orientation, Orientation::Horizontal);
    assert!(config.windows.is_empty());
}

#[test]
fn test_save_and_load_roundtrip() {
    use tempfile::tempdir;

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = test_config();
    config.root_orientation = Orientation::Vertical;
    config.save_to(&path).expect("Failed to save config");

    assert!(path.exists());
    assert_eq!(DockConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    use tempfile::tempdir;

    let dir = tempdir().expect("Failed to create temp dir");
    let config = DockConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, DockConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, "root_orientation: [not, an, orientation]").expect("Failed to write file");

    assert_eq!(DockConfig::load_from(&path), DockConfig::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "windows:\n  chart:\n    inputs: [series]\n",
    )
    .expect("Failed to write file");

    let config = DockConfig::load_from(&path);
    assert_eq!(config.root_orientation, Orientation::Horizontal);
    assert_eq!(
        config.window_spec("chart"),
        WindowSpec {
            inputs: vec!["series".to_string()],
            outputs: vec![],
        }
    );
}

#[test]
fn test_orientation_accepts_short_names() {
    let config: DockConfig = serde_yaml::from_str("root_orientation: vertical\n").unwrap();
    assert_eq!(config.root_orientation, Orientation::Vertical);
    assert_eq!("vert".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!("hor".parse::<Orientation>(), Ok(Orientation::Horizontal));
}

// ========================================================================
// Window Catalog Tests
// ========================================================================

#[test]
fn test_window_mapper_resolves_inputs() {
    let mapper = test_config().window_mapper();
    assert_eq!(mapper.inputs_for("chart"), vec!["x".to_string(), "y".to_string()]);
    assert!(mapper.inputs_for("table").is_empty());
    assert!(mapper.inputs_for("unknown").is_empty());
}

#[test]
fn test_window_spec_for_unknown_window_is_empty() {
    assert_eq!(test_config().window_spec("unknown"), WindowSpec::default());
}
