//! Command-line argument parsing
//!
//! Supports:
//! - Loading a layout document (YAML or JSON)
//! - Replaying a script of drag/close/pin steps against it
//! - Printing the result as an outline, YAML or JSON

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::model::Orientation;

/// Replay panel-docking gestures against a layout
#[derive(Parser, Debug)]
#[command(name = "treedock", version, about = "Replay panel-docking gestures against a layout")]
pub struct CliArgs {
    /// Layout document to load (starts from a single panel if omitted)
    #[arg(value_name = "LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Script of steps to replay
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Output format for the resulting layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Outline)]
    pub format: OutputFormat,

    /// Override the configured root orientation (horizontal or vertical)
    #[arg(long, value_name = "ORIENTATION")]
    pub orientation: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Outline,
    Yaml,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub layout: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub format: OutputFormat,
    pub orientation: Option<Orientation>,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let orientation = self
            .orientation
            .as_deref()
            .map(str::parse::<Orientation>)
            .transpose()?;

        Ok(StartupConfig {
            layout: self.layout,
            script: self.script,
            format: self.format,
            orientation,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            layout: None,
            script: None,
            format: OutputFormat::Outline,
            orientation: None,
            config: None,
        }
    }

    #[test]
    fn test_defaults() {
        let config = args().into_config().unwrap();
        assert!(config.layout.is_none());
        assert_eq!(config.format, OutputFormat::Outline);
        assert_eq!(config.orientation, None);
    }

    #[test]
    fn test_orientation_override() {
        let config = CliArgs {
            orientation: Some("vertical".to_string()),
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.orientation, Some(Orientation::Vertical));
    }

    #[test]
    fn test_invalid_orientation_is_rejected() {
        let result = CliArgs {
            orientation: Some("diagonal".to_string()),
            ..args()
        }
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_from_argv() {
        let args = CliArgs::parse_from(["treedock", "layout.yaml", "--format", "json"]);
        assert_eq!(args.layout, Some(PathBuf::from("layout.yaml")));
        assert_eq!(args.format, OutputFormat::Json);
    }
}
