use anyhow::{anyhow, Context, Result};
use clap::Parser;

use treedock::cli::{CliArgs, OutputFormat};
use treedock::config::DockConfig;
use treedock::model::{AppModel, LayoutDocument};
use treedock::script::{load_script, run_script};

fn main() -> Result<()> {
    treedock::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    let mut config = match &startup.config {
        Some(path) => DockConfig::load_from(path),
        None => DockConfig::load(),
    };
    if let Some(orientation) = startup.orientation {
        config.root_orientation = orientation;
    }

    let doc = match &startup.layout {
        Some(path) => LayoutDocument::load(path)?,
        None => LayoutDocument::leaf("main"),
    };

    let mut model = AppModel::new(&doc, config);

    if let Some(path) = &startup.script {
        let steps = load_script(path)?;
        let cmds = run_script(&mut model, &steps)
            .with_context(|| format!("Failed to replay {}", path.display()))?;
        tracing::info!(steps = steps.len(), commands = cmds.len(), "Script replayed");
    }

    let output = match startup.format {
        OutputFormat::Outline => model.layout.render_outline(),
        OutputFormat::Yaml => serde_yaml::to_string(&model.layout.to_document())?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&model.layout.to_document())?;
            json.push('\n');
            json
        }
    };
    print!("{}", output);
    Ok(())
}
