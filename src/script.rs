//! Scripted layout sessions
//!
//! A script is a YAML (or JSON) list of steps that address panels by name and
//! are replayed through `update()`, exactly as interactive gestures would be:
//!
//! ```yaml
//! - op: drop
//!   source: chart
//!   target: table
//!   direction: east
//! - op: open
//!   window: map
//!   target: chart
//!   direction: south
//! - op: start_pinning
//!   panel: chart
//! - op: pin
//!   panel: table
//! ```

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::messages::{LayoutMsg, Msg, PinMsg};
use crate::model::{AppModel, Direction, DragInfo, Leaf, NodeId};
use crate::update::update;

/// One replayable user gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Drag an existing panel onto another
    Drop {
        source: String,
        target: String,
        direction: Direction,
    },
    /// Drag a new panel for `window` onto an existing one
    Open {
        window: String,
        target: String,
        direction: Direction,
    },
    /// Close a panel
    Close { panel: String },
    /// Start pinning the named panel's input
    StartPinning { panel: String },
    /// Pin the binder to the named panel's model
    Pin { panel: String },
    /// Cancel the pin in progress
    ClearPins,
    /// Relay a generic panel action
    Action { panel: String, action: String },
}

impl Step {
    /// Resolve panel names against the current model and build the message.
    ///
    /// `Open` creates the new (detached) panel as a side effect.
    pub fn to_msg(&self, model: &mut AppModel) -> Result<Msg> {
        let msg = match self {
            Step::Drop {
                source,
                target,
                direction,
            } => Msg::Layout(LayoutMsg::Drop {
                target: find(model, target)?,
                drag: DragInfo::new(find(model, source)?, *direction),
            }),
            Step::Open {
                window,
                target,
                direction,
            } => {
                let target = find(model, target)?;
                let source = model.layout.new_detached_leaf(Leaf::new(window.clone()));
                model
                    .layout
                    .activate(source, &mut model.models)
                    .context("Failed to activate new panel")?;
                Msg::Layout(LayoutMsg::Drop {
                    target,
                    drag: DragInfo::new(source, *direction),
                })
            }
            Step::Close { panel } => Msg::Layout(LayoutMsg::Close(find(model, panel)?)),
            Step::StartPinning { panel } => Msg::Pin(PinMsg::StartPinning(find(model, panel)?)),
            Step::Pin { panel } => {
                let node = find(model, panel)?;
                let target = model
                    .layout
                    .model_of(node)
                    .ok_or_else(|| anyhow!("Panel '{}' has no model", panel))?;
                Msg::Pin(PinMsg::PinToModel(target))
            }
            Step::ClearPins => Msg::Pin(PinMsg::ClearPinStatus),
            Step::Action { panel, action } => Msg::Layout(LayoutMsg::Action {
                node: find(model, panel)?,
                action: action.clone(),
            }),
        };
        Ok(msg)
    }
}

fn find(model: &AppModel, name: &str) -> Result<NodeId> {
    model
        .layout
        .find_leaf(name)
        .ok_or_else(|| anyhow!("No panel named '{}'", name))
}

/// Load a script, choosing JSON or YAML by file extension
pub fn load_script(path: &Path) -> Result<Vec<Step>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON script {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML script {}", path.display()))
    }
}

/// Replay steps in order, stopping at the first rejected one.
///
/// Panels that appear along the way get pin indicators, and indicators of
/// closed panels are torn down, so pin steps see the live set of panels.
pub fn run_script(model: &mut AppModel, steps: &[Step]) -> Result<Vec<Cmd>> {
    let mut cmds = Vec::new();
    model.subscribe_all_panels();

    for (i, step) in steps.iter().enumerate() {
        let msg = step
            .to_msg(model)
            .with_context(|| format!("Step {} ({:?})", i + 1, step))?;
        tracing::debug!(step = i + 1, ?msg, "Replaying step");

        let cmd = update(model, msg);
        if let Some(e) = model.last_error.take() {
            bail!("Step {} ({:?}) was rejected: {}", i + 1, step, e);
        }
        model.subscribe_all_panels();
        cmds.extend(cmd);
    }
    Ok(cmds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_parse_from_yaml() {
        let yaml = r#"
- op: drop
  source: a
  target: b
  direction: east
- op: clear_pins
- op: close
  panel: a
"#;
        let steps: Vec<Step> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Drop {
                    source: "a".into(),
                    target: "b".into(),
                    direction: Direction::East,
                },
                Step::ClearPins,
                Step::Close { panel: "a".into() },
            ]
        );
    }

    #[test]
    fn test_steps_parse_from_json() {
        let json = r#"[{"op": "start_pinning", "panel": "chart"}, {"op": "pin", "panel": "table"}]"#;
        let steps: Vec<Step> = serde_json::from_str(json).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps[0],
            Step::StartPinning {
                panel: "chart".into()
            }
        );
    }
}
