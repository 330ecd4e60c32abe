//! Layout message handlers (drops, closing panels, panel actions)

use crate::commands::Cmd;
use crate::error::LayoutError;
use crate::messages::LayoutMsg;
use crate::model::AppModel;

/// Handle layout messages
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::Drop { target, drag } => {
            let result = model.layout.drop_panel(target, drag);
            match record(model, result)? {
                Some(inserted) => {
                    // The copy carries the moved panel's model; activation only
                    // fills in whatever is still unset.
                    let _ = model.layout.activate(inserted, &mut model.models);
                    Some(Cmd::Redraw)
                }
                None => None,
            }
        }

        LayoutMsg::Close(node) => {
            let result = model.layout.close_panel(node);
            if !record(model, result)? {
                return None;
            }
            let pruned = model.prune_subscriptions();
            if pruned > 0 {
                tracing::debug!(pruned, "Removed indicators of closed panels");
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::Activate(node) => {
            let result = model.layout.activate(node, &mut model.models);
            record(model, result)?;
            Some(Cmd::Redraw)
        }

        LayoutMsg::Action { node, action } => Some(Cmd::PanelAction { node, action }),
    }
}

/// Store the outcome of an operation on the model; rejected operations leave
/// the tree untouched and produce no command.
pub(crate) fn record<T>(model: &mut AppModel, result: Result<T, LayoutError>) -> Option<T> {
    match result {
        Ok(value) => {
            model.last_error = None;
            Some(value)
        }
        Err(e) => {
            tracing::warn!("Layout operation rejected: {}", e);
            model.last_error = Some(e);
            None
        }
    }
}
