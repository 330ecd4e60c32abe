//! Pin message handlers

use super::layout::record;
use crate::commands::Cmd;
use crate::error::LayoutError;
use crate::messages::PinMsg;
use crate::model::AppModel;

/// Handle pin protocol messages
pub fn update_pin(model: &mut AppModel, msg: PinMsg) -> Option<Cmd> {
    match msg {
        PinMsg::Subscribe(node) => {
            let id = model.subscribe_panel(node);
            if id.is_none() {
                tracing::warn!(?node, "Cannot subscribe a node without a panel model");
            }
            id.map(Cmd::Subscribed)
        }

        PinMsg::Unsubscribe(id) => {
            // Tearing down an indicator twice is harmless
            model.connector.unsubscribe(id).map(|_| Cmd::Redraw)
        }

        PinMsg::StartPinning(node) => {
            let target = model
                .layout
                .node(node)
                .and_then(|n| n.leaf())
                .and_then(|leaf| {
                    leaf.model
                        .map(|m| (m, leaf.window.clone().unwrap_or_default()))
                });
            let result = target.ok_or_else(|| {
                LayoutError::InvalidState("pinning requires an activated panel")
            });
            let (model_id, window) = record(model, result)?;

            let mapper = model.config.window_mapper();
            model.connector.start_pinning(model_id, &window, &mapper);
            Some(Cmd::Redraw)
        }

        PinMsg::PinToModel(target) => {
            let result = model.connector.pin_to_model(target, &mut model.models);
            record(model, result)?;
            Some(Cmd::Redraw)
        }

        PinMsg::ClearPinStatus => {
            model.connector.clear_pin_status();
            Some(Cmd::Redraw)
        }
    }
}
