//! Model connector - pins one panel's input to another panel's model
//!
//! Pinning is a two-phase protocol:
//!
//! 1. `start_pinning` records the initiating panel's model as the *binder* and
//!    flags every subscriber that produces one of the initiator's inputs.
//! 2. `pin_to_model` binds the binder's input to the chosen model and clears
//!    all flags; `clear_pin_status` cancels instead.
//!
//! Between the two phases the connector is `Pinning`; otherwise it is `Idle`.

use std::collections::HashMap;

use super::model_ptr::{ModelId, ModelStore};
use crate::error::LayoutError;

// ============================================================================
// Collaborator Traits
// ============================================================================

/// A panel-side participant in the pin protocol
pub trait Subscriber {
    /// Names of the inputs the panel consumes
    fn inputs(&self) -> &[String];
    /// Names of the outputs the panel produces
    fn outputs(&self) -> &[String];
    /// Show or hide the panel's pin target indicator
    fn set_pin_status(&mut self, pin: bool);
}

/// Resolves a window identity to the input names it declares
pub trait WindowMapper {
    fn inputs_for(&self, window: &str) -> Vec<String>;
}

/// Window mapper backed by a fixed table
#[derive(Debug, Clone, Default)]
pub struct StaticWindowMapper {
    inputs: HashMap<String, Vec<String>>,
}

impl StaticWindowMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: impl Into<String>, inputs: &[&str]) -> Self {
        self.insert(window, inputs.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn insert(&mut self, window: impl Into<String>, inputs: Vec<String>) {
        self.inputs.insert(window.into(), inputs);
    }
}

impl WindowMapper for StaticWindowMapper {
    fn inputs_for(&self, window: &str) -> Vec<String> {
        self.inputs.get(window).cloned().unwrap_or_default()
    }
}

// ============================================================================
// Pin Indicator
// ============================================================================

/// Standard subscriber: the pin overlay attached to a panel
#[derive(Debug, Clone, PartialEq)]
pub struct PinIndicator {
    /// Model of the panel this indicator belongs to
    pub model: ModelId,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    /// Whether the overlay is shown
    pinning: bool,
}

impl PinIndicator {
    pub fn new(model: ModelId, inputs: Vec<String>, outputs: Vec<String>) -> Self {
        Self {
            model,
            inputs,
            outputs,
            pinning: false,
        }
    }

    pub fn is_pinning(&self) -> bool {
        self.pinning
    }
}

impl Subscriber for PinIndicator {
    fn inputs(&self) -> &[String] {
        &self.inputs
    }

    fn outputs(&self) -> &[String] {
        &self.outputs
    }

    fn set_pin_status(&mut self, pin: bool) {
        self.pinning = pin;
    }
}

// ============================================================================
// Connector
// ============================================================================

/// Handle returned by `subscribe`; ids are never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Connector state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Idle,
    Pinning(ModelId),
}

#[derive(Debug, Clone)]
pub struct ModelConnector<S: Subscriber> {
    /// Registered subscribers in registration order
    subscribers: Vec<(SubscriptionId, S)>,
    binder: Option<ModelId>,
    next_subscription_id: u64,
}

impl<S: Subscriber> Default for ModelConnector<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscriber> ModelConnector<S> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            binder: None,
            next_subscription_id: 1,
        }
    }

    pub fn state(&self) -> PinState {
        match self.binder {
            Some(model) => PinState::Pinning(model),
            None => PinState::Idle,
        }
    }

    /// Model awaiting a pin target, if a pin is in progress
    pub fn binder(&self) -> Option<ModelId> {
        self.binder
    }

    /// Register a subscriber
    pub fn subscribe(&mut self, sub: S) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscribers.push((id, sub));
        tracing::debug!(?id, "Subscriber registered");
        id
    }

    /// Remove exactly the registration identified by `id`.
    ///
    /// Returns the subscriber, or `None` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Option<S> {
        let index = self.subscribers.iter().position(|(sid, _)| *sid == id)?;
        tracing::debug!(?id, "Subscriber removed");
        Some(self.subscribers.remove(index).1)
    }

    pub fn get(&self, id: SubscriptionId) -> Option<&S> {
        self.subscribers
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, sub)| sub)
    }

    /// Subscribers in registration order
    pub fn subscribers(&self) -> impl Iterator<Item = (SubscriptionId, &S)> {
        self.subscribers.iter().map(|(id, sub)| (*id, sub))
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Begin pinning `model`, whose panel shows `window`.
    ///
    /// Every subscriber with an output named among the window's inputs is
    /// flagged as a pin target; the rest keep their current status. A pin
    /// already in progress is cleared first so no stale flags survive.
    pub fn start_pinning(&mut self, model: ModelId, window: &str, mapper: &impl WindowMapper) {
        if self.binder.is_some() {
            tracing::debug!("Replacing in-progress pin");
            self.clear_pin_status();
        }

        let inputs = mapper.inputs_for(window);
        self.binder = Some(model);

        let mut flagged = 0;
        for (_, sub) in &mut self.subscribers {
            if intersects(&inputs, sub.outputs()) {
                sub.set_pin_status(true);
                flagged += 1;
            }
        }
        tracing::debug!(?model, window, flagged, "Started pinning");
    }

    /// Bind the binder's input to `model` and return to `Idle`.
    ///
    /// Fails with `InvalidState` when no pin is in progress; the connector is
    /// left untouched in that case.
    pub fn pin_to_model(
        &mut self,
        model: ModelId,
        models: &mut ModelStore,
    ) -> Result<(), LayoutError> {
        let binder = self
            .binder
            .ok_or(LayoutError::InvalidState("pin_to_model called while idle"))?;
        models.set_input(binder, model)?;
        tracing::debug!(?binder, ?model, "Pinned model");
        self.clear_pin_status();
        Ok(())
    }

    /// Reset every subscriber's status and drop the binder
    pub fn clear_pin_status(&mut self) {
        for (_, sub) in &mut self.subscribers {
            sub.set_pin_status(false);
        }
        self.binder = None;
    }
}

/// Whether two name lists share an entry (exact, case-sensitive)
fn intersects(inputs: &[String], outputs: &[String]) -> bool {
    inputs.iter().any(|name| outputs.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_intersects_is_case_sensitive() {
        assert!(intersects(&names(&["x"]), &names(&["y", "x"])));
        assert!(!intersects(&names(&["X"]), &names(&["x"])));
        assert!(!intersects(&[], &names(&["x"])));
    }

    #[test]
    fn test_static_mapper_unknown_window_has_no_inputs() {
        let mapper = StaticWindowMapper::new().with_window("chart", &["series"]);
        assert_eq!(mapper.inputs_for("chart"), names(&["series"]));
        assert!(mapper.inputs_for("map").is_empty());
    }

    #[test]
    fn test_state_follows_binder() {
        let mut connector: ModelConnector<PinIndicator> = ModelConnector::new();
        let mapper = StaticWindowMapper::new();
        assert_eq!(connector.state(), PinState::Idle);
        connector.start_pinning(ModelId(7), "chart", &mapper);
        assert_eq!(connector.state(), PinState::Pinning(ModelId(7)));
        connector.clear_pin_status();
        assert_eq!(connector.state(), PinState::Idle);
    }
}
