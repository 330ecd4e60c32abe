//! Opaque model handles
//!
//! Each leaf panel owns a data-binding model. The layout core never inspects a
//! model's value; it only tracks identity and which other model feeds its
//! input. Handles live in a `ModelStore` and are referenced by `ModelId`.

use std::collections::HashMap;

use crate::error::LayoutError;

/// Unique identifier for a model handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u64);

/// A panel's data-binding handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPtr {
    pub id: ModelId,
    /// The model this one reads its input from (set by pinning)
    input: Option<ModelId>,
}

impl ModelPtr {
    pub fn new(id: ModelId) -> Self {
        Self { id, input: None }
    }

    pub fn input(&self) -> Option<ModelId> {
        self.input
    }

    pub fn set_input(&mut self, value: ModelId) {
        self.input = Some(value);
    }
}

/// Arena of model handles shared by the tree, panels and the pin coordinator
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    models: HashMap<ModelId, ModelPtr>,
    next_model_id: u64,
}

impl ModelStore {
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
            next_model_id: 1,
        }
    }

    /// Allocate a fresh handle
    pub fn allocate(&mut self) -> ModelId {
        // Default-constructed stores start at 0; skip it so ids stay non-zero
        self.next_model_id = self.next_model_id.max(1);
        let id = ModelId(self.next_model_id);
        self.next_model_id += 1;
        self.models.insert(id, ModelPtr::new(id));
        id
    }

    pub fn get(&self, id: ModelId) -> Option<&ModelPtr> {
        self.models.get(&id)
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.models.contains_key(&id)
    }

    /// Bind `model`'s input to `value`
    pub fn set_input(&mut self, model: ModelId, value: ModelId) -> Result<(), LayoutError> {
        if !self.models.contains_key(&value) {
            return Err(LayoutError::ModelNotFound(value));
        }
        let ptr = self
            .models
            .get_mut(&model)
            .ok_or(LayoutError::ModelNotFound(model))?;
        ptr.set_input(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_returns_distinct_ids() {
        let mut store = ModelStore::default();
        let a = store.allocate();
        let b = store.allocate();
        assert_ne!(a, b);
        assert_eq!(a, ModelId(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_set_input_requires_both_models() {
        let mut store = ModelStore::new();
        let a = store.allocate();
        assert_eq!(
            store.set_input(a, ModelId(99)),
            Err(LayoutError::ModelNotFound(ModelId(99)))
        );
        let b = store.allocate();
        store.set_input(a, b).unwrap();
        assert_eq!(store.get(a).unwrap().input(), Some(b));
        assert_eq!(store.get(b).unwrap().input(), None);
    }
}
