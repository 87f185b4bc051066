use std::collections::HashMap;

use serde_json::Value;

use remote_inspector_shared::{ComponentId, ComponentSlot, EntityId};

/// Last-applied form of one component: its serialized value plus the
/// disabled bit. Two equal signatures mean reapplying would change nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSignature {
    disabled: bool,
    serialized: String,
}

impl ValueSignature {
    pub fn new(disabled: bool, value: &Value) -> Self {
        Self {
            disabled,
            serialized: value.to_string(),
        }
    }

    pub fn of_slot(slot: &ComponentSlot) -> Self {
        Self::new(slot.is_disabled(), slot.value())
    }
}

/// Per-entity signatures of every mirrored component, used only to drop
/// changes the remote re-emits without modification.
#[derive(Default)]
pub struct ValueCache {
    values: HashMap<EntityId, HashMap<ComponentId, ValueSignature>>,
}

impl ValueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when `signature` matches what was last applied.
    pub fn is_unchanged(
        &self,
        entity: &EntityId,
        component: &ComponentId,
        signature: &ValueSignature,
    ) -> bool {
        self.values
            .get(entity)
            .and_then(|components| components.get(component))
            .is_some_and(|cached| cached == signature)
    }

    pub fn store(&mut self, entity: EntityId, component: ComponentId, signature: ValueSignature) {
        self.values.entry(entity).or_default().insert(component, signature);
    }

    pub fn get(&self, entity: &EntityId, component: &ComponentId) -> Option<&ValueSignature> {
        self.values.get(entity).and_then(|components| components.get(component))
    }

    pub fn forget_component(&mut self, entity: &EntityId, component: &ComponentId) {
        if let Some(components) = self.values.get_mut(entity) {
            components.remove(component);
        }
    }

    pub fn forget_entity(&mut self, entity: &EntityId) {
        self.values.remove(entity);
    }

    pub fn contains_entity(&self, entity: &EntityId) -> bool {
        self.values.contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
