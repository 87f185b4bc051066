use std::collections::{hash_map, HashMap};

use remote_inspector_shared::{ComponentId, ComponentSlot};

/// Mirrored components of one entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityRecord {
    components: HashMap<ComponentId, ComponentSlot>,
}

impl EntityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, component: &ComponentId) -> Option<&ComponentSlot> {
        self.components.get(component)
    }

    pub fn has_component(&self, component: &ComponentId) -> bool {
        self.components.contains_key(component)
    }

    pub fn component_ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.keys()
    }

    /// Component ids in ascending order.
    pub fn sorted_component_ids(&self) -> Vec<ComponentId> {
        let mut ids: Vec<ComponentId> = self.components.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> hash_map::Iter<'_, ComponentId, ComponentSlot> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns `true` if the component was not present before.
    pub(crate) fn insert_component(&mut self, component: ComponentId, slot: ComponentSlot) -> bool {
        self.components.insert(component, slot).is_none()
    }

    pub(crate) fn get_mut(&mut self, component: &ComponentId) -> Option<&mut ComponentSlot> {
        self.components.get_mut(component)
    }

    pub(crate) fn remove_component(&mut self, component: &ComponentId) -> Option<ComponentSlot> {
        self.components.remove(component)
    }
}

impl FromIterator<(ComponentId, ComponentSlot)> for EntityRecord {
    fn from_iter<T: IntoIterator<Item = (ComponentId, ComponentSlot)>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}
