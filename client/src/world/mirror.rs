use std::collections::HashMap;

use remote_inspector_shared::{Catalog, ComponentId, ComponentSlot, EntityId};

use crate::{
    world::{
        display_name::DisplayNameResolver, entity_record::EntityRecord,
        hidden_markers::HiddenMarkers, value_cache::ValueCache,
    },
    MirrorConfig, MirrorEvent, MirrorEvents,
};

/// Client-side replica of the remote entity/component graph.
///
/// Only the reconciler writes to it. Readers see it between batches, never
/// half-way through one.
pub struct Mirror {
    pub(crate) config: MirrorConfig,
    pub(crate) hidden_markers: HiddenMarkers,
    pub(crate) entities: HashMap<EntityId, EntityRecord>,
    // `Some(None)` = known to have no parent; missing = not determined
    pub(crate) child_parent_map: HashMap<EntityId, Option<EntityId>>,
    pub(crate) entity_names: HashMap<EntityId, String>,
    pub(crate) component_value_cache: ValueCache,
}

impl Default for Mirror {
    fn default() -> Self {
        Self::new(MirrorConfig::default())
    }
}

impl Mirror {
    pub fn new(config: MirrorConfig) -> Self {
        let hidden_markers = HiddenMarkers::new(config.hidden_markers.iter().cloned());
        Self {
            config,
            hidden_markers,
            entities: HashMap::new(),
            child_parent_map: HashMap::new(),
            entity_names: HashMap::new(),
            component_value_cache: ValueCache::new(),
        }
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    // Snapshots

    pub fn entities(&self) -> &HashMap<EntityId, EntityRecord> {
        &self.entities
    }

    pub fn child_parent_map(&self) -> &HashMap<EntityId, Option<EntityId>> {
        &self.child_parent_map
    }

    pub fn entity_names(&self) -> &HashMap<EntityId, String> {
        &self.entity_names
    }

    pub fn component_value_cache(&self) -> &ValueCache {
        &self.component_value_cache
    }

    // Queries

    pub fn contains_entity(&self, entity: &EntityId) -> bool {
        self.entities.contains_key(entity)
    }

    pub fn entity(&self, entity: &EntityId) -> Option<&EntityRecord> {
        self.entities.get(entity)
    }

    pub fn component(&self, entity: &EntityId, component: &ComponentId) -> Option<&ComponentSlot> {
        self.entities.get(entity).and_then(|record| record.get(component))
    }

    pub fn display_name(&self, entity: &EntityId) -> Option<&str> {
        self.entity_names.get(entity).map(String::as_str)
    }

    /// `None` when the entity has no parent or its parent is not determined yet.
    pub fn parent_of(&self, entity: &EntityId) -> Option<EntityId> {
        self.child_parent_map.get(entity).copied().flatten()
    }

    /// Entities whose parent is `parent`, in ascending id order.
    pub fn children_of(&self, parent: &EntityId) -> Vec<EntityId> {
        let mut children: Vec<EntityId> = self
            .child_parent_map
            .iter()
            .filter(|(_, entry)| entry.as_ref() == Some(parent))
            .map(|(child, _)| *child)
            .collect();
        children.sort();
        children
    }

    /// Tracked, non-hidden entities without a known parent, in ascending id order.
    pub fn root_entities(&self, catalog: &Catalog) -> Vec<EntityId> {
        let mut roots: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|(entity, record)| {
                self.parent_of(entity).is_none() && !self.hidden_markers.in_record(catalog, record)
            })
            .map(|(entity, _)| *entity)
            .collect();
        roots.sort();
        roots
    }

    pub fn is_hidden(&self, catalog: &Catalog, entity: &EntityId) -> bool {
        self.entities
            .get(entity)
            .is_some_and(|record| self.hidden_markers.in_record(catalog, record))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Recomputes every cached display name against the current catalog.
    /// Emits a `Rename` for each name that changed.
    pub fn refresh_display_names(&mut self, catalog: &Catalog) -> MirrorEvents {
        let mut events = MirrorEvents::new();
        let resolver = DisplayNameResolver::new(&self.config, catalog);
        for (entity, record) in &self.entities {
            let name = resolver.resolve(record);
            if self.entity_names.get(entity) != Some(&name) {
                events.push(MirrorEvent::Rename(*entity, name.clone()));
                self.entity_names.insert(*entity, name);
            }
        }
        events
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.child_parent_map.clear();
        self.entity_names.clear();
        self.component_value_cache = ValueCache::new();
    }
}
