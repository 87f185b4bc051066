use log::debug;

use remote_inspector_shared::{
    Catalog, ComponentSlot, EntityId, EntityMutation, MutationChange, MutationRemove,
};

use crate::{
    world::{
        display_name::DisplayNameResolver, entity_record::EntityRecord, mirror::Mirror,
        value_cache::ValueSignature,
    },
    MirrorAnomaly, MirrorEvent, MirrorEvents,
};

impl Mirror {
    /// Applies one entity-scoped mutation.
    ///
    /// Never fails: anomalous parts are skipped and reported through `events`.
    pub fn apply_mutation(
        &mut self,
        catalog: &Catalog,
        entity: EntityId,
        mutation: EntityMutation,
        events: &mut MirrorEvents,
    ) {
        match mutation {
            EntityMutation::Remove => self.remove_entity(&entity, events),
            EntityMutation::Change { changes, removes } => {
                if self.entities.contains_key(&entity) {
                    self.change_entity(catalog, entity, changes, removes, events);
                } else {
                    self.spawn_entity(catalog, entity, changes, removes, events);
                }
            }
            EntityMutation::Unknown => {
                events.push_anomaly(MirrorAnomaly::UnknownMutationKind { entity });
            }
        }
    }

    /// Unknown -> Tracked
    fn spawn_entity(
        &mut self,
        catalog: &Catalog,
        entity: EntityId,
        changes: Vec<MutationChange>,
        removes: Vec<MutationRemove>,
        events: &mut MirrorEvents,
    ) {
        if !removes.is_empty() {
            events.push_anomaly(MirrorAnomaly::RemovesOnNewEntity {
                entity,
                count: removes.len(),
            });
        }

        let hidden = self.hidden_markers.in_changes(catalog, &changes);
        let parent_component = catalog.component_id(&self.config.parent_type);

        events.push(MirrorEvent::Spawn(entity));

        let mut record = EntityRecord::new();
        let mut parent = None;
        for change in changes {
            if !hidden && Some(change.component) == parent_component {
                parent = if change.disabled {
                    None
                } else {
                    read_parent(&entity, &change.value, events)
                };
            }

            self.component_value_cache.store(
                entity,
                change.component,
                ValueSignature::new(change.disabled, &change.value),
            );
            record.insert_component(change.component, ComponentSlot::new(change.disabled, change.value));
            events.push(MirrorEvent::InsertComponent(entity, change.component));
        }

        if !hidden {
            self.child_parent_map.insert(entity, parent);
            if parent.is_some() {
                events.push(MirrorEvent::Reparent(entity, parent));
            }
        }

        let name = DisplayNameResolver::new(&self.config, catalog).resolve(&record);
        events.push(MirrorEvent::Rename(entity, name.clone()));
        self.entity_names.insert(entity, name);
        self.entities.insert(entity, record);
    }

    /// Tracked -> Tracked. Removes are applied before changes, so a component
    /// removed and re-added by the same mutation ends up present.
    fn change_entity(
        &mut self,
        catalog: &Catalog,
        entity: EntityId,
        changes: Vec<MutationChange>,
        removes: Vec<MutationRemove>,
        events: &mut MirrorEvents,
    ) {
        let Some(record) = self.entities.get_mut(&entity) else {
            return;
        };
        let parent_component = catalog.component_id(&self.config.parent_type);
        let hidden = self.hidden_markers.in_changes(catalog, &changes);
        let mut rename = false;

        for remove in removes {
            let component = remove.component;
            if Some(component) == parent_component {
                let previous = self.child_parent_map.insert(entity, None);
                if previous.flatten().is_some() {
                    events.push(MirrorEvent::Reparent(entity, None));
                }
            }

            let Some(slot) = record.get_mut(&component) else {
                debug!("entity {} has no component {} to remove", entity, component);
                continue;
            };

            if remove.was_disabled {
                if slot.is_disabled() {
                    continue;
                }
                slot.disable();
                self.component_value_cache
                    .store(entity, component, ValueSignature::of_slot(slot));
                events.push(MirrorEvent::DisableComponent(entity, component));
            } else {
                record.remove_component(&component);
                self.component_value_cache.forget_component(&entity, &component);
                events.push(MirrorEvent::RemoveComponent(entity, component));
                rename = true;
            }
        }

        for change in changes {
            let component = change.component;
            let signature = ValueSignature::new(change.disabled, &change.value);
            if self
                .component_value_cache
                .is_unchanged(&entity, &component, &signature)
            {
                continue;
            }

            if !hidden && Some(component) == parent_component {
                let parent = read_parent(&entity, &change.value, events);
                self.child_parent_map.insert(entity, parent);
                events.push(MirrorEvent::Reparent(entity, parent));
            }

            let inserted = record.insert_component(component, ComponentSlot::new(change.disabled, change.value));
            self.component_value_cache.store(entity, component, signature);
            if inserted {
                rename = true;
                events.push(MirrorEvent::InsertComponent(entity, component));
            } else {
                events.push(MirrorEvent::UpdateComponent(entity, component));
            }
        }

        if rename {
            let name = DisplayNameResolver::new(&self.config, catalog).resolve(record);
            if self.entity_names.get(&entity) != Some(&name) {
                events.push(MirrorEvent::Rename(entity, name.clone()));
            }
            self.entity_names.insert(entity, name);
        }
    }

    /// Tracked -> Unknown. All four maps drop the entity together.
    fn remove_entity(&mut self, entity: &EntityId, events: &mut MirrorEvents) {
        if self.entities.remove(entity).is_none() {
            debug!("remove for untracked entity {}; nothing to do", entity);
            return;
        }
        self.child_parent_map.remove(entity);
        self.entity_names.remove(entity);
        self.component_value_cache.forget_entity(entity);

        events.push(MirrorEvent::Despawn(*entity));
    }
}

fn read_parent(
    entity: &EntityId,
    value: &serde_json::Value,
    events: &mut MirrorEvents,
) -> Option<EntityId> {
    match EntityId::from_value(value) {
        Ok(parent) => Some(parent),
        Err(err) => {
            events.push_anomaly(MirrorAnomaly::UnparsableParent {
                entity: *entity,
                reason: err.to_string(),
            });
            None
        }
    }
}
