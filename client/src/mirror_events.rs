use std::vec::IntoIter;

use log::warn;

use remote_inspector_shared::{ComponentId, EntityId};

use crate::MirrorAnomaly;

/// Observable changes to the mirror, in the order they were applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MirrorEvent {
    Spawn(EntityId),
    Despawn(EntityId),
    InsertComponent(EntityId, ComponentId),
    UpdateComponent(EntityId, ComponentId),
    DisableComponent(EntityId, ComponentId),
    RemoveComponent(EntityId, ComponentId),
    Rename(EntityId, String),
    Reparent(EntityId, Option<EntityId>),
    CatalogUpdated,
}

impl MirrorEvent {
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            Self::Spawn(entity)
            | Self::Despawn(entity)
            | Self::InsertComponent(entity, _)
            | Self::UpdateComponent(entity, _)
            | Self::DisableComponent(entity, _)
            | Self::RemoveComponent(entity, _)
            | Self::Rename(entity, _)
            | Self::Reparent(entity, _) => Some(*entity),
            Self::CatalogUpdated => None,
        }
    }

    /// `true` for events that wrote a new slot value.
    pub fn is_write_to(&self, entity: &EntityId, component: &ComponentId) -> bool {
        match self {
            Self::InsertComponent(e, c) | Self::UpdateComponent(e, c) => e == entity && c == component,
            _ => false,
        }
    }
}

/// Everything one applied batch did to the mirror.
pub struct MirrorEvents {
    events: Vec<MirrorEvent>,
    anomalies: Vec<MirrorAnomaly>,
}

impl Default for MirrorEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorEvents {
    pub(crate) fn new() -> Self {
        Self {
            events: Vec::new(),
            anomalies: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.anomalies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MirrorEvent> {
        self.events.iter()
    }

    pub fn anomalies(&self) -> &[MirrorAnomaly] {
        &self.anomalies
    }

    pub fn for_entity<'a>(&'a self, entity: &'a EntityId) -> impl Iterator<Item = &'a MirrorEvent> {
        self.events
            .iter()
            .filter(move |event| event.entity().as_ref() == Some(entity))
    }

    /// How many times the slot `(entity, component)` was written in this batch.
    pub fn component_writes(&self, entity: &EntityId, component: &ComponentId) -> usize {
        self.events
            .iter()
            .filter(|event| event.is_write_to(entity, component))
            .count()
    }

    pub fn extend(&mut self, other: MirrorEvents) {
        self.events.extend(other.events);
        self.anomalies.extend(other.anomalies);
    }

    pub(crate) fn push(&mut self, event: MirrorEvent) {
        self.events.push(event);
    }

    pub(crate) fn push_anomaly(&mut self, anomaly: MirrorAnomaly) {
        warn!("{}", anomaly);
        self.anomalies.push(anomaly);
    }
}

impl IntoIterator for MirrorEvents {
    type Item = MirrorEvent;
    type IntoIter = IntoIter<MirrorEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
