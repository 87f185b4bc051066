use std::collections::HashMap;

use log::debug;

use remote_inspector_shared::{
    decode_events, Catalog, CommandRequest, CommandResponse, ComponentId, ComponentName, EntityId,
    InspectorCommand, ProtocolError, RequestId, StreamEvent,
};

use crate::{
    command::command_queue::{CommandOutcome, CommandQueue},
    world::{entity_record::EntityRecord, mirror::Mirror},
    ClientConfig, CommandError, MirrorAnomaly, MirrorEvent, MirrorEvents,
};

/// Client half of the inspector stream.
///
/// Owns the catalog and the mirror exclusively. Each batch runs to completion
/// before the next one is accepted, so readers only ever observe the state
/// between batches.
pub struct InspectorClient {
    catalog: Catalog,
    mirror: Mirror,
    commands: CommandQueue,
}

impl Default for InspectorClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl InspectorClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            mirror: Mirror::new(config.mirror),
            commands: CommandQueue::new(config.max_pending_commands),
        }
    }

    // Incoming stream

    /// Decodes a JSON payload and applies it as one batch, in payload order.
    ///
    /// Only a payload that is not an event object or array at all is rejected.
    /// An individual event that fails to decode is skipped and recorded as a
    /// `MalformedEvent` anomaly; the events around it are still applied.
    pub fn receive_payload(&mut self, payload: &str) -> Result<MirrorEvents, ProtocolError> {
        let decoded = decode_events(payload)?;

        let mut mirror_events = MirrorEvents::new();
        for (index, event) in decoded.into_iter().enumerate() {
            match event {
                Ok(event) => self.process_event(index, event, &mut mirror_events),
                Err(err) => mirror_events.push_anomaly(MirrorAnomaly::MalformedEvent {
                    index,
                    reason: malformed_reason(err),
                }),
            }
        }
        Ok(mirror_events)
    }

    /// Applies an ordered batch of events, in array order.
    pub fn receive_events(&mut self, events: impl IntoIterator<Item = StreamEvent>) -> MirrorEvents {
        let mut mirror_events = MirrorEvents::new();
        for (index, event) in events.into_iter().enumerate() {
            self.process_event(index, event, &mut mirror_events);
        }
        mirror_events
    }

    fn process_event(&mut self, index: usize, event: StreamEvent, events: &mut MirrorEvents) {
        match event {
            StreamEvent::TypeRegistry { types } => {
                self.catalog.register_types(types);
                events.push(MirrorEvent::CatalogUpdated);
            }
            StreamEvent::Component { components } => {
                self.catalog.register_components(components);
                events.push(MirrorEvent::CatalogUpdated);
            }
            StreamEvent::Entity { entity, mutation } => {
                self.mirror.apply_mutation(&self.catalog, entity, mutation, events);
            }
            StreamEvent::Schedules { schedules } => {
                debug!("ignoring {} schedules", schedules.len());
            }
            StreamEvent::Unknown => {
                events.push_anomaly(MirrorAnomaly::UnknownEventKind { index });
            }
        }
    }

    /// Discards everything learnt from the stream so far, plus pending commands.
    pub fn reset(&mut self) {
        self.catalog = Catalog::new();
        self.mirror.clear();
        self.commands.clear();
    }

    // Queries

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    pub fn resolve_component_name(&self, component: &ComponentId) -> ComponentName {
        self.catalog.resolve_component_name(component)
    }

    /// Short name of a component, or `Component {id}` when unresolved.
    pub fn component_label(&self, component: &ComponentId) -> String {
        self.resolve_component_name(component).label()
    }

    pub fn entities(&self) -> &HashMap<EntityId, EntityRecord> {
        self.mirror.entities()
    }

    pub fn entity_names(&self) -> &HashMap<EntityId, String> {
        self.mirror.entity_names()
    }

    pub fn child_parent_map(&self) -> &HashMap<EntityId, Option<EntityId>> {
        self.mirror.child_parent_map()
    }

    pub fn display_name(&self, entity: &EntityId) -> Option<&str> {
        self.mirror.display_name(entity)
    }

    pub fn children_of(&self, parent: &EntityId) -> Vec<EntityId> {
        self.mirror.children_of(parent)
    }

    pub fn root_entities(&self) -> Vec<EntityId> {
        self.mirror.root_entities(&self.catalog)
    }

    pub fn is_hidden(&self, entity: &EntityId) -> bool {
        self.mirror.is_hidden(&self.catalog, entity)
    }

    /// Re-derives all display names, e.g. after catalog data arrived late.
    pub fn refresh_display_names(&mut self) -> MirrorEvents {
        self.mirror.refresh_display_names(&self.catalog)
    }

    // Outgoing commands

    pub fn send_command(&mut self, command: InspectorCommand) -> Result<RequestId, CommandError> {
        self.commands.send(command)
    }

    pub fn take_outgoing_commands(&mut self) -> Vec<CommandRequest> {
        self.commands.take_outgoing()
    }

    pub fn receive_command_response(
        &mut self,
        response: CommandResponse,
    ) -> Result<CommandOutcome, CommandError> {
        self.commands.receive_response(response)
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.pending_count()
    }
}

fn malformed_reason(err: ProtocolError) -> String {
    match err {
        ProtocolError::InvalidEvent { reason, .. } => reason,
        other => other.to_string(),
    }
}
