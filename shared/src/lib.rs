//! # Remote Inspector Shared
//! Vocabulary shared by everything that speaks the remote inspector stream:
//! entity and component ids, stream events, outbound commands, and the
//! append-only type/component catalog.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod catalog;
mod protocol;
mod types;
mod world;

pub use catalog::{Catalog, ComponentName, ComponentTable, TypeRegistry};
pub use protocol::{
    command::{
        CommandRequest, CommandResponse, DespawnKind, InspectorCommand, RequestId,
    },
    entity_mutation::{EntityMutation, MutationChange, MutationRemove},
    error::ProtocolError,
    stream_event::{decode_events, ScheduleInfo, StreamEvent},
};
pub use types::{ComponentId, TypeName};
pub use world::{
    component::{
        component_definition::ComponentDefinition, component_slot::ComponentSlot,
        type_descriptor::TypeDescriptor,
    },
    entity::{entity_id::EntityId, error::EntityIdError},
};
