//! # Remote Inspector Client
//! Consumes the remote inspector stream and keeps a faithful, queryable
//! mirror of the remote entity/component graph, including the parent/child
//! relation and a stable display name per entity.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use remote_inspector_shared::{
    decode_events, Catalog, CommandRequest, CommandResponse, ComponentDefinition, ComponentId,
    ComponentName, ComponentSlot, DespawnKind, EntityId, EntityMutation, InspectorCommand,
    MutationChange, MutationRemove, ProtocolError, RequestId, StreamEvent, TypeDescriptor,
    TypeName,
};

mod client;
mod client_config;
mod command;
mod error;
mod mirror_events;
mod world;

pub use client::InspectorClient;
pub use client_config::ClientConfig;
pub use command::command_queue::{CommandOutcome, CommandQueue};
pub use error::{CommandError, MirrorAnomaly};
pub use mirror_events::{MirrorEvent, MirrorEvents};
pub use world::{
    display_name::{DisplayNameResolver, FALLBACK_ENTITY_NAME},
    entity_record::EntityRecord,
    hidden_markers::HiddenMarkers,
    mirror::Mirror,
    mirror_config::{CommonComponent, MirrorConfig, NameFormatter},
    value_cache::{ValueCache, ValueSignature},
};
