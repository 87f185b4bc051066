use thiserror::Error;

use remote_inspector_shared::{EntityId, RequestId};

/// Protocol anomalies met while applying a stream batch
///
/// None of these abort a batch: the anomalous part of the event is skipped,
/// the anomaly is logged, and it is reported back in the batch's `MirrorEvents`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MirrorAnomaly {
    /// A brand-new entity arrived with `removes`; they were ignored
    #[error("Entity {entity} is new but its change carries {count} removes; ignoring them")]
    RemovesOnNewEntity {
        entity: EntityId,
        count: usize,
    },

    /// Mutation `kind` not understood by this client
    #[error("Unknown mutation kind for entity {entity}; mutation ignored")]
    UnknownMutationKind {
        entity: EntityId,
    },

    /// One event of a payload did not decode; the rest of the payload was still applied
    #[error("Stream event #{index} is malformed and was skipped: {reason}")]
    MalformedEvent {
        index: usize,
        reason: String,
    },

    /// Stream event `kind` not understood by this client
    #[error("Unknown stream event kind at batch index {index}; event ignored")]
    UnknownEventKind {
        index: usize,
    },

    /// The parent component's value could not be read as an entity id
    #[error("Parent component of entity {entity} does not hold an entity id: {reason}")]
    UnparsableParent {
        entity: EntityId,
        reason: String,
    },
}

/// Errors that can occur while queueing commands or matching their responses
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Too many commands are waiting to be sent or answered
    #[error("Command queue is full ({capacity} commands pending)")]
    QueueFull {
        capacity: usize,
    },

    /// A response arrived for a request that is not in flight
    #[error("No command in flight with request id {id}")]
    UnknownRequest {
        id: RequestId,
    },
}
