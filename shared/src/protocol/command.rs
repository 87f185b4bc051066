use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ComponentId, EntityId, ProtocolError};

pub type RequestId = u32;

/// Commands the client asks the remote side to execute.
///
/// Serialized as `{"method": "...", "params": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "method", content = "params")]
pub enum InspectorCommand {
    UpdateComponent {
        entity: EntityId,
        component: ComponentId,
        value: Value,
    },
    /// Disables an enabled component, or re-enables a disabled one.
    ToggleComponent {
        entity: EntityId,
        component: ComponentId,
    },
    RemoveComponent {
        entity: EntityId,
        component: ComponentId,
    },
    InsertComponent {
        entity: EntityId,
        component: ComponentId,
        value: Value,
    },
    DespawnEntity {
        entity: EntityId,
        kind: DespawnKind,
    },
    ToggleVisibility {
        entity: EntityId,
    },
    /// `parent: None` detaches the entity from its current parent.
    ReparentEntity {
        entity: EntityId,
        parent: Option<EntityId>,
    },
    SpawnEntity {
        parent: Option<EntityId>,
    },
}

impl InspectorCommand {
    /// The entity the command acts on, if it targets an existing one.
    pub fn target(&self) -> Option<EntityId> {
        match self {
            Self::UpdateComponent { entity, .. }
            | Self::ToggleComponent { entity, .. }
            | Self::RemoveComponent { entity, .. }
            | Self::InsertComponent { entity, .. }
            | Self::DespawnEntity { entity, .. }
            | Self::ToggleVisibility { entity }
            | Self::ReparentEntity { entity, .. } => Some(*entity),
            Self::SpawnEntity { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DespawnKind {
    /// The entity and all of its descendants.
    Recursive,
    /// Only the descendants; the entity itself stays.
    Descendant,
}

/// A command tagged with the id its response will carry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub id: RequestId,
    #[serde(flatten)]
    pub command: InspectorCommand,
}

impl CommandRequest {
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(|err| ProtocolError::InvalidJson {
            reason: err.to_string(),
        })
    }
}

/// The remote side's verdict on one request. Only pass/fail is interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub id: RequestId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn succeeded(id: RequestId) -> Self {
        Self { id, error: None }
    }

    pub fn failed(id: RequestId, reason: impl Into<String>) -> Self {
        Self {
            id,
            error: Some(reason.into()),
        }
    }

    pub fn from_json(payload: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(payload).map_err(|err| ProtocolError::InvalidResponse {
            reason: err.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
