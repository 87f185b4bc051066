use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ComponentDefinition, EntityId, EntityMutation, ProtocolError, TypeDescriptor, TypeName,
};

/// One event of the inspector stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StreamEvent {
    TypeRegistry {
        types: Vec<(TypeName, TypeDescriptor)>,
    },
    Component {
        components: Vec<ComponentDefinition>,
    },
    Entity {
        entity: EntityId,
        mutation: EntityMutation,
    },
    Schedules {
        schedules: Vec<ScheduleInfo>,
    },
    /// Any `kind` this client does not understand.
    #[serde(other)]
    Unknown,
}

impl StreamEvent {
    pub fn entity(entity: EntityId, mutation: EntityMutation) -> Self {
        Self::Entity { entity, mutation }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TypeRegistry { .. } => "type_registry",
            Self::Component { .. } => "component",
            Self::Entity { .. } => "entity",
            Self::Schedules { .. } => "schedules",
            Self::Unknown => "unknown",
        }
    }
}

/// Schedule metadata. Carried through untouched; the mirror does not track it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleInfo(pub Value);

/// Decodes one stream payload: either a single event object or an array of
/// events, returned in payload order.
///
/// Only a payload that is not JSON, or not an object or array, fails as a
/// whole. Each array element is decoded on its own, so one malformed event
/// comes back as an `Err` in its slot and its siblings still decode.
pub fn decode_events(
    payload: &str,
) -> Result<Vec<Result<StreamEvent, ProtocolError>>, ProtocolError> {
    let value: Value = serde_json::from_str(payload).map_err(|err| ProtocolError::InvalidJson {
        reason: err.to_string(),
    })?;

    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| decode_event(index, item))
            .collect()),
        object @ Value::Object(_) => Ok(vec![decode_event(0, object)]),
        other => Err(ProtocolError::UnexpectedPayload {
            found: json_kind(&other),
        }),
    }
}

fn decode_event(index: usize, value: Value) -> Result<StreamEvent, ProtocolError> {
    serde_json::from_value(value).map_err(|err| ProtocolError::InvalidEvent {
        index,
        reason: err.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
