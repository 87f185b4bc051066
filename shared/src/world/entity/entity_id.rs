use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::EntityIdError;

// EntityId
/// A remote entity: a 32-bit index and a 32-bit generation packed as
/// `index | generation << 32`. Ids that share an index but differ in
/// generation are distinct entities.
#[derive(PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct EntityId(u64);

impl EntityId {
    pub const fn new(index: u32, generation: u32) -> Self {
        Self(index as u64 | (generation as u64) << 32)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn to_bits(&self) -> u64 {
        self.0
    }

    pub const fn index(&self) -> u32 {
        self.0 as u32
    }

    pub const fn generation(&self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Interprets a mirrored component value as an entity pointer.
    ///
    /// Accepts the packed `u64` directly, or that number wrapped in single-element
    /// arrays / single-field objects (reflected tuple structs and named wrappers).
    pub fn from_value(value: &Value) -> Result<Self, EntityIdError> {
        match value {
            Value::Number(number) => number
                .as_u64()
                .map(Self::from_bits)
                .ok_or_else(|| EntityIdError::NotAnEntity {
                    value: value.to_string(),
                }),
            Value::Array(items) if items.len() == 1 => Self::from_value(&items[0]),
            Value::Object(fields) if fields.len() == 1 => match fields.values().next() {
                Some(inner) => Self::from_value(inner),
                None => Err(EntityIdError::NotAnEntity {
                    value: value.to_string(),
                }),
            },
            Value::Null => Err(EntityIdError::MissingValue),
            _ => Err(EntityIdError::NotAnEntity {
                value: value.to_string(),
            }),
        }
    }
}

impl From<u64> for EntityId {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<EntityId> for u64 {
    fn from(entity: EntityId) -> Self {
        entity.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index(), self.generation())
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self)
    }
}
