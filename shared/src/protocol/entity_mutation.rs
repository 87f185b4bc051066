use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ComponentId;

/// One entity-scoped mutation, as reported by the remote side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EntityMutation {
    /// The entity no longer exists remotely.
    Remove,
    /// Components were added or changed (`changes`) and/or removed or
    /// disabled (`removes`).
    Change {
        #[serde(default)]
        changes: Vec<MutationChange>,
        #[serde(default)]
        removes: Vec<MutationRemove>,
    },
    /// Any `kind` this client does not understand.
    #[serde(other)]
    Unknown,
}

impl EntityMutation {
    pub fn change(changes: Vec<MutationChange>, removes: Vec<MutationRemove>) -> Self {
        Self::Change { changes, removes }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Remove => "remove",
            Self::Change { .. } => "change",
            Self::Unknown => "unknown",
        }
    }
}

// MutationChange
/// `[componentId, disabled]` or `[componentId, disabled, value]` on the wire.
/// Zero-sized components carry no value and decode to `Value::Null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawChange", into = "RawChange")]
pub struct MutationChange {
    pub component: ComponentId,
    pub disabled: bool,
    pub value: Value,
}

impl MutationChange {
    pub fn new(component: impl Into<ComponentId>, disabled: bool, value: Value) -> Self {
        Self {
            component: component.into(),
            disabled,
            value,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawChange {
    WithValue(ComponentId, bool, Value),
    Bare(ComponentId, bool),
}

impl From<RawChange> for MutationChange {
    fn from(raw: RawChange) -> Self {
        match raw {
            RawChange::WithValue(component, disabled, value) => Self {
                component,
                disabled,
                value,
            },
            RawChange::Bare(component, disabled) => Self {
                component,
                disabled,
                value: Value::Null,
            },
        }
    }
}

impl From<MutationChange> for RawChange {
    fn from(change: MutationChange) -> Self {
        match change.value {
            Value::Null => RawChange::Bare(change.component, change.disabled),
            value => RawChange::WithValue(change.component, change.disabled, value),
        }
    }
}

// MutationRemove
/// `[componentId, wasDisabled]` on the wire. `was_disabled` means the
/// component was deactivated rather than deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(ComponentId, bool)", into = "(ComponentId, bool)")]
pub struct MutationRemove {
    pub component: ComponentId,
    pub was_disabled: bool,
}

impl MutationRemove {
    pub fn new(component: impl Into<ComponentId>, was_disabled: bool) -> Self {
        Self {
            component: component.into(),
            was_disabled,
        }
    }
}

impl From<(ComponentId, bool)> for MutationRemove {
    fn from((component, was_disabled): (ComponentId, bool)) -> Self {
        Self {
            component,
            was_disabled,
        }
    }
}

impl From<MutationRemove> for (ComponentId, bool) {
    fn from(remove: MutationRemove) -> Self {
        (remove.component, remove.was_disabled)
    }
}
