use serde_json::Value;

/// Mirrored state of one component on one entity.
///
/// A disabled component is still present on the remote entity and keeps its
/// last value; an absent component has no slot at all.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentSlot {
    Active(Value),
    Disabled(Value),
}

impl ComponentSlot {
    pub fn new(disabled: bool, value: Value) -> Self {
        if disabled {
            Self::Disabled(value)
        } else {
            Self::Active(value)
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            Self::Active(value) | Self::Disabled(value) => value,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled(_))
    }

    /// Keeps the value, flips the slot to `Disabled`.
    pub fn disable(&mut self) {
        if let Self::Active(value) = self {
            *self = Self::Disabled(std::mem::take(value));
        }
    }
}
