use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified name of a reflected type, e.g. `bevy_ecs::name::Name`.
pub type TypeName = String;

/// Identifies a component type on the remote side. Stable for one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(usize);

impl ComponentId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for ComponentId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
