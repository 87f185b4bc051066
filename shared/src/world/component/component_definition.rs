use serde::{Deserialize, Serialize};

use crate::{ComponentId, TypeName};

/// Describes one component type registered on the remote side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub id: ComponentId,
    pub name: TypeName,
    #[serde(default)]
    pub reflected: bool,
    #[serde(default)]
    pub required_components: Vec<ComponentId>,
}

impl ComponentDefinition {
    pub fn new(id: impl Into<ComponentId>, name: impl Into<TypeName>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reflected: true,
            required_components: Vec::new(),
        }
    }

    pub fn with_required(mut self, required_components: Vec<ComponentId>) -> Self {
        self.required_components = required_components;
        self
    }

    pub fn unreflected(mut self) -> Self {
        self.reflected = false;
        self
    }
}
