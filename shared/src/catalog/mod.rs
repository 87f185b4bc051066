mod component_name;
mod component_table;
mod type_registry;

pub use component_name::ComponentName;
pub use component_table::ComponentTable;
pub use type_registry::TypeRegistry;

use crate::{ComponentDefinition, ComponentId, TypeDescriptor, TypeName};

/// Accumulated type and component metadata for one session.
///
/// Append-only: definitions are inserted as catalog events arrive and are never
/// removed. Every lookup may legitimately come back empty until the matching
/// event has been seen.
#[derive(Default)]
pub struct Catalog {
    types: TypeRegistry,
    components: ComponentTable,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_types(&mut self, entries: impl IntoIterator<Item = (TypeName, TypeDescriptor)>) {
        self.types.register(entries);
    }

    pub fn register_components(&mut self, definitions: impl IntoIterator<Item = ComponentDefinition>) {
        self.components.register(definitions);
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn components(&self) -> &ComponentTable {
        &self.components
    }

    pub fn component(&self, id: &ComponentId) -> Option<&ComponentDefinition> {
        self.components.get(id)
    }

    pub fn component_id(&self, name: &str) -> Option<ComponentId> {
        self.components.id_of(name)
    }

    pub fn component_type_name(&self, id: &ComponentId) -> Option<&str> {
        self.components.get(id).map(|definition| definition.name.as_str())
    }

    /// Resolves a component id to its type name and short name. Either part is
    /// `None` when the corresponding catalog entry has not arrived yet.
    pub fn resolve_component_name(&self, id: &ComponentId) -> ComponentName {
        let Some(definition) = self.components.get(id) else {
            return ComponentName::unknown(*id);
        };
        let short_name = self
            .types
            .get(&definition.name)
            .map(|descriptor| descriptor.short_name.clone());

        ComponentName {
            id: *id,
            name: Some(definition.name.clone()),
            short_name,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.components.is_empty()
    }
}
