use std::collections::HashMap;

use log::debug;

use crate::{ComponentDefinition, ComponentId, TypeName};

// ComponentTable
/// Component definitions by id, plus the derived `name -> id` index.
#[derive(Default)]
pub struct ComponentTable {
    definitions: HashMap<ComponentId, ComponentDefinition>,
    ids_by_name: HashMap<TypeName, ComponentId>,
}

impl ComponentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definitions: impl IntoIterator<Item = ComponentDefinition>) {
        for definition in definitions {
            if self.definitions.contains_key(&definition.id) {
                debug!("component {} registered twice, replacing previous definition", definition.id);
            }
            self.ids_by_name.insert(definition.name.clone(), definition.id);
            self.definitions.insert(definition.id, definition);
        }
    }

    pub fn get(&self, id: &ComponentId) -> Option<&ComponentDefinition> {
        self.definitions.get(id)
    }

    pub fn id_of(&self, type_name: &str) -> Option<ComponentId> {
        self.ids_by_name.get(type_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
