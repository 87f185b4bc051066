use std::collections::HashMap;

use log::debug;

use crate::{TypeDescriptor, TypeName};

// TypeRegistry
#[derive(Default)]
pub struct TypeRegistry {
    types: HashMap<TypeName, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins when a name repeats.
    pub fn register(&mut self, entries: impl IntoIterator<Item = (TypeName, TypeDescriptor)>) {
        for (type_name, descriptor) in entries {
            if self.types.contains_key(&type_name) {
                debug!("type `{}` registered twice, replacing previous entry", type_name);
            }
            self.types.insert(type_name, descriptor);
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
