use serde_json::Value;

use remote_inspector_shared::{Catalog, ComponentId};

use crate::{world::entity_record::EntityRecord, MirrorConfig};

pub const FALLBACK_ENTITY_NAME: &str = "Entity";

/// Derives one display label per entity from its mirrored components.
///
/// Reads the catalog and config only; the caller decides where the result goes.
pub struct DisplayNameResolver<'a> {
    config: &'a MirrorConfig,
    catalog: &'a Catalog,
}

impl<'a> DisplayNameResolver<'a> {
    pub fn new(config: &'a MirrorConfig, catalog: &'a Catalog) -> Self {
        Self { config, catalog }
    }

    pub fn resolve(&self, record: &EntityRecord) -> String {
        self.explicit_name(record)
            .or_else(|| self.common_component_name(record))
            .or_else(|| self.user_component_name(record))
            .or_else(|| self.any_component_name(record))
            .unwrap_or_else(|| FALLBACK_ENTITY_NAME.to_string())
    }

    fn explicit_name(&self, record: &EntityRecord) -> Option<String> {
        let name_id = self.catalog.component_id(&self.config.name_type)?;
        let slot = record.get(&name_id)?;
        name_value(slot.value())
    }

    fn common_component_name(&self, record: &EntityRecord) -> Option<String> {
        self.config.common_components.iter().find_map(|common| {
            let component = self.catalog.component_id(&common.type_name)?;
            let slot = record.get(&component)?;
            common.formatter.format(slot.value())
        })
    }

    /// First component outside the engine's own namespaces.
    fn user_component_name(&self, record: &EntityRecord) -> Option<String> {
        record.sorted_component_ids().into_iter().find_map(|component| {
            let resolved = self.catalog.resolve_component_name(&component);
            let type_name = resolved.name?;
            if self.config.is_foundational(&type_name) {
                return None;
            }
            resolved.short_name
        })
    }

    fn any_component_name(&self, record: &EntityRecord) -> Option<String> {
        let parent = self.catalog.component_id(&self.config.parent_type);
        let children = self.catalog.component_id(&self.config.children_type);

        record
            .sorted_component_ids()
            .into_iter()
            .filter(|component| Some(*component) != parent && Some(*component) != children)
            .find_map(|component| self.short_name(&component))
    }

    fn short_name(&self, component: &ComponentId) -> Option<String> {
        self.catalog.resolve_component_name(component).short_name
    }
}

/// Name components reflect as a bare string, or as a struct holding one.
fn name_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(name) => Some(name.clone()),
        Value::Array(items) if items.len() == 1 => name_value(&items[0]),
        Value::Object(fields) => match fields.get("name") {
            Some(name) => name_value(name),
            None => Some(value.to_string()),
        },
        other => Some(other.to_string()),
    }
}
