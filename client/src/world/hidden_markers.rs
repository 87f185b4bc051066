use std::collections::HashSet;

use remote_inspector_shared::{Catalog, ComponentId, MutationChange, TypeName};

use crate::world::entity_record::EntityRecord;

/// The set of marker types that flag an entity as internal.
///
/// Every hidden-entity decision goes through this type, so the marker list is
/// configured in exactly one place.
#[derive(Clone, Default)]
pub struct HiddenMarkers {
    type_names: HashSet<TypeName>,
}

impl HiddenMarkers {
    pub fn new(type_names: impl IntoIterator<Item = TypeName>) -> Self {
        Self {
            type_names: type_names.into_iter().collect(),
        }
    }

    pub fn is_marker(&self, catalog: &Catalog, component: &ComponentId) -> bool {
        catalog
            .component_type_name(component)
            .is_some_and(|type_name| self.type_names.contains(type_name))
    }

    /// `true` if any of the mutation's changes names a marker component.
    /// Components the catalog cannot resolve yet never count as markers.
    pub fn in_changes(&self, catalog: &Catalog, changes: &[MutationChange]) -> bool {
        changes
            .iter()
            .any(|change| self.is_marker(catalog, &change.component))
    }

    pub fn in_record(&self, catalog: &Catalog, record: &EntityRecord) -> bool {
        record
            .component_ids()
            .any(|component| self.is_marker(catalog, component))
    }
}
