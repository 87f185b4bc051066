use crate::ComponentId;

/// Result of resolving a component id against the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentName {
    pub id: ComponentId,
    pub name: Option<String>,
    pub short_name: Option<String>,
}

impl ComponentName {
    pub fn unknown(id: ComponentId) -> Self {
        Self {
            id,
            name: None,
            short_name: None,
        }
    }

    /// Short name when known, otherwise the synthetic `Component {id}` label.
    pub fn label(&self) -> String {
        match &self.short_name {
            Some(short_name) => short_name.clone(),
            None => format!("Component {}", self.id),
        }
    }
}
