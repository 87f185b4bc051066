use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registry metadata for one reflected type. Only `short_name` is interpreted;
/// any other fields the remote sends are kept in `details` untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(alias = "short_path", alias = "shortPath")]
    pub short_name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl TypeDescriptor {
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            details: Map::new(),
        }
    }
}
