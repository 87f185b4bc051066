//! # `MirrorConfig` – which remote types mean what
//!
//! The mirror infers hierarchy and display names from a handful of
//! **designated component types**, named by their fully-qualified type path.
//! Nothing here is resolved up front: every type path is looked up in the
//! catalog at the moment it is needed, so a config may name types the remote
//! has not registered (yet, or ever).
//!
//! The defaults describe a Bevy-shaped remote.

use serde_json::Value;

use remote_inspector_shared::TypeName;

/// Produces a display name from one component.
#[derive(Clone)]
pub enum NameFormatter {
    /// Always this label.
    Static(String),
    /// Derived from the component value; `None` falls through to the next candidate.
    Value(fn(&Value) -> Option<String>),
}

impl NameFormatter {
    pub fn format(&self, value: &Value) -> Option<String> {
        match self {
            Self::Static(label) => Some(label.clone()),
            Self::Value(format) => format(value),
        }
    }
}

/// A "common" component that names an entity when no explicit name exists.
#[derive(Clone)]
pub struct CommonComponent {
    pub type_name: TypeName,
    pub formatter: NameFormatter,
}

impl CommonComponent {
    pub fn label(type_name: &str, label: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            formatter: NameFormatter::Static(label.to_string()),
        }
    }

    pub fn value(type_name: &str, format: fn(&Value) -> Option<String>) -> Self {
        Self {
            type_name: type_name.to_string(),
            formatter: NameFormatter::Value(format),
        }
    }
}

#[derive(Clone)]
pub struct MirrorConfig {
    /// Component whose value is the entity's explicit name.
    pub name_type: TypeName,
    /// Component whose value points at the entity's parent.
    pub parent_type: TypeName,
    /// Component listing the entity's children. Never used as a name.
    pub children_type: TypeName,
    /// Marker components of internal entities that stay out of hierarchy bookkeeping.
    pub hidden_markers: Vec<TypeName>,
    /// Name candidates, highest priority first.
    pub common_components: Vec<CommonComponent>,
    /// Type path prefixes owned by the engine itself; components from these
    /// namespaces are only used as a name when nothing else is available.
    pub foundational_namespaces: Vec<String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            name_type: "bevy_ecs::name::Name".to_string(),
            parent_type: "bevy_ecs::hierarchy::ChildOf".to_string(),
            children_type: "bevy_ecs::hierarchy::Children".to_string(),
            hidden_markers: vec![
                "bevy_ecs::observer::runner::ObserverState".to_string(),
                "bevy_ecs::observer::distributed_storage::ObservedBy".to_string(),
                "bevy_ecs::system::system_registry::SystemIdMarker".to_string(),
            ],
            common_components: vec![
                CommonComponent::value("bevy_window::window::Window", window_title),
                CommonComponent::label("bevy_window::window::PrimaryWindow", "Primary Window"),
                CommonComponent::value("bevy_window::monitor::Monitor", monitor_name),
                CommonComponent::label("bevy_ecs::observer::runner::Observer", "Observer"),
                CommonComponent::label("bevy_core_pipeline::core_3d::camera_3d::Camera3d", "Camera3d"),
                CommonComponent::label("bevy_core_pipeline::core_2d::camera_2d::Camera2d", "Camera2d"),
                CommonComponent::label("bevy_render::camera::camera::Camera", "Camera"),
                CommonComponent::label("bevy_pbr::light::point_light::PointLight", "PointLight"),
                CommonComponent::label("bevy_pbr::light::spot_light::SpotLight", "SpotLight"),
                CommonComponent::label(
                    "bevy_pbr::light::directional_light::DirectionalLight",
                    "DirectionalLight",
                ),
                CommonComponent::value("bevy_ui::widget::text::Text", text_content),
                CommonComponent::value("bevy_text::text2d::Text2d", text_content),
                CommonComponent::label("bevy_ui::widget::button::Button", "Button"),
                CommonComponent::label("bevy_ui::widget::image::ImageNode", "ImageNode"),
                CommonComponent::label("bevy_ui::ui_node::Node", "Node"),
                CommonComponent::label("bevy_render::mesh::components::Mesh3d", "Mesh3d"),
                CommonComponent::label("bevy_render::mesh::components::Mesh2d", "Mesh2d"),
                CommonComponent::label("bevy_sprite::sprite::Sprite", "Sprite"),
                CommonComponent::label("bevy_scene::components::SceneRoot", "SceneRoot"),
                CommonComponent::label("bevy_audio::audio::AudioPlayer", "AudioPlayer"),
            ],
            foundational_namespaces: vec![
                "bevy_".to_string(),
                "core::".to_string(),
                "alloc::".to_string(),
                "std::".to_string(),
            ],
        }
    }
}

impl MirrorConfig {
    pub fn is_foundational(&self, type_name: &str) -> bool {
        self.foundational_namespaces
            .iter()
            .any(|namespace| type_name.starts_with(namespace.as_str()))
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn window_title(value: &Value) -> Option<String> {
    value.get("title").and_then(Value::as_str).and_then(non_empty)
}

fn monitor_name(value: &Value) -> Option<String> {
    value.get("name").and_then(Value::as_str).and_then(non_empty)
}

/// Text components reflect as a bare string or a one-field tuple struct.
fn text_content(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => non_empty(text),
        Value::Array(items) if items.len() == 1 => text_content(&items[0]),
        Value::Object(fields) => fields.get("text").or_else(|| fields.get("0")).and_then(text_content),
        _ => None,
    }
}
