pub mod display_name;
pub mod entity_record;
pub mod hidden_markers;
pub mod mirror;
pub mod mirror_config;
pub mod reconciler;
pub mod value_cache;
