pub mod component_definition;
pub mod component_slot;
pub mod type_descriptor;
