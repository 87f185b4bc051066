pub mod command;
pub mod entity_mutation;
pub mod error;
pub mod stream_event;
