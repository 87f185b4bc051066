use thiserror::Error;

/// Errors that can occur while reading an entity pointer out of a mirrored value
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntityIdError {
    /// Value is absent (e.g. a zero-sized component carries no data)
    #[error("Entity pointer has no value")]
    MissingValue,

    /// Value has a shape that cannot hold a packed entity id
    #[error("Value {value} is not a packed entity id")]
    NotAnEntity {
        value: String,
    },
}
