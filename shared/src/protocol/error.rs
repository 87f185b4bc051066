use thiserror::Error;

/// Errors that can occur while decoding stream payloads and command responses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Payload is not valid JSON at all
    #[error("Stream payload is not valid JSON: {reason}")]
    InvalidJson {
        reason: String,
    },

    /// Payload is JSON but neither an event object nor an array of them
    #[error("Stream payload must be an event object or an array of events, got {found}")]
    UnexpectedPayload {
        found: &'static str,
    },

    /// One event in the batch does not match the event schema; its siblings are unaffected
    #[error("Stream event #{index} is malformed: {reason}")]
    InvalidEvent {
        index: usize,
        reason: String,
    },

    /// A command response does not match the response schema
    #[error("Command response is malformed: {reason}")]
    InvalidResponse {
        reason: String,
    },
}
