use std::default::Default;

use crate::MirrorConfig;

/// Contains Config properties which will be used by the Client
#[derive(Clone)]
pub struct ClientConfig {
    /// Designated component types and naming rules used by the mirror
    pub mirror: MirrorConfig,
    /// Upper bound on commands queued or awaiting a response
    pub max_pending_commands: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mirror: MirrorConfig::default(),
            max_pending_commands: 256,
        }
    }
}
