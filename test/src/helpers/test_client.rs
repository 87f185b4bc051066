use remote_inspector_client::{ClientConfig, InspectorClient, MirrorEvents};
use remote_inspector_shared::{EntityId, StreamEvent};

use crate::bevy_catalog_events;

/// Install `env_logger` once; later calls are no-ops
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client pre-loaded with the test catalog
pub struct TestClient {
    pub client: InspectorClient,
}

impl TestClient {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let mut client = InspectorClient::new(config);
        client.receive_events(bevy_catalog_events());
        Self { client }
    }

    /// Client that has not received any catalog data
    pub fn without_catalog() -> Self {
        Self {
            client: InspectorClient::default(),
        }
    }

    pub fn apply(&mut self, event: StreamEvent) -> MirrorEvents {
        self.client.receive_events(vec![event])
    }

    pub fn apply_batch(&mut self, events: Vec<StreamEvent>) -> MirrorEvents {
        self.client.receive_events(events)
    }

    pub fn name(&self, entity: &EntityId) -> Option<&str> {
        self.client.display_name(entity)
    }

    /// `true` if no map of the mirror holds `entity` any more
    pub fn is_purged(&self, entity: &EntityId) -> bool {
        let mirror = self.client.mirror();
        !mirror.entities().contains_key(entity)
            && !mirror.child_parent_map().contains_key(entity)
            && !mirror.entity_names().contains_key(entity)
            && !mirror.component_value_cache().contains_entity(entity)
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
