/// Integration tests for display name resolution through the client

use serde_json::json;

use remote_inspector_client::{
    ClientConfig, CommonComponent, ComponentId, EntityId, MirrorConfig, MirrorEvent,
};
use remote_inspector_test::{components::*, CatalogBuilder, TestClient, TestEntityBuilder};

fn e(index: u32) -> EntityId {
    EntityId::new(index, 0)
}

#[test]
fn name_component_beats_everything_else() {
    let mut test = TestClient::new();
    let entity = e(1);

    test.apply(
        TestEntityBuilder::new(entity)
            .with(CAMERA, json!({}))
            .with(PLAYER, json!({}))
            .with(NAME, json!("Hero"))
            .build(),
    );

    assert_eq!(test.name(&entity), Some("Hero"));
}

#[test]
fn common_components_follow_priority() {
    let mut test = TestClient::new();
    let window = e(2);
    let light = e(3);

    test.apply_batch(vec![
        TestEntityBuilder::new(window)
            .with(CAMERA, json!({}))
            .with(WINDOW, json!({ "title": "Inspector" }))
            .build(),
        TestEntityBuilder::new(light)
            .with(TRANSFORM, json!({}))
            .with(POINT_LIGHT, json!({ "intensity": 800.0 }))
            .build(),
    ]);

    assert_eq!(test.name(&window), Some("Inspector"));
    assert_eq!(test.name(&light), Some("PointLight"));
}

#[test]
fn user_components_beat_engine_components() {
    let mut test = TestClient::new();
    let entity = e(4);

    test.apply(
        TestEntityBuilder::new(entity)
            .with(TRANSFORM, json!({}))
            .with(VISIBILITY, json!("Inherited"))
            .with(INVENTORY, json!([]))
            .build(),
    );

    assert_eq!(test.name(&entity), Some("Inventory"));
}

#[test]
fn engine_component_used_when_nothing_else() {
    let mut test = TestClient::new();
    let entity = e(5);

    test.apply(
        TestEntityBuilder::new(entity)
            .with(CHILD_OF, json!(e(1).to_bits()))
            .with(VISIBILITY, json!("Inherited"))
            .with(TRANSFORM, json!({}))
            .build(),
    );

    assert_eq!(test.name(&entity), Some("Transform"));
}

#[test]
fn value_only_change_keeps_name_stable() {
    let mut test = TestClient::new();
    let entity = e(6);

    test.apply(TestEntityBuilder::new(entity).with(PLAYER, json!({ "score": 1 })).build());
    let batch = test.apply(TestEntityBuilder::new(entity).with(PLAYER, json!({ "score": 2 })).build());

    assert!(batch.iter().all(|event| !matches!(event, MirrorEvent::Rename(..))));
    assert_eq!(test.name(&entity), Some("Player"));
}

#[test]
fn adding_component_recomputes_name() {
    let mut test = TestClient::new();
    let entity = e(7);

    test.apply(TestEntityBuilder::new(entity).with(TRANSFORM, json!({})).build());
    assert_eq!(test.name(&entity), Some("Transform"));

    let batch = test.apply(TestEntityBuilder::new(entity).with(CAMERA, json!({})).build());

    assert_eq!(test.name(&entity), Some("Camera"));
    assert!(batch
        .iter()
        .any(|event| event == &MirrorEvent::Rename(entity, "Camera".to_string())));
}

#[test]
fn missing_catalog_falls_back_to_entity() {
    let mut test = TestClient::without_catalog();
    let entity = e(8);

    test.apply(TestEntityBuilder::new(entity).with(PLAYER, json!({})).build());

    assert_eq!(test.name(&entity), Some("Entity"));
    assert_eq!(test.client.component_label(&ComponentId::from(PLAYER)), "Component 30");
}

#[test]
fn late_catalog_is_picked_up_on_refresh() {
    let mut test = TestClient::without_catalog();
    let entity = e(9);
    test.apply(TestEntityBuilder::new(entity).with(PLAYER, json!({})).build());

    test.apply_batch(remote_inspector_test::bevy_catalog_events());
    assert_eq!(test.name(&entity), Some("Entity"));

    let renames = test.client.refresh_display_names();
    assert_eq!(test.name(&entity), Some("Player"));
    assert_eq!(renames.len(), 1);
}

#[test]
fn component_without_type_descriptor_has_synthetic_label() {
    let mut test = TestClient::without_catalog();
    test.apply_batch(
        CatalogBuilder::new()
            .component_without_type(40, "my_game::Secret")
            .build(),
    );

    let resolved = test.client.resolve_component_name(&ComponentId::new(40));

    assert_eq!(resolved.name.as_deref(), Some("my_game::Secret"));
    assert_eq!(resolved.short_name, None);
    assert_eq!(test.client.component_label(&ComponentId::new(40)), "Component 40");
}

#[test]
fn custom_config_changes_designated_types() {
    let config = ClientConfig {
        mirror: MirrorConfig {
            name_type: "my_game::Label".to_string(),
            common_components: vec![CommonComponent::label("my_game::items::Inventory", "Bag")],
            ..MirrorConfig::default()
        },
        ..ClientConfig::default()
    };
    let mut test = TestClient::with_config(config);
    test.apply_batch(
        CatalogBuilder::new()
            .component(41, "my_game::Label", "Label")
            .build(),
    );

    let labelled = e(10);
    let bag = e(11);
    test.apply_batch(vec![
        TestEntityBuilder::new(labelled)
            .with(41, json!("Chest"))
            .with(NAME, json!("ignored"))
            .build(),
        TestEntityBuilder::new(bag).with(INVENTORY, json!([])).build(),
    ]);

    assert_eq!(test.name(&labelled), Some("Chest"));
    assert_eq!(test.name(&bag), Some("Bag"));
}
