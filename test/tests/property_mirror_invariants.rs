/// PROPERTY-BASED TESTS: Mirror invariants
///
/// Uses proptest to drive the mirror with random event sequences.
///
/// Key invariants:
/// 1. Every tracked entity has exactly one display name, and only tracked entities do
/// 2. Hierarchy and value-cache entries never outlive their entity
/// 3. Cached signatures always match the mirrored slots
/// 4. Re-applying an identical change writes nothing

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::{json, Value};

use remote_inspector_client::{
    ComponentId, EntityId, EntityMutation, MutationChange, MutationRemove, StreamEvent,
    ValueSignature,
};
use remote_inspector_test::{components::*, TestClient};

const ENTITY_COUNT: u32 = 4;
const TRACKED_COMPONENTS: [usize; 6] = [NAME, HEALTH, CHILD_OF, TRANSFORM, OBSERVER_STATE, PLAYER];

fn entity(index: u32) -> EntityId {
    EntityId::new(index, 0)
}

fn component_value(component: usize, seed: u8) -> Value {
    match component {
        NAME => json!(format!("entity-{}", seed % 3)),
        CHILD_OF => json!(entity(u32::from(seed) % ENTITY_COUNT).to_bits()),
        OBSERVER_STATE => Value::Null,
        _ => json!({ "value": seed % 3 }),
    }
}

#[derive(Clone, Debug)]
enum SlotOp {
    Set { disabled: bool, seed: u8 },
    Remove { was_disabled: bool },
}

// One op per component, so changes and removes never touch the same slot
fn change_strategy() -> impl Strategy<Value = StreamEvent> {
    let slot_op = prop_oneof![
        3 => (any::<bool>(), any::<u8>()).prop_map(|(disabled, seed)| SlotOp::Set { disabled, seed }),
        1 => any::<bool>().prop_map(|was_disabled| SlotOp::Remove { was_disabled }),
    ];
    (
        0..ENTITY_COUNT,
        prop::collection::btree_map(prop::sample::select(TRACKED_COMPONENTS.to_vec()), slot_op, 0..4),
    )
        .prop_map(|(index, ops)| change_event(entity(index), ops))
}

fn change_event(entity: EntityId, ops: BTreeMap<usize, SlotOp>) -> StreamEvent {
    let mut changes = Vec::new();
    let mut removes = Vec::new();
    for (component, op) in ops {
        match op {
            SlotOp::Set { disabled, seed } => {
                changes.push(MutationChange::new(component, disabled, component_value(component, seed)))
            }
            SlotOp::Remove { was_disabled } => removes.push(MutationRemove::new(component, was_disabled)),
        }
    }
    StreamEvent::entity(entity, EntityMutation::change(changes, removes))
}

fn event_strategy() -> impl Strategy<Value = StreamEvent> {
    prop_oneof![
        4 => change_strategy(),
        1 => (0..ENTITY_COUNT).prop_map(|index| StreamEvent::entity(entity(index), EntityMutation::Remove)),
    ]
}

fn check_invariants(test: &TestClient) -> Result<(), TestCaseError> {
    let mirror = test.client.mirror();

    prop_assert_eq!(mirror.entities().len(), mirror.entity_names().len());
    for (entity, record) in mirror.entities() {
        let name = mirror.display_name(entity);
        prop_assert!(name.is_some_and(|name| !name.is_empty()), "{} has no name", entity);

        for (component, slot) in record.iter() {
            prop_assert_eq!(
                mirror.component_value_cache().get(entity, component),
                Some(&ValueSignature::of_slot(slot))
            );
        }
    }

    for index in 0..ENTITY_COUNT {
        let entity = entity(index);
        if !mirror.contains_entity(&entity) {
            prop_assert!(test.is_purged(&entity), "{} left state behind", entity);
        }
    }

    for child in mirror.child_parent_map().keys() {
        prop_assert!(mirror.contains_entity(child));
    }

    Ok(())
}

proptest! {
    /// Invariants hold after every event of a random stream
    #[test]
    fn prop_invariants_hold_after_every_event(
        events in prop::collection::vec(event_strategy(), 1..40)
    ) {
        let mut test = TestClient::new();
        for event in events {
            test.apply(event);
            check_invariants(&test)?;
        }
    }

    /// An identical change applied twice in a row only writes the first time
    #[test]
    fn prop_reapplied_change_writes_nothing(
        history in prop::collection::vec(event_strategy(), 0..20),
        event in change_strategy(),
    ) {
        let StreamEvent::Entity { entity, .. } = &event else {
            unreachable!("change_strategy only yields entity events");
        };
        let entity = *entity;
        let mut test = TestClient::new();
        test.apply_batch(history);
        test.apply(event.clone());

        let replay = test.apply(event);

        for component in TRACKED_COMPONENTS {
            prop_assert_eq!(replay.component_writes(&entity, &ComponentId::from(component)), 0);
        }
    }

    /// A removed entity is gone from every map, whatever happened before
    #[test]
    fn prop_remove_purges_entity(
        history in prop::collection::vec(event_strategy(), 0..30),
        index in 0..ENTITY_COUNT,
    ) {
        let mut test = TestClient::new();
        test.apply_batch(history);

        test.apply(StreamEvent::entity(entity(index), EntityMutation::Remove));

        prop_assert!(test.is_purged(&entity(index)));
        for child in test.client.children_of(&entity(index)) {
            prop_assert!(test.client.entities().contains_key(&child));
        }
    }
}
