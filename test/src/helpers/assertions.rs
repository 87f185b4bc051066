/// Assert that every tracked entity has a cached display name
#[macro_export]
macro_rules! assert_names_cover_entities {
    ($client:expr) => {
        let mirror = $client.mirror();
        for entity in mirror.entities().keys() {
            assert!(
                mirror.entity_names().contains_key(entity),
                "Tracked entity {} has no display name",
                entity
            );
        }
    };
}

/// Assert that an entity left no trace in any of the mirror's maps
#[macro_export]
macro_rules! assert_purged {
    ($test_client:expr, $entity:expr) => {
        assert!(
            $test_client.is_purged(&$entity),
            "Entity {} is still present in at least one mirror map",
            $entity
        );
    };
}

/// Assert the inferred parent of an entity (`None` = no parent)
#[macro_export]
macro_rules! assert_parent {
    ($client:expr, $entity:expr, $parent:expr) => {
        assert_eq!(
            $client.child_parent_map().get(&$entity),
            Some(&$parent),
            "Unexpected parent linkage for entity {}",
            $entity
        );
    };
}
