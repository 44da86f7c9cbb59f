use parallax_core::structure::records::{
    HandTrackerCreateInfo, SpatialAnchorCreateInfo, SpatialAnchorPersistenceInfo, VisibilityMask,
};
use parallax_core::{
    create, describe, is_known_struct_type, known_struct_types, name_of, tag_of, Side, StructSet,
    StructureType,
};

#[test]
fn tags_are_stable_across_repeated_calls() {
    let first = tag_of::<SpatialAnchorCreateInfo>();
    let second = tag_of::<SpatialAnchorCreateInfo>();
    assert_eq!(first, second);

    let first_name = name_of::<VisibilityMask>();
    let second_name = name_of::<VisibilityMask>();
    assert_eq!(first_name, second_name);
}

#[test]
fn every_registered_type_is_known() {
    assert!(is_known_struct_type(tag_of::<SpatialAnchorCreateInfo>()));
    assert!(is_known_struct_type(tag_of::<VisibilityMask>()));
    assert!(is_known_struct_type(tag_of::<SpatialAnchorPersistenceInfo>()));
    for entry in known_struct_types() {
        assert!(is_known_struct_type(entry.ty));
    }
}

#[test]
fn tags_are_unique_among_all_registered_types() {
    let entries: Vec<_> = known_struct_types().collect();
    for (index, entry) in entries.iter().enumerate() {
        for other in &entries[index + 1..] {
            assert_ne!(entry.ty, other.ty);
        }
    }
}

#[test]
fn create_sets_the_registered_tag() {
    let anchor_info: SpatialAnchorCreateInfo = create();
    assert_eq!(anchor_info.ty, tag_of::<SpatialAnchorCreateInfo>());
    assert!(anchor_info.next.is_null());

    let tracker_info: HandTrackerCreateInfo = create();
    assert_eq!(tracker_info.ty, tag_of::<HandTrackerCreateInfo>());
    assert_eq!(tracker_info.hand, Side::Left);
}

#[test]
fn unregistered_tags_are_not_known() {
    assert!(!is_known_struct_type(StructureType(42)));
    assert!(!is_known_struct_type(StructureType::UNKNOWN));
    assert_eq!(describe(StructureType(42)), None);
}

#[test]
fn stable_and_preview_sets_partition_the_registry() {
    let stable = known_struct_types()
        .filter(|entry| entry.set == StructSet::Stable)
        .count();
    let preview = known_struct_types()
        .filter(|entry| entry.set == StructSet::Preview)
        .count();
    assert!(stable > 0);
    assert!(preview > 0);
    assert_eq!(stable + preview, known_struct_types().count());
    assert_eq!(
        describe(tag_of::<SpatialAnchorPersistenceInfo>()),
        Some(name_of::<SpatialAnchorPersistenceInfo>())
    );
}
