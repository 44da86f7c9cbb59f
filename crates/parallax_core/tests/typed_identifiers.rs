use parallax_core::{MeshId, PlaneId, SceneObjectId};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn identical_bytes_compare_and_hash_equal() {
    let raw = 0x1111_2222_3333_4444_5555_6666_7777_8888_u128;
    let a = MeshId::from_raw(raw);
    let b = MeshId::from_raw(raw);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn different_domains_share_the_representation() {
    // Same bytes, distinct types; only the raw values may be compared.
    assert_eq!(MeshId::from_raw(7).as_raw(), PlaneId::from_raw(7).as_raw());
}

#[test]
fn ids_work_as_hash_set_keys() {
    let mut seen = HashSet::new();
    assert!(seen.insert(MeshId::from_raw(1)));
    assert!(seen.insert(MeshId::from_raw(2)));
    assert!(!seen.insert(MeshId::from_raw(1)));
    assert_eq!(seen.len(), 2);
}

#[test]
fn uuid_conversions_roundtrip() {
    let uuid = Uuid::new_v4();
    let id = SceneObjectId::from(uuid);

    assert_eq!(Uuid::from(id), uuid);
    assert_eq!(id.as_raw(), uuid.as_u128());
    assert!(!id.is_nil());
}

#[test]
fn nil_is_the_default() {
    assert!(MeshId::default().is_nil());
    assert_eq!(MeshId::default().as_raw(), 0);
}
