//! Structure tag registry.
//!
//! # Responsibility
//! - Resolve the wire tag and display name of every known extensible
//!   record type at compile time.
//! - Answer the inverse runtime question: is this tag one of ours?
//!
//! # Invariants
//! - Every record type appears in exactly one declaration list (stable
//!   or preview) and each tag value is unique across the combined set.
//! - Lookup helpers allocate nothing; the tables are `'static`.

use super::records::{
    EventDataMainSessionVisibilityChanged, EventDataVisibilityMaskChanged,
    GraphicsRequirementsOpenGl, HandJointLocations, HandJointsLocateInfo, HandTrackerCreateInfo,
    SessionCreateInfoOverlay, SpatialAnchorCreateInfo, SpatialAnchorPersistenceInfo,
    SpatialAnchorSpaceCreateInfo, SystemHandTrackingProperties, VisibilityMask,
};

/// Wire tag identifying the concrete type of an extensible record.
///
/// The external specification grows new tags with every extension, so
/// this is an open enumeration: a newtype with associated constants,
/// never an exhaustive Rust enum. Unknown tags stay representable.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StructureType(pub i32);

impl StructureType {
    /// Reserved zero tag; never registered.
    pub const UNKNOWN: Self = Self(0);
    pub const SPATIAL_ANCHOR_CREATE_INFO: Self = Self(1_000_039_000);
    pub const SPATIAL_ANCHOR_SPACE_CREATE_INFO: Self = Self(1_000_039_001);
    pub const VISIBILITY_MASK: Self = Self(1_000_031_000);
    pub const EVENT_DATA_VISIBILITY_MASK_CHANGED: Self = Self(1_000_031_001);
    pub const GRAPHICS_REQUIREMENTS_OPENGL: Self = Self(1_000_023_000);
    pub const HAND_TRACKER_CREATE_INFO: Self = Self(1_000_051_000);
    pub const HAND_JOINT_LOCATIONS: Self = Self(1_000_051_001);
    pub const SYSTEM_HAND_TRACKING_PROPERTIES: Self = Self(1_000_051_002);
    pub const HAND_JOINTS_LOCATE_INFO: Self = Self(1_000_051_003);
    pub const SESSION_CREATE_INFO_OVERLAY: Self = Self(1_000_033_000);
    pub const EVENT_DATA_MAIN_SESSION_VISIBILITY_CHANGED: Self = Self(1_000_033_001);
    pub const SPATIAL_ANCHOR_PERSISTENCE_INFO: Self = Self(1_000_142_000);

    /// Returns the raw tag value.
    pub const fn as_raw(self) -> i32 {
        self.0
    }
}

/// Declaration list a registered structure type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructSet {
    /// Ratified extension structures.
    Stable,
    /// Preview/experimental extension structures.
    Preview,
}

/// One registered structure type descriptor.
#[derive(Debug, Clone, Copy)]
pub struct StructTypeEntry {
    pub ty: StructureType,
    pub name: &'static str,
    pub set: StructSet,
}

/// Compile-time association between a record type and its wire tag.
///
/// Implemented only through the registration lists below; asking for the
/// tag of an unregistered record type is a missing-impl compile error,
/// never a runtime sentinel.
pub trait ExtStruct {
    /// Wire tag stored in the record header.
    const TYPE: StructureType;
    /// Human-readable display name.
    const NAME: &'static str;
}

/// Returns the wire tag registered for `T`.
pub const fn tag_of<T: ExtStruct>() -> StructureType {
    T::TYPE
}

/// Returns the display name registered for `T`.
pub const fn name_of<T: ExtStruct>() -> &'static str {
    T::NAME
}

/// Creates a record of type `T` with its registered tag already set.
///
/// Record `Default` impls set the tag header; the lock-step between
/// `Default` and the registry is unit-tested per record type.
pub fn create<T: ExtStruct + Default>() -> T {
    T::default()
}

macro_rules! register_structs {
    ($table:ident, $set:expr; $( $record:ident => $tag:ident, $name:literal; )+) => {
        $(
            impl ExtStruct for $record {
                const TYPE: StructureType = StructureType::$tag;
                const NAME: &'static str = $name;
            }
        )+

        pub(crate) const $table: &[StructTypeEntry] = &[
            $(
                StructTypeEntry {
                    ty: StructureType::$tag,
                    name: $name,
                    set: $set,
                },
            )+
        ];
    };
}

register_structs! {
    STABLE_STRUCT_TYPES, StructSet::Stable;
    SpatialAnchorCreateInfo => SPATIAL_ANCHOR_CREATE_INFO, "spatial anchor create info";
    SpatialAnchorSpaceCreateInfo => SPATIAL_ANCHOR_SPACE_CREATE_INFO, "spatial anchor space create info";
    VisibilityMask => VISIBILITY_MASK, "visibility mask";
    EventDataVisibilityMaskChanged => EVENT_DATA_VISIBILITY_MASK_CHANGED, "visibility mask changed event";
    GraphicsRequirementsOpenGl => GRAPHICS_REQUIREMENTS_OPENGL, "OpenGL graphics requirements";
    HandTrackerCreateInfo => HAND_TRACKER_CREATE_INFO, "hand tracker create info";
    HandJointsLocateInfo => HAND_JOINTS_LOCATE_INFO, "hand joints locate info";
    HandJointLocations => HAND_JOINT_LOCATIONS, "hand joint locations";
    SystemHandTrackingProperties => SYSTEM_HAND_TRACKING_PROPERTIES, "system hand tracking properties";
}

register_structs! {
    PREVIEW_STRUCT_TYPES, StructSet::Preview;
    SpatialAnchorPersistenceInfo => SPATIAL_ANCHOR_PERSISTENCE_INFO, "spatial anchor persistence info";
    SessionCreateInfoOverlay => SESSION_CREATE_INFO_OVERLAY, "overlay session create info";
    EventDataMainSessionVisibilityChanged => EVENT_DATA_MAIN_SESSION_VISIBILITY_CHANGED, "main session visibility changed event";
}

/// Iterates every registered structure type, stable list first.
pub fn known_struct_types() -> impl Iterator<Item = &'static StructTypeEntry> {
    STABLE_STRUCT_TYPES.iter().chain(PREVIEW_STRUCT_TYPES.iter())
}

/// Returns whether `ty` is one of the registered structure tags.
///
/// Linear scan over the combined lists; the set is small and this is
/// not a hot path.
pub fn is_known_struct_type(ty: StructureType) -> bool {
    known_struct_types().any(|entry| entry.ty == ty)
}

/// Returns the display name for a registered tag, `None` otherwise.
pub fn describe(ty: StructureType) -> Option<&'static str> {
    known_struct_types()
        .find(|entry| entry.ty == ty)
        .map(|entry| entry.name)
}

#[cfg(test)]
mod tests {
    use super::{
        describe, is_known_struct_type, known_struct_types, tag_of, StructSet, StructureType,
        PREVIEW_STRUCT_TYPES, STABLE_STRUCT_TYPES,
    };
    use crate::structure::records::{SpatialAnchorCreateInfo, SpatialAnchorPersistenceInfo};

    #[test]
    fn tags_are_unique_across_the_combined_set() {
        let entries: Vec<_> = known_struct_types().collect();
        for (index, entry) in entries.iter().enumerate() {
            for other in &entries[index + 1..] {
                assert_ne!(
                    entry.ty, other.ty,
                    "duplicate tag between `{}` and `{}`",
                    entry.name, other.name
                );
            }
        }
    }

    #[test]
    fn every_registered_tag_is_known() {
        for entry in known_struct_types() {
            assert!(is_known_struct_type(entry.ty), "unknown `{}`", entry.name);
            assert_eq!(describe(entry.ty), Some(entry.name));
        }
    }

    #[test]
    fn declaration_lists_carry_their_set() {
        assert!(STABLE_STRUCT_TYPES
            .iter()
            .all(|entry| entry.set == StructSet::Stable));
        assert!(PREVIEW_STRUCT_TYPES
            .iter()
            .all(|entry| entry.set == StructSet::Preview));
        assert_eq!(
            known_struct_types().count(),
            STABLE_STRUCT_TYPES.len() + PREVIEW_STRUCT_TYPES.len()
        );
    }

    #[test]
    fn trait_and_table_agree_on_tags() {
        assert_eq!(
            tag_of::<SpatialAnchorCreateInfo>(),
            StructureType::SPATIAL_ANCHOR_CREATE_INFO
        );
        assert_eq!(
            tag_of::<SpatialAnchorPersistenceInfo>(),
            StructureType::SPATIAL_ANCHOR_PERSISTENCE_INFO
        );
    }

    #[test]
    fn unregistered_tags_are_rejected() {
        assert!(!is_known_struct_type(StructureType::UNKNOWN));
        assert!(!is_known_struct_type(StructureType(42)));
        assert_eq!(describe(StructureType(42)), None);
    }
}
