//! Phantom-typed 128-bit identifiers for tracked entities.
//!
//! # Responsibility
//! - Give every tracked-entity domain its own identifier type over one
//!   shared 128-bit representation.
//!
//! # Invariants
//! - The domain marker never affects the stored bytes.
//! - Identifiers of different domains do not compare or assign; mixing
//!   them is a type error, not a runtime check.

use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// Domain marker contract for [`TrackedId`].
///
/// Markers are uninhabited types; `NAME` only labels debug output.
pub trait IdDomain {
    /// Display label used in debug output.
    const NAME: &'static str;
}

/// Identifier domain for surface meshes.
pub enum Mesh {}

/// Identifier domain for detected planes.
pub enum Plane {}

/// Identifier domain for scene objects.
pub enum SceneObject {}

impl IdDomain for Mesh {
    const NAME: &'static str = "mesh";
}

impl IdDomain for Plane {
    const NAME: &'static str = "plane";
}

impl IdDomain for SceneObject {
    const NAME: &'static str = "scene_object";
}

/// Opaque 128-bit identifier tagged with a compile-time domain.
///
/// Equality and hashing are byte-wise; there is no ordering and no
/// arithmetic. Identifiers of different domains share the representation
/// but are distinct types:
///
/// ```compile_fail
/// use parallax_core::model::ident::{MeshId, PlaneId};
///
/// let mesh = MeshId::from_raw(7);
/// let plane = PlaneId::from_raw(7);
/// assert!(mesh == plane); // mismatched id domains must not compare
/// ```
pub struct TrackedId<D: IdDomain> {
    lo: u64,
    hi: u64,
    domain: PhantomData<fn() -> D>,
}

/// Surface-mesh identifier.
pub type MeshId = TrackedId<Mesh>;
/// Detected-plane identifier.
pub type PlaneId = TrackedId<Plane>;
/// Scene-object identifier.
pub type SceneObjectId = TrackedId<SceneObject>;

impl<D: IdDomain> TrackedId<D> {
    /// Nil identifier (all-zero bytes).
    pub const NIL: Self = Self {
        lo: 0,
        hi: 0,
        domain: PhantomData,
    };

    /// Wraps the raw 128-bit representation.
    pub const fn from_raw(raw: u128) -> Self {
        Self {
            lo: raw as u64,
            hi: (raw >> 64) as u64,
            domain: PhantomData,
        }
    }

    /// Returns the raw 128-bit representation.
    pub const fn as_raw(self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    /// Returns whether this is the nil identifier.
    pub const fn is_nil(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    /// Returns the identifier as a UUID value.
    pub fn as_uuid(self) -> Uuid {
        Uuid::from_u128(self.as_raw())
    }
}

impl<D: IdDomain> From<Uuid> for TrackedId<D> {
    fn from(value: Uuid) -> Self {
        Self::from_raw(value.as_u128())
    }
}

impl<D: IdDomain> From<TrackedId<D>> for Uuid {
    fn from(value: TrackedId<D>) -> Self {
        value.as_uuid()
    }
}

// Manual impls keep marker domains free of trait bounds they cannot
// satisfy (markers are uninhabited).

impl<D: IdDomain> Clone for TrackedId<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: IdDomain> Copy for TrackedId<D> {}

impl<D: IdDomain> Default for TrackedId<D> {
    fn default() -> Self {
        Self::NIL
    }
}

impl<D: IdDomain> PartialEq for TrackedId<D> {
    fn eq(&self, other: &Self) -> bool {
        self.lo == other.lo && self.hi == other.hi
    }
}

impl<D: IdDomain> Eq for TrackedId<D> {}

impl<D: IdDomain> Hash for TrackedId<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.lo ^ (self.hi << 1));
    }
}

impl<D: IdDomain> Debug for TrackedId<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "TrackedId<{}>({})", D::NAME, self.as_uuid())
    }
}

#[cfg(test)]
mod tests {
    use super::{MeshId, PlaneId, SceneObjectId};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use uuid::Uuid;

    fn hash_of(id: MeshId) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn default_is_nil() {
        assert!(MeshId::default().is_nil());
        assert_eq!(MeshId::default(), MeshId::NIL);
    }

    #[test]
    fn raw_roundtrip_preserves_both_halves() {
        let raw = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210_u128;
        assert_eq!(MeshId::from_raw(raw).as_raw(), raw);
    }

    #[test]
    fn equal_bytes_hash_equal() {
        let a = MeshId::from_raw(42);
        let b = MeshId::from_raw(42);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
    }

    #[test]
    fn halves_both_contribute_to_the_hash() {
        let lo_only = MeshId::from_raw(1);
        let hi_only = MeshId::from_raw(1_u128 << 64);
        assert_ne!(hash_of(lo_only), hash_of(hi_only));
    }

    #[test]
    fn uuid_roundtrip_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = SceneObjectId::from(uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn debug_output_names_the_domain() {
        let id = PlaneId::from_raw(7);
        assert!(format!("{id:?}").starts_with("TrackedId<plane>"));
    }
}
