//! Opaque runtime handle newtypes.
//!
//! # Responsibility
//! - Wrap raw 64-bit runtime handles so unrelated handle kinds cannot be
//!   mixed in application code.
//!
//! # Invariants
//! - Handles are created and destroyed by the external runtime; this
//!   crate only transports them.
//! - The all-zero value is reserved as the null handle.

macro_rules! opaque_handle {
    ($( $(#[$meta:meta])* $name:ident ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(transparent)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name(u64);

            impl $name {
                /// Reserved null handle value.
                pub const NULL: Self = Self(0);

                /// Wraps a raw handle value received from the runtime.
                pub const fn from_raw(raw: u64) -> Self {
                    Self(raw)
                }

                /// Returns the raw value for runtime calls.
                pub const fn as_raw(self) -> u64 {
                    self.0
                }

                /// Returns whether this is the reserved null handle.
                pub const fn is_null(self) -> bool {
                    self.0 == 0
                }
            }
        )+
    };
}

opaque_handle! {
    /// Runtime instance created by the application at startup.
    InstanceHandle,
    /// Active session on one runtime instance.
    SessionHandle,
    /// Reference or anchor space usable for locating poses.
    SpaceHandle,
    /// Spatial anchor pinned to a real-world pose.
    SpatialAnchorHandle,
    /// Articulated hand tracker for one body side.
    HandTrackerHandle,
    /// System identifier used by graphics-requirements queries.
    SystemId,
}
