//! Extensible record definitions for the known extension set.
//!
//! # Responsibility
//! - Define the `#[repr(C)]` records exchanged with the runtime for the
//!   registered extensions.
//!
//! # Invariants
//! - Every record starts with the `ty`/`next` extension header.
//! - `Default` sets `ty` to the tag registered in the structure registry
//!   and leaves `next` null.

use super::registry::{ExtStruct, StructureType};
use crate::model::geometry::{HandJointLocation, Posef, Vector2f};
use crate::model::handle::{SessionHandle, SpaceHandle, SpatialAnchorHandle};
use crate::model::side::Side;
use std::ffi::c_void;
use std::ptr;

/// Visibility-mask query: triangles hidden from the user.
pub const VISIBILITY_MASK_TYPE_HIDDEN_TRIANGLE_MESH: u32 = 1;
/// Visibility-mask query: triangles visible to the user.
pub const VISIBILITY_MASK_TYPE_VISIBLE_TRIANGLE_MESH: u32 = 2;
/// Visibility-mask query: line loop around the visible area.
pub const VISIBILITY_MASK_TYPE_LINE_LOOP: u32 = 3;

/// Create info for a spatial anchor at a pose in a base space.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SpatialAnchorCreateInfo {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub space: SpaceHandle,
    pub pose: Posef,
    /// Runtime timestamp the pose is valid at.
    pub time: i64,
}

impl Default for SpatialAnchorCreateInfo {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            space: SpaceHandle::NULL,
            pose: Posef::default(),
            time: 0,
        }
    }
}

/// Create info for a space attached to an existing anchor.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SpatialAnchorSpaceCreateInfo {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub anchor: SpatialAnchorHandle,
    pub pose_in_anchor_space: Posef,
}

impl Default for SpatialAnchorSpaceCreateInfo {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            anchor: SpatialAnchorHandle::NULL,
            pose_in_anchor_space: Posef::default(),
        }
    }
}

/// Two-call-idiom output buffer for a per-view visibility mask.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct VisibilityMask {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub vertex_capacity_input: u32,
    pub vertex_count_output: u32,
    pub vertices: *mut Vector2f,
    pub index_capacity_input: u32,
    pub index_count_output: u32,
    pub indices: *mut u32,
}

impl Default for VisibilityMask {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            vertex_capacity_input: 0,
            vertex_count_output: 0,
            vertices: ptr::null_mut(),
            index_capacity_input: 0,
            index_count_output: 0,
            indices: ptr::null_mut(),
        }
    }
}

/// Event payload: a view's visibility mask changed.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EventDataVisibilityMaskChanged {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub session: SessionHandle,
    pub view_configuration_type: i32,
    pub view_index: u32,
}

impl Default for EventDataVisibilityMaskChanged {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            session: SessionHandle::NULL,
            view_configuration_type: 0,
            view_index: 0,
        }
    }
}

/// OpenGL API version range the runtime requires.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GraphicsRequirementsOpenGl {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub min_api_version_supported: u64,
    pub max_api_version_supported: u64,
}

impl Default for GraphicsRequirementsOpenGl {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            min_api_version_supported: 0,
            max_api_version_supported: 0,
        }
    }
}

/// Create info for an articulated hand tracker.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HandTrackerCreateInfo {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub hand: Side,
    pub hand_joint_set: i32,
}

impl Default for HandTrackerCreateInfo {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            hand: Side::Left,
            hand_joint_set: 0,
        }
    }
}

/// Input for one hand-joint locate call.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HandJointsLocateInfo {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub base_space: SpaceHandle,
    pub time: i64,
}

impl Default for HandJointsLocateInfo {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            base_space: SpaceHandle::NULL,
            time: 0,
        }
    }
}

/// Output buffer for located hand joints.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HandJointLocations {
    pub ty: StructureType,
    pub next: *mut c_void,
    /// Nonzero when the hand is currently tracked.
    pub is_active: u32,
    pub joint_count: u32,
    pub joint_locations: *mut HandJointLocation,
}

impl Default for HandJointLocations {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            is_active: 0,
            joint_count: 0,
            joint_locations: ptr::null_mut(),
        }
    }
}

/// System-level hand tracking support report.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SystemHandTrackingProperties {
    pub ty: StructureType,
    pub next: *mut c_void,
    /// Nonzero when the system supports hand tracking.
    pub supports_hand_tracking: u32,
}

impl Default for SystemHandTrackingProperties {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            supports_hand_tracking: 0,
        }
    }
}

/// Fixed-capacity nul-terminated anchor name.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct PersistenceName(pub [u8; 256]);

impl PersistenceName {
    /// Builds a name from `value`; `None` when it cannot be represented
    /// (too long for the fixed buffer, or contains a nul byte).
    pub fn new(value: &str) -> Option<Self> {
        let bytes = value.as_bytes();
        if bytes.len() >= 256 || bytes.contains(&0) {
            return None;
        }
        let mut buffer = [0_u8; 256];
        buffer[..bytes.len()].copy_from_slice(bytes);
        Some(Self(buffer))
    }

    /// Returns the name up to the first nul, `None` when not UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        let end = self.0.iter().position(|&byte| byte == 0)?;
        std::str::from_utf8(&self.0[..end]).ok()
    }
}

impl Default for PersistenceName {
    fn default() -> Self {
        Self([0; 256])
    }
}

impl std::fmt::Debug for PersistenceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PersistenceName({:?})", self.as_str().unwrap_or("<invalid>"))
    }
}

/// Names an anchor for persistence across sessions (preview).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SpatialAnchorPersistenceInfo {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub anchor: SpatialAnchorHandle,
    pub name: PersistenceName,
}

impl Default for SpatialAnchorPersistenceInfo {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            anchor: SpatialAnchorHandle::NULL,
            name: PersistenceName::default(),
        }
    }
}

/// Chained session create info marking the session as an overlay (preview).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SessionCreateInfoOverlay {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub create_flags: u64,
    pub session_layers_placement: u32,
}

impl Default for SessionCreateInfoOverlay {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            create_flags: 0,
            session_layers_placement: 0,
        }
    }
}

/// Event payload: the main session became visible or hidden (preview).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EventDataMainSessionVisibilityChanged {
    pub ty: StructureType,
    pub next: *mut c_void,
    /// Nonzero when the main session is visible.
    pub visible: u32,
    pub flags: u64,
}

impl Default for EventDataMainSessionVisibilityChanged {
    fn default() -> Self {
        Self {
            ty: Self::TYPE,
            next: ptr::null_mut(),
            visible: 0,
            flags: 0,
        }
    }
}
