//! Plain geometry and joint value types shared with the runtime.
//!
//! These are wire-shape `#[repr(C)]` records referenced by the tagged
//! extensible structures. No math lives here; scene and GPU math belong
//! to the surrounding application framework.

/// 2D vector (visibility-mask vertices).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

/// 3D position in meters.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Unit quaternion orientation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternionf {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternionf {
    /// Identity rotation.
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// Rigid pose: orientation plus position.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Posef {
    pub orientation: Quaternionf,
    pub position: Vector3f,
}

/// Orientation component of a location is valid.
pub const LOCATION_FLAG_ORIENTATION_VALID: u64 = 0x1;
/// Position component of a location is valid.
pub const LOCATION_FLAG_POSITION_VALID: u64 = 0x2;
/// Orientation is actively tracked rather than inferred.
pub const LOCATION_FLAG_ORIENTATION_TRACKED: u64 = 0x4;
/// Position is actively tracked rather than inferred.
pub const LOCATION_FLAG_POSITION_TRACKED: u64 = 0x8;

/// Located pose and radius of one articulated hand joint.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandJointLocation {
    /// Bitwise OR of the `LOCATION_FLAG_*` values.
    pub location_flags: u64,
    pub pose: Posef,
    /// Joint collision radius in meters.
    pub radius: f32,
}
