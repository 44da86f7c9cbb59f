//! Typed entry-point dispatch table.
//!
//! # Responsibility
//! - Resolve the entry point of every optional-extension function once
//!   per instance into typed nullable pointers.
//!
//! # Invariants
//! - Construction never fails; unresolved entries stay `None`.
//! - Resolution is blind: a non-`None` entry does not imply the owning
//!   extension was negotiated. Callers gate invocation on the
//!   enablement record, not on nullness.
//! - The table is owned by the instance that resolved it and must never
//!   be reused across instances.

use crate::model::handle::{
    HandTrackerHandle, InstanceHandle, SessionHandle, SpaceHandle, SpatialAnchorHandle, SystemId,
};
use crate::model::result::RuntimeResult;
use crate::structure::records::{
    GraphicsRequirementsOpenGl, HandJointLocations, HandJointsLocateInfo, HandTrackerCreateInfo,
    SpatialAnchorCreateInfo, SpatialAnchorPersistenceInfo, SpatialAnchorSpaceCreateInfo,
    VisibilityMask,
};
use log::{debug, info};
use std::mem;

/// Untyped entry point as produced by the runtime loader.
pub type RawEntryPoint = unsafe extern "system" fn();

/// Resolves named entry points against a live runtime instance.
///
/// Implemented by the shared-library loader in production and by test
/// doubles in tests. Returning `None` is not an error at this layer.
pub trait EntryPointResolver {
    /// Resolves `name` against `instance`; `None` when unresolved.
    fn resolve(&self, instance: InstanceHandle, name: &str) -> Option<RawEntryPoint>;
}

/// POSIX-style second/nanosecond pair for the time-conversion entry
/// points.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timespec {
    pub seconds: i64,
    pub nanoseconds: i64,
}

pub type PfnCreateSpatialAnchor = unsafe extern "system" fn(
    session: SessionHandle,
    create_info: *const SpatialAnchorCreateInfo,
    anchor: *mut SpatialAnchorHandle,
) -> RuntimeResult;

pub type PfnCreateSpatialAnchorSpace = unsafe extern "system" fn(
    session: SessionHandle,
    create_info: *const SpatialAnchorSpaceCreateInfo,
    space: *mut SpaceHandle,
) -> RuntimeResult;

pub type PfnDestroySpatialAnchor =
    unsafe extern "system" fn(anchor: SpatialAnchorHandle) -> RuntimeResult;

pub type PfnGetVisibilityMask = unsafe extern "system" fn(
    session: SessionHandle,
    view_configuration_type: i32,
    view_index: u32,
    mask_type: u32,
    mask: *mut VisibilityMask,
) -> RuntimeResult;

pub type PfnConvertTimespecTimeToTime = unsafe extern "system" fn(
    instance: InstanceHandle,
    timespec_time: *const Timespec,
    time: *mut i64,
) -> RuntimeResult;

pub type PfnConvertTimeToTimespecTime = unsafe extern "system" fn(
    instance: InstanceHandle,
    time: i64,
    timespec_time: *mut Timespec,
) -> RuntimeResult;

pub type PfnGetOpenGlGraphicsRequirements = unsafe extern "system" fn(
    instance: InstanceHandle,
    system_id: SystemId,
    requirements: *mut GraphicsRequirementsOpenGl,
) -> RuntimeResult;

pub type PfnCreateHandTracker = unsafe extern "system" fn(
    session: SessionHandle,
    create_info: *const HandTrackerCreateInfo,
    tracker: *mut HandTrackerHandle,
) -> RuntimeResult;

pub type PfnDestroyHandTracker =
    unsafe extern "system" fn(tracker: HandTrackerHandle) -> RuntimeResult;

pub type PfnLocateHandJoints = unsafe extern "system" fn(
    tracker: HandTrackerHandle,
    locate_info: *const HandJointsLocateInfo,
    locations: *mut HandJointLocations,
) -> RuntimeResult;

pub type PfnPersistSpatialAnchor = unsafe extern "system" fn(
    session: SessionHandle,
    persistence_info: *const SpatialAnchorPersistenceInfo,
) -> RuntimeResult;

pub type PfnUnpersistSpatialAnchor = unsafe extern "system" fn(
    session: SessionHandle,
    persistence_info: *const SpatialAnchorPersistenceInfo,
) -> RuntimeResult;

/// Per-instance table of resolved optional-extension entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchTable {
    pub create_spatial_anchor: Option<PfnCreateSpatialAnchor>,
    pub create_spatial_anchor_space: Option<PfnCreateSpatialAnchorSpace>,
    pub destroy_spatial_anchor: Option<PfnDestroySpatialAnchor>,
    pub get_visibility_mask: Option<PfnGetVisibilityMask>,
    pub convert_timespec_time_to_time: Option<PfnConvertTimespecTimeToTime>,
    pub convert_time_to_timespec_time: Option<PfnConvertTimeToTimespecTime>,
    pub get_opengl_graphics_requirements: Option<PfnGetOpenGlGraphicsRequirements>,
    pub create_hand_tracker: Option<PfnCreateHandTracker>,
    pub destroy_hand_tracker: Option<PfnDestroyHandTracker>,
    pub locate_hand_joints: Option<PfnLocateHandJoints>,
    pub persist_spatial_anchor: Option<PfnPersistSpatialAnchor>,
    pub unpersist_spatial_anchor: Option<PfnUnpersistSpatialAnchor>,
}

impl DispatchTable {
    /// Number of entry points in the fixed function set.
    pub const FUNCTION_COUNT: usize = 12;

    /// Resolves the full function set against `instance`.
    ///
    /// Resolution is blind and per-name; an individual failure leaves
    /// that entry `None` and construction always succeeds, degrading to
    /// an all-`None` table on a minimal runtime.
    pub fn resolve<R: EntryPointResolver + ?Sized>(instance: InstanceHandle, resolver: &R) -> Self {
        let table = Self {
            create_spatial_anchor: entry(resolver, instance, "xrCreateSpatialAnchorMSFT"),
            create_spatial_anchor_space: entry(resolver, instance, "xrCreateSpatialAnchorSpaceMSFT"),
            destroy_spatial_anchor: entry(resolver, instance, "xrDestroySpatialAnchorMSFT"),
            get_visibility_mask: entry(resolver, instance, "xrGetVisibilityMaskKHR"),
            convert_timespec_time_to_time: entry(
                resolver,
                instance,
                "xrConvertTimespecTimeToTimeKHR",
            ),
            convert_time_to_timespec_time: entry(
                resolver,
                instance,
                "xrConvertTimeToTimespecTimeKHR",
            ),
            get_opengl_graphics_requirements: entry(
                resolver,
                instance,
                "xrGetOpenGLGraphicsRequirementsKHR",
            ),
            create_hand_tracker: entry(resolver, instance, "xrCreateHandTrackerEXT"),
            destroy_hand_tracker: entry(resolver, instance, "xrDestroyHandTrackerEXT"),
            locate_hand_joints: entry(resolver, instance, "xrLocateHandJointsEXT"),
            persist_spatial_anchor: entry(resolver, instance, "xrPersistSpatialAnchorMSFT"),
            unpersist_spatial_anchor: entry(resolver, instance, "xrUnpersistSpatialAnchorMSFT"),
        };
        info!(
            "event=dispatch_resolved module=dispatch status=ok resolved={} total={}",
            table.resolved_count(),
            Self::FUNCTION_COUNT
        );
        table
    }

    /// Returns how many entries resolved to a function.
    pub fn resolved_count(&self) -> usize {
        [
            self.create_spatial_anchor.is_some(),
            self.create_spatial_anchor_space.is_some(),
            self.destroy_spatial_anchor.is_some(),
            self.get_visibility_mask.is_some(),
            self.convert_timespec_time_to_time.is_some(),
            self.convert_time_to_timespec_time.is_some(),
            self.get_opengl_graphics_requirements.is_some(),
            self.create_hand_tracker.is_some(),
            self.destroy_hand_tracker.is_some(),
            self.locate_hand_joints.is_some(),
            self.persist_spatial_anchor.is_some(),
            self.unpersist_spatial_anchor.is_some(),
        ]
        .iter()
        .filter(|resolved| **resolved)
        .count()
    }
}

fn entry<F: Copy, R: EntryPointResolver + ?Sized>(
    resolver: &R,
    instance: InstanceHandle,
    name: &str,
) -> Option<F> {
    match resolver.resolve(instance, name) {
        // Every Pfn type is pointer-sized; only the signature differs.
        Some(raw) => Some(unsafe { mem::transmute_copy::<RawEntryPoint, F>(&raw) }),
        None => {
            debug!("event=entry_point_unresolved module=dispatch status=ok name={name}");
            None
        }
    }
}
