//! Capability negotiation and typed dispatch for an XR runtime.
//!
//! This crate is the layer between an application and the runtime's
//! string-named extension mechanism: it records which optional
//! extensions were negotiated per instance, resolves their entry points
//! into typed tables, and keeps tagged extensible records and opaque
//! identifiers type-safe.

pub mod extension;
pub mod loader;
pub mod logging;
pub mod model;
pub mod structure;

pub use extension::dispatch::{DispatchTable, EntryPointResolver, RawEntryPoint, Timespec};
pub use extension::enablement::{ExtensionEnablement, ExtensionState};
pub use extension::names::{is_known_extension, is_well_formed_name, known_extensions};
pub use extension::properties::ExtensionProperties;
pub use loader::{LoaderError, RuntimeLibrary};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::handle::{
    HandTrackerHandle, InstanceHandle, SessionHandle, SpaceHandle, SpatialAnchorHandle, SystemId,
};
pub use model::ident::{IdDomain, Mesh, MeshId, Plane, PlaneId, SceneObject, SceneObjectId, TrackedId};
pub use model::result::RuntimeResult;
pub use model::side::{Side, SIDE_COUNT, SIDE_NAMES, SIDE_USER_PATHS};
pub use structure::registry::{
    create, describe, is_known_struct_type, known_struct_types, name_of, tag_of, ExtStruct,
    StructSet, StructTypeEntry, StructureType,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
