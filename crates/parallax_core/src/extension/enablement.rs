//! Extension enablement negotiation.
//!
//! # Responsibility
//! - Record, per known extension, whether it was negotiated for one
//!   runtime instance and at what version.
//!
//! # Invariants
//! - Built exactly once per instance; immutable afterwards and safe to
//!   share read-only across threads.
//! - An extension absent from both inputs stays `{enabled: false, 0}`.
//! - Unrecognized requested names are ignored, never an error.

use crate::extension::names;
use crate::extension::properties::ExtensionProperties;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Negotiated state of one known extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionState {
    /// Whether the application requested the extension by exact name.
    pub enabled: bool,
    /// Runtime-reported revision; 0 when not reported or not enabled.
    pub version: u32,
}

/// Per-instance enablement record for the known extension set.
///
/// One field per known identifier so feature branches read as plain
/// field accesses. Lifetime is bounded by the owning instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionEnablement {
    pub spatial_anchor: ExtensionState,
    pub visibility_mask: ExtensionState,
    pub convert_timespec_time: ExtensionState,
    pub opengl_enable: ExtensionState,
    pub hand_tracking: ExtensionState,
    pub unbounded_reference_space: ExtensionState,
    pub overlay: ExtensionState,
    pub spatial_anchor_persistence: ExtensionState,
}

impl ExtensionEnablement {
    /// Builds the enablement record from the names requested at instance
    /// creation and the extension properties the runtime reported.
    ///
    /// # Invariants
    /// - A requested name matches at most one known identifier; matching
    ///   stops at the first hit.
    /// - A requested name missing from `available` keeps `enabled: true`
    ///   with `version: 0` — a tolerated inconsistency, logged at warn.
    /// - Names unknown to this layer are ignored (debug log only);
    ///   callers needing strict validation inspect the result themselves.
    pub fn build<S: AsRef<str>>(enabled_names: &[S], available: &[ExtensionProperties]) -> Self {
        let mut record = Self::default();
        for raw in enabled_names {
            let name = raw.as_ref();
            let version = reported_version(name, available);
            match record.state_mut(name) {
                Some(state) => {
                    state.enabled = true;
                    state.version = version;
                    if version == 0 {
                        warn!(
                            "event=extension_version_missing module=extension status=tolerated name={name}"
                        );
                    }
                }
                None => {
                    debug!("event=extension_ignored module=extension status=ok name={name}");
                }
            }
        }
        info!(
            "event=enablement_built module=extension status=ok enabled_count={}",
            record.iter().filter(|(_, state)| state.enabled).count()
        );
        record
    }

    /// Returns the state for a known identifier, `None` otherwise.
    pub fn state(&self, name: &str) -> Option<&ExtensionState> {
        self.iter()
            .find(|(known, _)| *known == name)
            .map(|(_, state)| state)
    }

    /// Iterates `(identifier, state)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ExtensionState)> + '_ {
        [
            (names::EXT_SPATIAL_ANCHOR, &self.spatial_anchor),
            (names::EXT_VISIBILITY_MASK, &self.visibility_mask),
            (names::EXT_CONVERT_TIMESPEC_TIME, &self.convert_timespec_time),
            (names::EXT_OPENGL_ENABLE, &self.opengl_enable),
            (names::EXT_HAND_TRACKING, &self.hand_tracking),
            (
                names::EXT_UNBOUNDED_REFERENCE_SPACE,
                &self.unbounded_reference_space,
            ),
            (names::EXT_OVERLAY, &self.overlay),
            (
                names::EXT_SPATIAL_ANCHOR_PERSISTENCE,
                &self.spatial_anchor_persistence,
            ),
        ]
        .into_iter()
    }

    fn state_mut(&mut self, name: &str) -> Option<&mut ExtensionState> {
        match name {
            names::EXT_SPATIAL_ANCHOR => Some(&mut self.spatial_anchor),
            names::EXT_VISIBILITY_MASK => Some(&mut self.visibility_mask),
            names::EXT_CONVERT_TIMESPEC_TIME => Some(&mut self.convert_timespec_time),
            names::EXT_OPENGL_ENABLE => Some(&mut self.opengl_enable),
            names::EXT_HAND_TRACKING => Some(&mut self.hand_tracking),
            names::EXT_UNBOUNDED_REFERENCE_SPACE => Some(&mut self.unbounded_reference_space),
            names::EXT_OVERLAY => Some(&mut self.overlay),
            names::EXT_SPATIAL_ANCHOR_PERSISTENCE => Some(&mut self.spatial_anchor_persistence),
            _ => None,
        }
    }
}

fn reported_version(name: &str, available: &[ExtensionProperties]) -> u32 {
    available
        .iter()
        .find(|props| props.name == name)
        .map(|props| props.version)
        .unwrap_or(0)
}
