//! Known extension identifiers and naming-convention checks.
//!
//! # Responsibility
//! - Declare the stable and preview extension identifier lists.
//! - Validate the `XR_<VENDOR>_<name>` naming convention.
//!
//! # Invariants
//! - Identifiers are unique across the combined stable+preview lists,
//!   so a requested name matches at most one known identifier.
//! - Adding an extension touches exactly one list.

use once_cell::sync::Lazy;
use regex::Regex;

/// Spatial anchor creation and destruction.
pub const EXT_SPATIAL_ANCHOR: &str = "XR_MSFT_spatial_anchor";
/// Per-view hidden/visible mask query.
pub const EXT_VISIBILITY_MASK: &str = "XR_KHR_visibility_mask";
/// Monotonic clock to runtime time conversion, both directions.
pub const EXT_CONVERT_TIMESPEC_TIME: &str = "XR_KHR_convert_timespec_time";
/// OpenGL graphics-requirements query.
pub const EXT_OPENGL_ENABLE: &str = "XR_KHR_opengl_enable";
/// Articulated hand joint tracking.
pub const EXT_HAND_TRACKING: &str = "XR_EXT_hand_tracking";
/// World-scale unbounded reference space.
pub const EXT_UNBOUNDED_REFERENCE_SPACE: &str = "XR_MSFT_unbounded_reference_space";
/// Overlay session composition (experimental).
pub const EXT_OVERLAY: &str = "XR_EXTX_overlay";
/// Spatial anchor persistence across sessions (preview).
pub const EXT_SPATIAL_ANCHOR_PERSISTENCE: &str = "XR_MSFT_spatial_anchor_persistence_preview";

/// Stable extension identifiers.
pub const STABLE_EXTENSIONS: &[&str] = &[
    EXT_SPATIAL_ANCHOR,
    EXT_VISIBILITY_MASK,
    EXT_CONVERT_TIMESPEC_TIME,
    EXT_OPENGL_ENABLE,
    EXT_HAND_TRACKING,
    EXT_UNBOUNDED_REFERENCE_SPACE,
];

/// Preview/experimental extension identifiers.
pub const PREVIEW_EXTENSIONS: &[&str] = &[EXT_OVERLAY, EXT_SPATIAL_ANCHOR_PERSISTENCE];

static EXTENSION_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^XR_[A-Z][A-Z0-9]*_[a-z0-9][a-z0-9_]*$").expect("valid extension name regex")
});

/// Iterates every known identifier, stable list first.
pub fn known_extensions() -> impl Iterator<Item = &'static str> {
    STABLE_EXTENSIONS
        .iter()
        .chain(PREVIEW_EXTENSIONS.iter())
        .copied()
}

/// Returns whether `name` is one of the known identifiers.
pub fn is_known_extension(name: &str) -> bool {
    known_extensions().any(|known| known == name)
}

/// Returns whether `name` follows the `XR_<VENDOR>_<name>` convention.
pub fn is_well_formed_name(name: &str) -> bool {
    EXTENSION_NAME_RE.is_match(name)
}

/// Returns the vendor/status tag of a well-formed name.
pub fn vendor_tag(name: &str) -> Option<&str> {
    if !is_well_formed_name(name) {
        return None;
    }
    name.splitn(3, '_').nth(1)
}

/// Returns whether a known identifier belongs to the preview list.
pub fn is_preview_extension(name: &str) -> bool {
    PREVIEW_EXTENSIONS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::{
        is_known_extension, is_preview_extension, is_well_formed_name, known_extensions,
        vendor_tag, EXT_HAND_TRACKING, EXT_OVERLAY, EXT_SPATIAL_ANCHOR, PREVIEW_EXTENSIONS,
        STABLE_EXTENSIONS,
    };

    #[test]
    fn known_identifiers_are_well_formed() {
        for name in known_extensions() {
            assert!(is_well_formed_name(name), "malformed identifier `{name}`");
        }
    }

    #[test]
    fn known_identifiers_are_unique() {
        let names: Vec<_> = known_extensions().collect();
        for (index, name) in names.iter().enumerate() {
            assert!(
                !names[index + 1..].contains(name),
                "duplicate identifier `{name}`"
            );
        }
    }

    #[test]
    fn convention_rejects_malformed_names() {
        assert!(!is_well_formed_name("XR_msft_spatial_anchor"));
        assert!(!is_well_formed_name("XR_KHR_"));
        assert!(!is_well_formed_name("KHR_visibility_mask"));
        assert!(!is_well_formed_name("XR_KHR_Visibility_Mask"));
        assert!(is_well_formed_name("XR_VENDOR_unknown"));
    }

    #[test]
    fn vendor_tag_extracts_the_middle_segment() {
        assert_eq!(vendor_tag(EXT_SPATIAL_ANCHOR), Some("MSFT"));
        assert_eq!(vendor_tag(EXT_HAND_TRACKING), Some("EXT"));
        assert_eq!(vendor_tag(EXT_OVERLAY), Some("EXTX"));
        assert_eq!(vendor_tag("not_an_extension"), None);
    }

    #[test]
    fn preview_membership_follows_the_lists() {
        for name in STABLE_EXTENSIONS {
            assert!(!is_preview_extension(name));
        }
        for name in PREVIEW_EXTENSIONS {
            assert!(is_preview_extension(name));
            assert!(is_known_extension(name));
        }
        assert!(!is_known_extension("XR_VENDOR_unknown"));
    }
}
