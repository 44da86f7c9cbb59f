//! Runtime-reported extension property record.

use serde::{Deserialize, Serialize};

/// One `{name, version}` record reported by the runtime.
///
/// Owned and populated by the external runtime at instance creation;
/// this layer only reads it during enablement negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionProperties {
    /// Specification-defined identifier string.
    pub name: String,
    /// Runtime-reported revision; always positive when reported.
    pub version: u32,
}

impl ExtensionProperties {
    /// Creates one property record.
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExtensionProperties;

    #[test]
    fn serialization_uses_expected_wire_fields() {
        let props = ExtensionProperties::new("XR_KHR_visibility_mask", 2);
        let json = serde_json::to_value(&props).expect("properties should serialize");
        assert_eq!(json["name"], "XR_KHR_visibility_mask");
        assert_eq!(json["version"], 2);

        let decoded: ExtensionProperties =
            serde_json::from_value(json).expect("properties should deserialize");
        assert_eq!(decoded, props);
    }
}
