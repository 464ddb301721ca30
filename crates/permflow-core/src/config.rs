//! Static configuration for one negotiation flow.

use serde::{Deserialize, Serialize};

/// Storage read permission requested by default.
pub const READ_EXTERNAL_STORAGE: &str = "android.permission.READ_EXTERNAL_STORAGE";

/// Names the single permission under negotiation and the application package
/// whose settings screen is opened on the permanent-refusal branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlowConfig {
    /// Platform name of the permission to request.
    pub permission: String,
    /// Application package id used when opening the settings screen.
    pub package_id: String,
}

impl FlowConfig {
    /// Build a config for an arbitrary named permission.
    pub fn new(permission: impl Into<String>, package_id: impl Into<String>) -> Self {
        Self {
            permission: permission.into(),
            package_id: package_id.into(),
        }
    }

    /// Build a config for the storage read permission.
    pub fn storage_read(package_id: impl Into<String>) -> Self {
        Self::new(READ_EXTERNAL_STORAGE, package_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn storage_read_names_the_storage_permission() {
        let config = FlowConfig::storage_read("org.example.app");
        assert_eq!(config.permission, READ_EXTERNAL_STORAGE);
        assert_eq!(config.package_id, "org.example.app");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = FlowConfig::new("android.permission.CAMERA", "org.example.app");
        let encoded = serde_json::to_string(&config).expect("serialize");
        let decoded: FlowConfig = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, config);
    }
}
