//! Scriptable platform gateway for deterministic scenarios.

use parking_lot::Mutex;
use permflow_protocol::{PermissionState, PlatformError, PlatformGateway};

/// Fake platform whose query answers are fixed per scenario and whose UI
/// launches are recorded instead of shown.
///
/// The grant state can be flipped between flow steps to simulate the user
/// granting the permission from the OS dialog or settings screen.
pub struct FakePlatform {
    granted: Mutex<bool>,
    rationale: Mutex<bool>,
    fail_state_query: Mutex<bool>,
    fail_rationale_query: Mutex<bool>,
    dialog_requests: Mutex<Vec<String>>,
    settings_opens: Mutex<Vec<String>>,
}

impl FakePlatform {
    /// Build a fake answering the two platform queries with fixed values.
    pub fn new(granted: bool, rationale: bool) -> Self {
        Self {
            granted: Mutex::new(granted),
            rationale: Mutex::new(rationale),
            fail_state_query: Mutex::new(false),
            fail_rationale_query: Mutex::new(false),
            dialog_requests: Mutex::new(Vec::new()),
            settings_opens: Mutex::new(Vec::new()),
        }
    }

    /// Flip the grant state mid-scenario.
    pub fn set_granted(&self, granted: bool) {
        *self.granted.lock() = granted;
    }

    /// Flip the rationale heuristic mid-scenario.
    pub fn set_rationale(&self, rationale: bool) {
        *self.rationale.lock() = rationale;
    }

    /// Make subsequent `permission_state` queries fail.
    pub fn fail_state_queries(&self) {
        *self.fail_state_query.lock() = true;
    }

    /// Make subsequent `rationale_advice` queries fail.
    pub fn fail_rationale_queries(&self) {
        *self.fail_rationale_query.lock() = true;
    }

    /// Permissions the consent dialog was launched for, in order.
    pub fn dialog_requests(&self) -> Vec<String> {
        self.dialog_requests.lock().clone()
    }

    /// Package ids the settings screen was opened for, in order.
    pub fn settings_opens(&self) -> Vec<String> {
        self.settings_opens.lock().clone()
    }
}

impl PlatformGateway for FakePlatform {
    fn permission_state(&self, permission: &str) -> Result<PermissionState, PlatformError> {
        if *self.fail_state_query.lock() {
            return Err(PlatformError::StateQuery {
                permission: permission.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        if *self.granted.lock() {
            Ok(PermissionState::Granted)
        } else {
            Ok(PermissionState::NotGranted)
        }
    }

    fn rationale_advice(&self, permission: &str) -> Result<bool, PlatformError> {
        if *self.fail_rationale_query.lock() {
            return Err(PlatformError::RationaleQuery {
                permission: permission.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(*self.rationale.lock())
    }

    fn request_permission(&self, permission: &str) {
        self.dialog_requests.lock().push(permission.to_string());
    }

    fn open_app_settings(&self, package_id: &str) {
        self.settings_opens.lock().push(package_id.to_string());
    }
}
