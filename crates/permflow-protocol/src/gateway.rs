//! Platform collaborator interface the negotiation flow is driven through.

use crate::{PermissionState, PlatformError};

/// Host-platform surface the negotiator drives.
///
/// The two queries are read-only; the two launch calls only trigger platform
/// UI and return immediately. The platform resumes the flow afterwards by
/// calling the matching resume operation on the negotiator.
pub trait PlatformGateway: Send + Sync {
    /// Whether the named permission is currently granted.
    fn permission_state(&self, permission: &str) -> Result<PermissionState, PlatformError>;

    /// Platform heuristic: should an explanatory re-prompt be shown before
    /// re-requesting? `false` covers both "never asked yet" and
    /// "permanently denied".
    fn rationale_advice(&self, permission: &str) -> Result<bool, PlatformError>;

    /// Launch the OS-native consent dialog for the named permission.
    fn request_permission(&self, permission: &str);

    /// Open the OS application-details settings screen for the package.
    fn open_app_settings(&self, package_id: &str);
}
