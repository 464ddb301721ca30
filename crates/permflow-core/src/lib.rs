//! Core negotiation flow for runtime permission requests.
//!
//! This crate owns the state machine that mediates between a rationale
//! prompt, the OS consent dialog, and the settings-screen fallback.

pub mod config;
pub mod error;
pub mod negotiator;

pub use config::{FlowConfig, READ_EXTERNAL_STORAGE};
pub use error::FlowError;
/// Collaborator contract re-exported for convenience.
pub use permflow_protocol::PlatformGateway;
pub use negotiator::{FlowState, PermissionNegotiator, SOURCE_TAG};
