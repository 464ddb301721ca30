//! Public SDK surface for permflow.
//!
//! This crate re-exports the negotiation flow and its protocol types so
//! consumers depend on a single crate.

/// Re-export for convenience.
pub use permflow_core as core;
/// Re-export for convenience.
pub use permflow_protocol as protocol;

pub use permflow_core::{
    FlowConfig, FlowError, FlowState, PermissionNegotiator, READ_EXTERNAL_STORAGE, SOURCE_TAG,
};
pub use permflow_protocol::{
    FlowResult, Outcome, OutcomeSink, PermissionState, PlatformError, PlatformGateway, TraceEvent,
    TraceSink, TriggerContext,
};
