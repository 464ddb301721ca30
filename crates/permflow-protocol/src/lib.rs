//! Shared types for permission negotiation outcomes, trace events, and the
//! collaborator contracts the flow is driven through.

mod gateway;

pub use gateway::PlatformGateway;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque caller-supplied identifier correlating an asynchronous permission
/// outcome back to the component that requested it.
pub type TriggerContext = String;

/// Grant state of a permission as reported by the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    /// The permission is currently granted.
    Granted,
    /// The permission is not granted.
    NotGranted,
}

impl PermissionState {
    /// Whether this state represents a granted permission.
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionState::Granted)
    }
}

/// Final result of one negotiation flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowResult {
    /// The permission ended up granted.
    Ok,
    /// The permission was refused somewhere along the flow.
    Canceled,
}

/// Terminal outcome delivered to the caller, exactly once per flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the permission was ultimately granted.
    pub result: FlowResult,
    /// Trigger context carried unchanged from `start`; absent stays absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_context: Option<TriggerContext>,
}

impl Outcome {
    /// Build an outcome preserving the caller's trigger context.
    pub fn new(result: FlowResult, trigger_context: Option<TriggerContext>) -> Self {
        Self {
            result,
            trigger_context,
        }
    }
}

/// One entry of the negotiation audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Unique id for the event.
    pub id: Uuid,
    /// Timestamp when the event was emitted.
    pub created_at: DateTime<Utc>,
    /// Fixed component tag of the emitter.
    pub source: String,
    /// Human-readable audit message.
    pub message: String,
}

impl TraceEvent {
    /// Build a trace event stamped with a fresh id and the current time.
    pub fn now(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source: source.into(),
            message: message.into(),
        }
    }
}

/// Errors raised by platform queries.
#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    /// The grant state of a permission could not be determined.
    #[error("permission state query failed for {permission}: {reason}")]
    StateQuery { permission: String, reason: String },
    /// The rationale heuristic could not be evaluated.
    #[error("rationale query failed for {permission}: {reason}")]
    RationaleQuery { permission: String, reason: String },
}

/// Fire-and-forget sink for audit trace events.
pub trait TraceSink: Send + Sync {
    /// Emit an event to downstream listeners.
    fn emit(&self, event: TraceEvent);
}

/// Caller-facing result channel, invoked exactly once per flow instance.
pub trait OutcomeSink: Send + Sync {
    /// Deliver the terminal outcome to whoever started the flow.
    fn finish(&self, outcome: Outcome);
}
