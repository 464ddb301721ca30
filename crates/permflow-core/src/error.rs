//! Error types for the negotiation core crate.

use crate::negotiator::FlowState;
use permflow_protocol::PlatformError;
use thiserror::Error;

/// Errors returned by negotiator operations.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A platform query failed; the flow cannot choose a branch without it.
    #[error("platform query failed: {0}")]
    Platform(#[from] PlatformError),
    /// An operation was invoked while the flow was not awaiting it.
    #[error("{operation} called while flow state is {state:?}")]
    OutOfOrder {
        /// Name of the operation that was called.
        operation: &'static str,
        /// State the flow was actually in.
        state: FlowState,
    },
}
