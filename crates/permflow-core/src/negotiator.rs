//! Finite-state negotiation flow for a single runtime permission request.

use crate::config::FlowConfig;
use crate::error::FlowError;
use log::{debug, info};
use permflow_protocol::{
    FlowResult, Outcome, OutcomeSink, PlatformGateway, TraceEvent, TraceSink, TriggerContext,
};
use std::sync::Arc;

/// Fixed component tag attached to every emitted trace event.
pub const SOURCE_TAG: &str = "PermissionNegotiator";

const TRACE_AGREE: &str = "User agree with prominent disclosure message.";
const TRACE_ALLOWED: &str = "User allowed storage permission.";
const TRACE_DISAGREE: &str = "User disagree with prominent disclosure message.";
const TRACE_REJECTED: &str = "User rejected storage permission.";
const TRACE_NEVER_ASK_AGAIN: &str = "User rejected storage permission twice or has selected \
\"never ask again\". Sending user to the app's setting to manually grant the permission.";
const TRACE_SETTINGS_GRANTED: &str = "User granted storage permission from app's settings.";
const TRACE_SETTINGS_DENIED: &str = "User didn't grant storage permission from app's settings.";

/// Where the flow currently sits between user interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Flow constructed but not started.
    Idle,
    /// Waiting for the user's response to the rationale.
    AwaitingUserDecision,
    /// Waiting for the OS consent dialog to close.
    AwaitingDialogResult,
    /// Waiting for the user to return from the OS settings screen.
    AwaitingSettingsResult,
    /// Outcome delivered; no further operations are valid.
    Terminal,
}

/// Drives one permission request through rationale, OS dialog, and settings
/// fallback, delivering exactly one [`Outcome`] through the injected sink.
///
/// Each suspension point is resumed exactly once by the matching callback;
/// resuming out of order is an error and never changes the delivered outcome.
pub struct PermissionNegotiator {
    config: FlowConfig,
    gateway: Arc<dyn PlatformGateway>,
    trace_sink: Arc<dyn TraceSink>,
    outcome_sink: Arc<dyn OutcomeSink>,
    state: FlowState,
    trigger_context: Option<TriggerContext>,
    outcome: Option<Outcome>,
}

impl PermissionNegotiator {
    /// Create an idle flow around the injected platform collaborators.
    pub fn new(
        config: FlowConfig,
        gateway: Arc<dyn PlatformGateway>,
        trace_sink: Arc<dyn TraceSink>,
        outcome_sink: Arc<dyn OutcomeSink>,
    ) -> Self {
        Self {
            config,
            gateway,
            trace_sink,
            outcome_sink,
            state: FlowState::Idle,
            trigger_context: None,
            outcome: None,
        }
    }

    /// Begin the flow, storing the caller's trigger context for the outcome.
    pub fn start(&mut self, trigger_context: Option<TriggerContext>) -> Result<(), FlowError> {
        self.expect_state("start", FlowState::Idle)?;
        debug!(
            "flow started (permission={}, trigger_context={:?})",
            self.config.permission, trigger_context
        );
        self.trigger_context = trigger_context;
        self.state = FlowState::AwaitingUserDecision;
        Ok(())
    }

    /// User agreed to the rationale; request the permission unless it is
    /// already granted.
    pub fn on_user_accepts(&mut self) -> Result<(), FlowError> {
        self.expect_state("on_user_accepts", FlowState::AwaitingUserDecision)?;
        self.trace(TRACE_AGREE);
        let state = self.gateway.permission_state(&self.config.permission)?;
        if state.is_granted() {
            self.trace(TRACE_ALLOWED);
            self.finish(FlowResult::Ok);
            return Ok(());
        }
        self.state = FlowState::AwaitingDialogResult;
        debug!(
            "launching consent dialog (permission={})",
            self.config.permission
        );
        self.gateway.request_permission(&self.config.permission);
        Ok(())
    }

    /// User rejected the rationale; cancel without touching the platform.
    pub fn on_user_declines(&mut self) -> Result<(), FlowError> {
        self.expect_state("on_user_declines", FlowState::AwaitingUserDecision)?;
        self.trace(TRACE_DISAGREE);
        self.finish(FlowResult::Canceled);
        Ok(())
    }

    /// The OS consent dialog closed; branch on the rationale heuristic.
    ///
    /// The dialog's own result code is deliberately ignored: a grant surfaces
    /// through `permission_state`, and the rationale heuristic is what tells
    /// a first refusal apart from a permanent one.
    pub fn on_dialog_result(&mut self) -> Result<(), FlowError> {
        self.expect_state("on_dialog_result", FlowState::AwaitingDialogResult)?;
        let advice = self.gateway.rationale_advice(&self.config.permission)?;
        if advice {
            self.trace(TRACE_REJECTED);
            self.finish(FlowResult::Canceled);
            return Ok(());
        }
        self.trace(TRACE_NEVER_ASK_AGAIN);
        self.state = FlowState::AwaitingSettingsResult;
        debug!(
            "opening application settings (package_id={})",
            self.config.package_id
        );
        self.gateway.open_app_settings(&self.config.package_id);
        Ok(())
    }

    /// The user returned from the settings screen; re-check the grant state.
    pub fn on_settings_result(&mut self) -> Result<(), FlowError> {
        self.expect_state("on_settings_result", FlowState::AwaitingSettingsResult)?;
        let state = self.gateway.permission_state(&self.config.permission)?;
        if state.is_granted() {
            self.trace(TRACE_SETTINGS_GRANTED);
            self.finish(FlowResult::Ok);
        } else {
            self.trace(TRACE_SETTINGS_DENIED);
            self.finish(FlowResult::Canceled);
        }
        Ok(())
    }

    /// Current flow state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Delivered outcome, once the flow is terminal.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Whether the outcome has been delivered.
    pub fn is_terminal(&self) -> bool {
        self.state == FlowState::Terminal
    }

    fn expect_state(&self, operation: &'static str, expected: FlowState) -> Result<(), FlowError> {
        if self.state == expected {
            return Ok(());
        }
        Err(FlowError::OutOfOrder {
            operation,
            state: self.state,
        })
    }

    fn trace(&self, message: &str) {
        debug!("audit trace (source={SOURCE_TAG}): {message}");
        self.trace_sink.emit(TraceEvent::now(SOURCE_TAG, message));
    }

    fn finish(&mut self, result: FlowResult) {
        let outcome = Outcome::new(result, self.trigger_context.clone());
        info!(
            "flow finished (result={:?}, trigger_context={:?})",
            outcome.result, outcome.trigger_context
        );
        self.state = FlowState::Terminal;
        self.outcome = Some(outcome.clone());
        self.outcome_sink.finish(outcome);
    }
}
