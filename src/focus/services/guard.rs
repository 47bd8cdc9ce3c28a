//! Decision procedure for focus-task transitions.

use crate::focus::{
    domain::{
        Approval, FocusDecision, FocusRejection, FocusTaskStatus, FocusTransitionRequest,
        InviteCode,
    },
    ports::FocusStatusQuery,
};
use std::sync::Arc;
use std::time::Duration;

/// Decides whether a focus-task change may proceed.
///
/// The guard holds no state of its own: each evaluation depends only on its
/// inputs and at most one status query. Queries are never retried; a failed
/// or timed-out query blocks the transition.
#[derive(Debug)]
pub struct FocusTaskGuard<Q>
where
    Q: FocusStatusQuery,
{
    query: Arc<Q>,
    query_timeout: Option<Duration>,
}

impl<Q> Clone for FocusTaskGuard<Q>
where
    Q: FocusStatusQuery,
{
    fn clone(&self) -> Self {
        Self {
            query: Arc::clone(&self.query),
            query_timeout: self.query_timeout,
        }
    }
}

impl<Q> FocusTaskGuard<Q>
where
    Q: FocusStatusQuery,
{
    /// Creates a guard over a status query adapter.
    #[must_use]
    pub const fn new(query: Arc<Q>) -> Self {
        Self {
            query,
            query_timeout: None,
        }
    }

    /// Bounds each status query by `timeout`.
    #[must_use]
    pub const fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }

    /// Evaluates a change of the focus flag for a task of `invite_code`.
    ///
    /// `is_edit_mode_with_existing_focus` is true only when editing a task
    /// that already is the active focus task of its invite code.
    pub async fn evaluate_transition(
        &self,
        invite_code: &str,
        desired_state: bool,
        is_edit_mode_with_existing_focus: bool,
    ) -> FocusDecision {
        self.evaluate(
            &FocusTransitionRequest::new(invite_code, desired_state)
                .editing_active_focus(is_edit_mode_with_existing_focus),
        )
        .await
    }

    /// Evaluates a transition request.
    pub async fn evaluate(&self, request: &FocusTransitionRequest) -> FocusDecision {
        let decision = if request.desired_state() {
            self.evaluate_activation(request.invite_code()).await
        } else {
            evaluate_deactivation(request.is_editing_active_focus())
        };
        log_decision(request, &decision);
        decision
    }

    async fn evaluate_activation(&self, raw_invite_code: &str) -> FocusDecision {
        let Ok(invite_code) = InviteCode::new(raw_invite_code) else {
            return FocusRejection::MissingInviteCode.into();
        };
        match self.fetch_status(&invite_code).await {
            Ok(status) => decide_activation(&status),
            Err(reason) => FocusRejection::StatusUnavailable { reason }.into(),
        }
    }

    async fn fetch_status(&self, invite_code: &InviteCode) -> Result<FocusTaskStatus, String> {
        let query = self.query.focus_status(invite_code);
        let outcome = match self.query_timeout {
            Some(limit) => tokio::time::timeout(limit, query)
                .await
                .map_err(|_| format!("status query timed out after {limit:?}"))?,
            None => query.await,
        };
        outcome.map_err(|err| err.to_string())
    }
}

const fn evaluate_deactivation(editing_active_focus: bool) -> FocusDecision {
    if editing_active_focus {
        FocusDecision::Rejected(FocusRejection::CooldownCancelForbidden)
    } else {
        FocusDecision::Allowed(Approval::Unchecked)
    }
}

fn decide_activation(status: &FocusTaskStatus) -> FocusDecision {
    if status.has_focus_task {
        return FocusRejection::FocusTaskAlreadyExists {
            title: status.focus_task_title().map(str::to_owned),
        }
        .into();
    }
    if status.is_in_cooldown {
        return FocusRejection::CooldownActive {
            until: status.resume_time(),
        }
        .into();
    }
    FocusDecision::Allowed(Approval::ConfirmActivation)
}

fn log_decision(request: &FocusTransitionRequest, decision: &FocusDecision) {
    let invite_code = request.invite_code();
    let desired_state = request.desired_state();
    match decision {
        FocusDecision::Allowed(approval) => {
            tracing::debug!(invite_code, desired_state, ?approval, "focus transition allowed");
        }
        FocusDecision::Rejected(FocusRejection::StatusUnavailable { reason }) => {
            tracing::warn!(invite_code, desired_state, %reason, "focus status unavailable");
        }
        FocusDecision::Rejected(rejection) => {
            tracing::info!(
                invite_code,
                desired_state,
                kind = rejection.kind().as_str(),
                "focus transition rejected"
            );
        }
    }
}
