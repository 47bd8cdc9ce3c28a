//! Outcome of evaluating a focus-task transition.

use super::COOLDOWN_WINDOW_HOURS;
use chrono::{DateTime, Utc};
use thiserror::Error;

const ACTIVATION_PROMPT: &str = "A focus task receives extra visibility and only one is allowed \
     per invite code. Its status cannot change again for 24 hours. Set this task as the focus task?";

/// How an allowed transition should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approval {
    /// The change needs no check and no confirmation.
    Unchecked,
    /// The caller must ask the user to confirm activation before committing.
    ConfirmActivation,
}

impl Approval {
    /// Returns the confirmation text to show, if any.
    #[must_use]
    pub const fn prompt(self) -> Option<&'static str> {
        match self {
            Self::Unchecked => None,
            Self::ConfirmActivation => Some(ACTIVATION_PROMPT),
        }
    }
}

/// Reason a focus transition was blocked.
///
/// All rejections are recoverable by the user; the caller reverts any
/// optimistic toggle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusRejection {
    /// No invite code was supplied.
    #[error("select an invite code before setting a focus task")]
    MissingInviteCode,

    /// The focus status could not be verified.
    #[error("cannot verify focus task status, try again later ({reason})")]
    StatusUnavailable {
        /// Human-readable cause.
        reason: String,
    },

    /// Another task already holds the focus slot.
    #[error("{}", occupied_message(.title.as_deref()))]
    FocusTaskAlreadyExists {
        /// Title of the occupying task, when the backend reported it.
        title: Option<String>,
    },

    /// The invite code changed its focus task less than 24 hours ago.
    #[error("{}", cooldown_message(.until.as_ref()))]
    CooldownActive {
        /// When another change becomes possible, if known.
        until: Option<DateTime<Utc>>,
    },

    /// An active focus task cannot be turned off while editing it.
    #[error("an active focus task cannot be turned off within 24 hours")]
    CooldownCancelForbidden,
}

impl FocusRejection {
    /// Returns the kind of this rejection.
    #[must_use]
    pub const fn kind(&self) -> DecisionKind {
        match self {
            Self::MissingInviteCode => DecisionKind::MissingInviteCode,
            Self::StatusUnavailable { .. } => DecisionKind::StatusUnavailable,
            Self::FocusTaskAlreadyExists { .. } => DecisionKind::FocusTaskAlreadyExists,
            Self::CooldownActive { .. } => DecisionKind::CooldownActive,
            Self::CooldownCancelForbidden => DecisionKind::CooldownCancelForbidden,
        }
    }
}

/// Payload-free classification of a [`FocusDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionKind {
    /// The transition may proceed.
    Allowed,
    /// See [`FocusRejection::MissingInviteCode`].
    MissingInviteCode,
    /// See [`FocusRejection::StatusUnavailable`].
    StatusUnavailable,
    /// See [`FocusRejection::FocusTaskAlreadyExists`].
    FocusTaskAlreadyExists,
    /// See [`FocusRejection::CooldownActive`].
    CooldownActive,
    /// See [`FocusRejection::CooldownCancelForbidden`].
    CooldownCancelForbidden,
}

impl DecisionKind {
    /// Returns a stable snake-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::MissingInviteCode => "missing_invite_code",
            Self::StatusUnavailable => "status_unavailable",
            Self::FocusTaskAlreadyExists => "focus_task_already_exists",
            Self::CooldownActive => "cooldown_active",
            Self::CooldownCancelForbidden => "cooldown_cancel_forbidden",
        }
    }
}

/// Result of evaluating a focus-task transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusDecision {
    /// The transition may proceed.
    Allowed(Approval),
    /// The transition is blocked.
    Rejected(FocusRejection),
}

impl FocusDecision {
    /// Reports whether the transition may proceed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// Returns the decision kind.
    #[must_use]
    pub const fn kind(&self) -> DecisionKind {
        match self {
            Self::Allowed(_) => DecisionKind::Allowed,
            Self::Rejected(rejection) => rejection.kind(),
        }
    }

    /// Returns the rejection, if the transition is blocked.
    #[must_use]
    pub const fn rejection(&self) -> Option<&FocusRejection> {
        match self {
            Self::Allowed(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }

    /// Reports whether the caller must ask for confirmation.
    #[must_use]
    pub const fn requires_confirmation(&self) -> bool {
        matches!(self, Self::Allowed(Approval::ConfirmActivation))
    }
}

impl From<FocusRejection> for FocusDecision {
    fn from(rejection: FocusRejection) -> Self {
        Self::Rejected(rejection)
    }
}

fn occupied_message(title: Option<&str>) -> String {
    match title {
        Some(title) => format!(
            "invite code already has the focus task \"{title}\"; only one focus task is allowed per invite code"
        ),
        None => "invite code already has a focus task; only one focus task is allowed per invite code"
            .to_owned(),
    }
}

fn cooldown_message(until: Option<&DateTime<Utc>>) -> String {
    let resume = until.map_or_else(
        || "an unknown time".to_owned(),
        |until| until.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    format!(
        "focus task status can change once every {COOLDOWN_WINDOW_HOURS} hours; try again after {resume}"
    )
}
