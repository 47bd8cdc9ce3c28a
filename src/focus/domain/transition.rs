//! Requested focus-task state change.

/// Request to change the focus flag of a task tied to an invite code.
///
/// The invite code is kept raw: an empty code is a decision outcome, not a
/// construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTransitionRequest {
    invite_code: String,
    desired_state: bool,
    editing_active_focus: bool,
}

impl FocusTransitionRequest {
    /// Creates a request for an arbitrary target state.
    #[must_use]
    pub fn new(invite_code: impl Into<String>, desired_state: bool) -> Self {
        Self {
            invite_code: invite_code.into(),
            desired_state,
            editing_active_focus: false,
        }
    }

    /// Requests turning focus mode on.
    #[must_use]
    pub fn activate(invite_code: impl Into<String>) -> Self {
        Self::new(invite_code, true)
    }

    /// Requests turning focus mode off.
    #[must_use]
    pub fn deactivate(invite_code: impl Into<String>) -> Self {
        Self::new(invite_code, false)
    }

    /// Marks the request as editing a task that already is the active focus
    /// task for its invite code.
    #[must_use]
    pub const fn editing_active_focus(mut self, editing: bool) -> Self {
        self.editing_active_focus = editing;
        self
    }

    /// Returns the raw invite code.
    #[must_use]
    pub fn invite_code(&self) -> &str {
        &self.invite_code
    }

    /// Returns the requested focus state.
    #[must_use]
    pub const fn desired_state(&self) -> bool {
        self.desired_state
    }

    /// Reports whether an active focus task is being edited.
    #[must_use]
    pub const fn is_editing_active_focus(&self) -> bool {
        self.editing_active_focus
    }
}
