//! Controller for the focus-mode switch of a task form.

use super::FocusTaskGuard;
use crate::focus::{
    domain::{FocusDecision, FocusTransitionRequest},
    ports::FocusStatusQuery,
};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Result of flipping a [`FocusSwitch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The switch already had the requested value.
    Unchanged,
    /// A status check is already pending for this switch.
    Busy,
    /// The guard decided; a rejection has already been reverted.
    Decided(FocusDecision),
}

#[derive(Debug, Clone, Copy, Default)]
struct SwitchState {
    is_on: bool,
    checking: bool,
    editing_active_focus: bool,
    awaiting_confirmation: bool,
}

/// Focus-mode switch that consults a [`FocusTaskGuard`] on every flip.
///
/// The switch moves optimistically, is disabled while its check is pending,
/// and reverts when the guard rejects. An allowed activation stays pending
/// until the user confirms or cancels it.
#[derive(Debug, Default)]
pub struct FocusSwitch {
    state: Mutex<SwitchState>,
}

impl FocusSwitch {
    /// Creates a switch for a new task.
    #[must_use]
    pub fn new(is_on: bool) -> Self {
        Self::with_state(SwitchState {
            is_on,
            ..SwitchState::default()
        })
    }

    /// Creates a switch for editing an existing task whose stored focus flag
    /// is `is_on`.
    #[must_use]
    pub fn editing(is_on: bool) -> Self {
        Self::with_state(SwitchState {
            is_on,
            editing_active_focus: is_on,
            ..SwitchState::default()
        })
    }

    fn with_state(state: SwitchState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SwitchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the displayed switch value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.lock().is_on
    }

    /// Reports whether a status check is pending.
    #[must_use]
    pub fn is_checking(&self) -> bool {
        self.lock().checking
    }

    /// Reports whether the control should be rendered disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        let state = self.lock();
        state.checking || (state.editing_active_focus && state.is_on)
    }

    /// Reports whether an allowed activation awaits the user's answer.
    #[must_use]
    pub fn awaits_confirmation(&self) -> bool {
        self.lock().awaiting_confirmation
    }

    /// Flips the switch to `desired` after consulting `guard`.
    pub async fn toggle<Q>(
        &self,
        guard: &FocusTaskGuard<Q>,
        invite_code: &str,
        desired: bool,
    ) -> SwitchOutcome
    where
        Q: FocusStatusQuery,
    {
        let (previous, editing_active_focus) = {
            let mut state = self.lock();
            if state.checking {
                return SwitchOutcome::Busy;
            }
            if state.is_on == desired {
                return SwitchOutcome::Unchanged;
            }
            let previous = state.is_on;
            state.is_on = desired;
            state.checking = true;
            state.awaiting_confirmation = false;
            (previous, state.editing_active_focus && previous)
        };
        let pending = PendingCheck::new(self, previous);

        let request = FocusTransitionRequest::new(invite_code, desired)
            .editing_active_focus(editing_active_focus);
        let decision = guard.evaluate(&request).await;

        pending.settle(&decision);
        SwitchOutcome::Decided(decision)
    }

    /// Accepts a pending activation.
    ///
    /// Returns `false` when no activation was pending.
    pub fn confirm_activation(&self) -> bool {
        let mut state = self.lock();
        let pending = state.awaiting_confirmation;
        state.awaiting_confirmation = false;
        pending
    }

    /// Declines a pending activation and turns the switch back off.
    pub fn cancel_activation(&self) {
        let mut state = self.lock();
        if state.awaiting_confirmation {
            state.awaiting_confirmation = false;
            state.is_on = false;
        }
    }
}

/// In-flight check of a [`FocusSwitch`].
///
/// Dropping it before [`PendingCheck::settle`] reverts the optimistic flip,
/// so an abandoned `toggle` never leaves the switch checking.
struct PendingCheck<'a> {
    switch: &'a FocusSwitch,
    previous: bool,
    settled: bool,
}

impl<'a> PendingCheck<'a> {
    const fn new(switch: &'a FocusSwitch, previous: bool) -> Self {
        Self {
            switch,
            previous,
            settled: false,
        }
    }

    fn settle(mut self, decision: &FocusDecision) {
        let mut state = self.switch.lock();
        state.checking = false;
        if decision.is_allowed() {
            state.awaiting_confirmation = decision.requires_confirmation();
        } else {
            state.is_on = self.previous;
        }
        drop(state);
        self.settled = true;
    }
}

impl Drop for PendingCheck<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::debug!(previous = self.previous, "focus check abandoned; reverting switch");
        let mut state = self.switch.lock();
        state.checking = false;
        state.is_on = self.previous;
    }
}
