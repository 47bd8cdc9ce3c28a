//! Shared world state for focus-task guard BDD scenarios.

use std::sync::Arc;

use fanquest::focus::{
    adapters::InMemoryFocusStatusQuery,
    domain::{FocusDecision, InviteCode},
    services::{FocusSwitch, FocusTaskGuard},
};
use rstest::fixture;

/// Scenario world for focus guard behaviour tests.
pub struct FocusGuardWorld {
    pub statuses: InMemoryFocusStatusQuery,
    pub guard: FocusTaskGuard<InMemoryFocusStatusQuery>,
    pub switch: Option<FocusSwitch>,
    pub last_decision: Option<FocusDecision>,
}

impl FocusGuardWorld {
    /// Creates a world whose backend knows no invite codes.
    #[must_use]
    pub fn new() -> Self {
        let statuses = InMemoryFocusStatusQuery::new();
        let guard = FocusTaskGuard::new(Arc::new(statuses.clone()));
        Self {
            statuses,
            guard,
            switch: None,
            last_decision: None,
        }
    }

    /// Returns the decision recorded by the last `When` step.
    pub fn decision(&self) -> Result<&FocusDecision, eyre::Report> {
        self.last_decision
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing decision in scenario world"))
    }
}

impl Default for FocusGuardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FocusGuardWorld {
    FocusGuardWorld::default()
}

/// Parses an invite code named in a step.
pub fn invite_code(raw: &str) -> Result<InviteCode, eyre::Report> {
    InviteCode::new(raw).map_err(|err| eyre::eyre!("invalid invite code in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
