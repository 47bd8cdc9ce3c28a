//! In-memory focus status source for tests and offline runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::api::ApiError;
use crate::focus::{
    domain::{FocusTaskStatus, InviteCode},
    ports::{FocusStatusQuery, FocusStatusQueryError, FocusStatusQueryResult},
};

#[derive(Debug, Default)]
struct InMemoryFocusState {
    responses: HashMap<InviteCode, FocusStatusQueryResult<FocusTaskStatus>>,
}

/// Thread-safe scripted focus status source.
///
/// Unknown invite codes answer like the backend does: HTTP 404 with an
/// "invite code not found" detail. Every call is counted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFocusStatusQuery {
    state: Arc<RwLock<InMemoryFocusState>>,
    queries: Arc<AtomicUsize>,
}

impl InMemoryFocusStatusQuery {
    /// Creates a source with no known invite codes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status reported for `invite_code`.
    pub fn set_status(&self, invite_code: InviteCode, status: FocusTaskStatus) {
        self.respond(invite_code, Ok(status));
    }

    /// Makes queries for `invite_code` fail with `error`.
    pub fn fail_with(&self, invite_code: InviteCode, error: FocusStatusQueryError) {
        self.respond(invite_code, Err(error));
    }

    /// Returns the number of queries issued so far.
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn respond(&self, invite_code: InviteCode, response: FocusStatusQueryResult<FocusTaskStatus>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .responses
            .insert(invite_code, response);
    }
}

#[async_trait]
impl FocusStatusQuery for InMemoryFocusStatusQuery {
    async fn focus_status(
        &self,
        invite_code: &InviteCode,
    ) -> FocusStatusQueryResult<FocusTaskStatus> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.responses.get(invite_code).cloned().unwrap_or_else(|| {
            Err(FocusStatusQueryError::Api(ApiError::Status {
                status: 404,
                message: Some("invite code not found or inactive".to_owned()),
            }))
        })
    }
}
