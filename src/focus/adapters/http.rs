//! Focus status adapter over the station backend HTTP API.

use crate::api::ApiClient;
use crate::focus::{
    domain::{FocusTaskStatus, InviteCode},
    ports::{FocusStatusQuery, FocusStatusQueryError, FocusStatusQueryResult},
};
use async_trait::async_trait;

/// Queries `GET /api/station/invite-codes/{code}/focus-status`.
#[derive(Debug, Clone)]
pub struct HttpFocusStatusClient {
    api: ApiClient,
}

impl HttpFocusStatusClient {
    /// Creates an adapter over a shared API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FocusStatusQuery for HttpFocusStatusClient {
    async fn focus_status(
        &self,
        invite_code: &InviteCode,
    ) -> FocusStatusQueryResult<FocusTaskStatus> {
        let url = self.api.endpoint([
            "api",
            "station",
            "invite-codes",
            invite_code.as_str(),
            "focus-status",
        ])?;
        self.api
            .get_json::<FocusTaskStatus>(url, &[])
            .await?
            .ok_or_else(|| FocusStatusQueryError::Empty(invite_code.clone()))
    }
}
