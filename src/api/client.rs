//! `reqwest`-based client for the station backend.

use super::ApiError;
use crate::session::SessionContext;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Error body shape used by the backend (`{"error": "..."}`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Shared HTTP client bound to one backend and one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionContext,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] when `base_url` is not an
    /// absolute `http`/`https` URL, or [`ApiError::Transport`] when the
    /// underlying client cannot be built.
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        session: SessionContext,
    ) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(ApiError::transport)?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the session supplying bearer tokens.
    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Appends percent-encoded path segments to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] when the base URL cannot carry a
    /// path.
    pub fn endpoint<I>(&self, segments: I) -> Result<Url, ApiError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues a `GET` and decodes the JSON body.
    ///
    /// Returns `Ok(None)` when the backend answers with an empty or `null`
    /// body. An HTTP 401 clears the session before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-success
    /// statuses and undecodable bodies.
    pub async fn get_json<T>(&self, url: Url, query: &[(&str, String)]) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "backend GET");
        let mut request = self.http.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token.expose());
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        let body = response.bytes().await.map_err(classify)?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%url, "backend rejected credentials");
            self.session.logout();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|detail| detail.error.or(detail.message));
            tracing::warn!(%url, status = status.as_u16(), ?message, "backend request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        if body.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice::<Option<T>>(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|_| ApiError::InvalidBaseUrl(raw.to_owned()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(url)
}

fn classify(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::transport(err)
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::ApiClient;
    use crate::api::ApiError;
    use crate::session::SessionContext;
    use crate::session::domain::{FanIdentity, InviteCode};
    use rstest::rstest;
    use std::time::Duration;

    fn client(base_url: &str) -> Result<ApiClient, ApiError> {
        ApiClient::new(base_url, Duration::from_secs(5), SessionContext::new())
    }

    #[rstest]
    #[case("http://localhost:5000")]
    #[case("http://localhost:5000/")]
    fn endpoint_appends_segments_to_root(#[case] base_url: &str) {
        let api = client(base_url).expect("valid base url");
        let url = api
            .endpoint(["api", "station", "invite-codes", "STAR7", "focus-status"])
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/station/invite-codes/STAR7/focus-status"
        );
    }

    #[rstest]
    fn client_keeps_base_url_and_shared_session() {
        let session = SessionContext::new();
        let api = ApiClient::new(
            " http://localhost:5000 ",
            Duration::from_secs(5),
            session.clone(),
        )
        .expect("valid base url");

        assert_eq!(api.base_url().as_str(), "http://localhost:5000/");
        session.remember_fan(FanIdentity::new(
            "little-star",
            InviteCode::new("STAR7").expect("valid invite code"),
        ));
        assert_eq!(
            api.session().fan().map(|fan| fan.nickname),
            Some("little-star".to_owned())
        );
    }

    #[rstest]
    fn endpoint_keeps_base_path_prefix() {
        let api = client("https://example.test/v1/").expect("valid base url");
        let url = api.endpoint(["api", "fan", "leaderboard"]).expect("endpoint");
        assert_eq!(url.as_str(), "https://example.test/v1/api/fan/leaderboard");
    }

    #[rstest]
    fn endpoint_percent_encodes_segments() {
        let api = client("http://localhost:5000").expect("valid base url");
        let url = api
            .endpoint(["api", "station", "invite-codes", "a/b c", "focus-status"])
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/station/invite-codes/a%2Fb%20c/focus-status"
        );
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://example.test")]
    #[case("mailto:admin@example.test")]
    fn new_rejects_unusable_base_urls(#[case] base_url: &str) {
        assert!(matches!(client(base_url), Err(ApiError::InvalidBaseUrl(_))));
    }

    #[rstest]
    fn status_error_prefers_backend_detail() {
        let with_detail = ApiError::Status {
            status: 404,
            message: Some("invite code not found".to_owned()),
        };
        let without_detail = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(with_detail.to_string(), "invite code not found");
        assert_eq!(without_detail.to_string(), "backend returned HTTP 502");
    }
}
