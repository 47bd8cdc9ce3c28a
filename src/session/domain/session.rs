//! Session aggregate and its value types.

use super::InviteCode;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque bearer token issued by the backend at login.
///
/// The token value never appears in debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token for use in an `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Backend identifier of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(Uuid);

impl StationId {
    /// Creates a station identifier from its backend UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Station granted to the logged-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRef {
    /// Station identifier.
    pub id: StationId,
    /// Display name.
    pub name: String,
}

impl StationRef {
    /// Creates a station reference.
    #[must_use]
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fan identity cached after a fan logs in with an invite code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanIdentity {
    /// Nickname shown on leaderboards.
    pub nickname: String,
    /// Invite code the fan joined with.
    pub invite_code: InviteCode,
}

impl FanIdentity {
    /// Creates a fan identity.
    #[must_use]
    pub fn new(nickname: impl Into<String>, invite_code: InviteCode) -> Self {
        Self {
            nickname: nickname.into(),
            invite_code,
        }
    }
}

/// Authenticated session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: BearerToken,
    account: Option<String>,
    stations: Vec<StationRef>,
    selected_station: Option<StationRef>,
    logged_in_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session from a login response.
    ///
    /// The first granted station becomes the selected station.
    #[must_use]
    pub fn new(token: BearerToken, stations: Vec<StationRef>, clock: &impl Clock) -> Self {
        let selected_station = stations.first().cloned();
        Self {
            token,
            account: None,
            stations,
            selected_station,
            logged_in_at: clock.utc(),
            expires_at: None,
        }
    }

    /// Sets the account identifier (usually the login email).
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets the token expiry time.
    #[must_use]
    pub const fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn token(&self) -> &BearerToken {
        &self.token
    }

    /// Returns the account identifier, if known.
    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Returns the stations granted to this session.
    #[must_use]
    pub fn stations(&self) -> &[StationRef] {
        &self.stations
    }

    /// Returns the selected station, if any.
    #[must_use]
    pub const fn selected_station(&self) -> Option<&StationRef> {
        self.selected_station.as_ref()
    }

    /// Returns the login timestamp.
    #[must_use]
    pub const fn logged_in_at(&self) -> DateTime<Utc> {
        self.logged_in_at
    }

    /// Returns the token expiry time, if the backend supplied one.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Reports whether the token has expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    pub(crate) fn select_station(&mut self, station: StationRef) {
        self.selected_station = Some(station);
    }
}
