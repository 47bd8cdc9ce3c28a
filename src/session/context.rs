//! Shared session handle owned by the application shell.

use crate::session::domain::{
    BearerToken, FanIdentity, Session, SessionError, StationId, StationRef,
};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct SessionState {
    session: Option<Session>,
    fan: Option<FanIdentity>,
}

/// Explicit replacement for ambient token and selection storage.
///
/// Clones share the same underlying state, so one context is created by the
/// application shell and handed to every collaborator that needs it. The
/// administrator session (token, stations, selected station) and the cached
/// fan identity have separate lifecycles: logging out clears the former and
/// keeps the latter.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: Arc<RwLock<SessionState>>,
}

impl SessionContext {
    /// Creates an empty, logged-out context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs a freshly authenticated session, replacing any previous one.
    pub fn login(&self, session: Session) {
        tracing::info!(
            stations = session.stations().len(),
            selected_station = ?session.selected_station().map(|station| station.id),
            "session started"
        );
        self.write().session = Some(session);
    }

    /// Clears the administrator session.
    ///
    /// Returns `true` when a session was active.
    pub fn logout(&self) -> bool {
        let previous = self.write().session.take();
        if previous.is_some() {
            tracing::info!("session cleared");
        }
        previous.is_some()
    }

    /// Reports whether an administrator session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().session.is_some()
    }

    /// Returns the bearer token of the active session.
    #[must_use]
    pub fn bearer_token(&self) -> Option<BearerToken> {
        self.read()
            .session
            .as_ref()
            .map(|session| session.token().clone())
    }

    /// Returns a copy of the active session.
    #[must_use]
    pub fn snapshot(&self) -> Option<Session> {
        self.read().session.clone()
    }

    /// Selects one of the stations granted to the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when logged out, or
    /// [`SessionError::UnknownStation`] when the station was not granted.
    pub fn select_station(&self, id: StationId) -> Result<StationRef, SessionError> {
        let mut state = self.write();
        let session = state
            .session
            .as_mut()
            .ok_or(SessionError::NotAuthenticated)?;
        let station = session
            .stations()
            .iter()
            .find(|station| station.id == id)
            .cloned()
            .ok_or(SessionError::UnknownStation(id))?;
        session.select_station(station.clone());
        Ok(station)
    }

    /// Returns the selected station, if any.
    #[must_use]
    pub fn selected_station(&self) -> Option<StationRef> {
        self.read()
            .session
            .as_ref()
            .and_then(|session| session.selected_station().cloned())
    }

    /// Caches the identity of a fan who joined with an invite code.
    pub fn remember_fan(&self, fan: FanIdentity) {
        self.write().fan = Some(fan);
    }

    /// Returns the cached fan identity.
    #[must_use]
    pub fn fan(&self) -> Option<FanIdentity> {
        self.read().fan.clone()
    }

    /// Drops the cached fan identity.
    pub fn forget_fan(&self) {
        self.write().fan = None;
    }

    /// Logs out when the session token has expired.
    ///
    /// Returns `true` when the session was cleared by this call.
    pub fn expire_if_due(&self, clock: &impl Clock) -> bool {
        let now = clock.utc();
        let mut state = self.write();
        let expired = state
            .session
            .as_ref()
            .is_some_and(|session| session.is_expired_at(now));
        if expired {
            state.session = None;
            tracing::warn!(%now, "session token expired, session cleared");
        }
        expired
    }
}
