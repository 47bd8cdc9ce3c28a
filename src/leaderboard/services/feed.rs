//! Refreshable leaderboard view.

use crate::leaderboard::{
    domain::{Leaderboard, LeaderboardKind},
    ports::LeaderboardQuery,
};
use crate::schedule::PeriodicJob;
use crate::session::{SessionContext, domain::InviteCode};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

/// Reason shown when neither the feed nor the session knows an invite code.
pub const NO_INVITE_CODE: &str = "no invite code available";

/// What a leaderboard panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeaderboardView {
    /// Nothing fetched yet for the current kind.
    #[default]
    Idle,
    /// Latest successful fetch.
    Ready(Leaderboard),
    /// Latest fetch failed; earlier rows are discarded.
    Failed(String),
}

impl LeaderboardView {
    /// Returns the snapshot, when ready.
    #[must_use]
    pub const fn leaderboard(&self) -> Option<&Leaderboard> {
        match self {
            Self::Ready(board) => Some(board),
            Self::Idle | Self::Failed(_) => None,
        }
    }
}

#[derive(Debug, Default)]
struct FeedState {
    kind: LeaderboardKind,
    view: LeaderboardView,
}

/// Latest leaderboard of one kind for one invite code.
///
/// The invite code is either fixed at construction or taken from the fan
/// identity cached in the session at each refresh.
#[derive(Debug)]
pub struct LeaderboardFeed<Q, C>
where
    Q: LeaderboardQuery,
    C: Clock + Send + Sync,
{
    query: Arc<Q>,
    clock: Arc<C>,
    session: SessionContext,
    invite_code: Option<InviteCode>,
    state: RwLock<FeedState>,
}

impl<Q, C> LeaderboardFeed<Q, C>
where
    Q: LeaderboardQuery,
    C: Clock + Send + Sync,
{
    /// Creates an idle overall feed that reads the invite code from `session`.
    #[must_use]
    pub fn new(query: Arc<Q>, clock: Arc<C>, session: SessionContext) -> Self {
        Self {
            query,
            clock,
            session,
            invite_code: None,
            state: RwLock::new(FeedState::default()),
        }
    }

    /// Pins the feed to `invite_code`.
    #[must_use]
    pub fn with_invite_code(mut self, invite_code: InviteCode) -> Self {
        self.invite_code = Some(invite_code);
        self
    }

    /// Starts the feed on `kind` instead of the overall ranking.
    #[must_use]
    pub fn with_kind(self, kind: LeaderboardKind) -> Self {
        self.write().kind = kind;
        self
    }

    fn write(&self) -> RwLockWriteGuard<'_, FeedState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the selected ranking kind.
    #[must_use]
    pub fn kind(&self) -> LeaderboardKind {
        self.state.read().unwrap_or_else(PoisonError::into_inner).kind
    }

    /// Returns the current view.
    #[must_use]
    pub fn view(&self) -> LeaderboardView {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .view
            .clone()
    }

    /// Switches to another ranking; the view is idle until the next refresh.
    pub fn set_kind(&self, kind: LeaderboardKind) {
        let mut state = self.write();
        if state.kind != kind {
            state.kind = kind;
            state.view = LeaderboardView::Idle;
        }
    }

    /// Fetches the selected ranking and stores the outcome.
    pub async fn refresh(&self) -> LeaderboardView {
        let kind = self.kind();
        let view = match self.resolve_invite_code() {
            Some(invite_code) => self.fetch(invite_code, kind).await,
            None => LeaderboardView::Failed(NO_INVITE_CODE.to_owned()),
        };

        let mut state = self.write();
        if state.kind == kind {
            state.view = view.clone();
        } else {
            tracing::debug!(%kind, "discarding leaderboard fetched for a previous kind");
        }
        view
    }

    fn resolve_invite_code(&self) -> Option<InviteCode> {
        self.invite_code
            .clone()
            .or_else(|| self.session.fan().map(|fan| fan.invite_code))
    }

    async fn fetch(&self, invite_code: InviteCode, kind: LeaderboardKind) -> LeaderboardView {
        match self.query.leaderboard(&invite_code, kind).await {
            Ok(entries) => {
                tracing::debug!(%invite_code, %kind, rows = entries.len(), "leaderboard refreshed");
                LeaderboardView::Ready(Leaderboard::new(
                    kind,
                    invite_code,
                    entries,
                    self.clock.utc(),
                ))
            }
            Err(err) => {
                tracing::warn!(%invite_code, %kind, error = %err, "leaderboard refresh failed");
                LeaderboardView::Failed(err.to_string())
            }
        }
    }
}

#[async_trait]
impl<Q, C> PeriodicJob for LeaderboardFeed<Q, C>
where
    Q: LeaderboardQuery + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "leaderboard-refresh"
    }

    async fn run(&self) {
        self.refresh().await;
    }
}
