//! Periodic token-expiry check.

use crate::schedule::PeriodicJob;
use crate::session::SessionContext;
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Job that logs the session out once its token has expired.
#[derive(Debug, Clone)]
pub struct TokenExpiryCheck<C>
where
    C: Clock + Send + Sync,
{
    session: SessionContext,
    clock: Arc<C>,
}

impl<C> TokenExpiryCheck<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a check over `session` using `clock` for the current time.
    #[must_use]
    pub const fn new(session: SessionContext, clock: Arc<C>) -> Self {
        Self { session, clock }
    }
}

#[async_trait]
impl<C> PeriodicJob for TokenExpiryCheck<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "token-expiry-check"
    }

    async fn run(&self) {
        self.session.expire_if_due(&*self.clock);
    }
}
