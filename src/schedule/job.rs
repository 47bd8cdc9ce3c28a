//! Periodic job contract.

use async_trait::async_trait;

/// Unit of work run on a fixed period.
///
/// Implementations report their own failures (through logging or stored
/// state); the scheduler keeps running a job whatever the outcome of a
/// single run.
#[async_trait]
pub trait PeriodicJob: Send + Sync + 'static {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Performs one run of the job.
    async fn run(&self);
}
