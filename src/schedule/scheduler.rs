//! Tokio-backed scheduler for [`PeriodicJob`] implementations.

use super::PeriodicJob;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Errors returned while scheduling a job.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The job period is zero.
    #[error("job {0} must have a non-zero period")]
    ZeroPeriod(&'static str),
}

/// Handle to a running periodic job.
///
/// Dropping the handle stops the job.
#[derive(Debug)]
pub struct JobHandle {
    name: &'static str,
    period: Duration,
    task: JoinHandle<()>,
}

impl JobHandle {
    /// Returns the job name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the job period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Reports whether the job task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the job.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for JobHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Owner of the periodic jobs of one application shell.
///
/// Jobs run once immediately and then once per period. A run that overruns
/// its period delays the next run instead of triggering a burst of catch-up
/// runs. Scheduling must happen inside a tokio runtime.
#[derive(Debug, Default)]
pub struct Scheduler {
    jobs: Vec<JobHandle>,
}

impl Scheduler {
    /// Creates a scheduler with no jobs.
    #[must_use]
    pub const fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    /// Starts `job` and keeps its handle until [`Scheduler::shutdown`].
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::ZeroPeriod`] when `period` is zero.
    pub fn schedule<J>(&mut self, job: Arc<J>, period: Duration) -> Result<(), ScheduleError>
    where
        J: PeriodicJob,
    {
        let handle = Self::spawn(job, period)?;
        self.jobs.push(handle);
        Ok(())
    }

    /// Starts `job` and hands its lifetime to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::ZeroPeriod`] when `period` is zero.
    pub fn spawn<J>(job: Arc<J>, period: Duration) -> Result<JobHandle, ScheduleError>
    where
        J: PeriodicJob,
    {
        let name = job.name();
        if period.is_zero() {
            return Err(ScheduleError::ZeroPeriod(name));
        }
        tracing::debug!(job = name, ?period, "scheduling job");
        let task = tokio::spawn(drive(job, period));
        Ok(JobHandle { name, period, task })
    }

    /// Returns the number of jobs owned by the scheduler.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Reports whether the scheduler owns no jobs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Stops every owned job.
    pub fn shutdown(&mut self) {
        for handle in self.jobs.drain(..) {
            tracing::debug!(job = handle.name(), "stopping job");
            handle.cancel();
        }
    }
}

async fn drive<J>(job: Arc<J>, period: Duration)
where
    J: PeriodicJob,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        tracing::trace!(job = job.name(), "running job");
        job.run().await;
    }
}
