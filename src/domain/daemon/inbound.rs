use std::time::Duration;

use snafu::prelude::*;

use crate::domain::entity::SleepRequest;

/// A public port for asking the machine to go to sleep.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SleepPort: Send + Sync + 'static {
    /// Validate the request and, if accepted, schedule a delayed suspension.
    /// Returns without waiting for the suspension.
    async fn sleep(&self, request: SleepRequest) -> SleepOutcome;
}

/// What became of a [`SleepRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepOutcome {
    /// Dropped without scheduling anything.
    Rejected,
    /// A suspension has been scheduled.
    Acknowledged,
}

/// A public port for waiting on scheduled suspensions during shutdown.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DrainPort: Send + Sync + 'static {
    /// Stop tracking new work and wait for scheduled suspensions to finish.
    ///
    /// # Errors
    ///
    /// This function will return an error if the grace period elapses first.
    async fn drain(&self, grace: Duration) -> Result<(), DrainError>;
}

/// An error type of draining scheduled suspensions.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum DrainError {
    #[snafu(display("Could not finish {pending} scheduled suspension(s) within {grace:?}"))]
    Timeout { pending: usize, grace: Duration },
}
