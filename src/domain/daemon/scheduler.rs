use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::Duration;
use tokio_util::task::TaskTracker;

use crate::domain::daemon::inbound::{DrainError, TimeoutSnafu};
use crate::domain::daemon::outbound::{SuspendError, SuspendPort};
use crate::domain::entity::{SuspendDelay, SuspendParameters};
use crate::tracing_report;

/// Runs delayed suspensions on background tasks. Every scheduled suspension is
/// independent of the others and is tracked until it finishes.
pub struct SuspendScheduler {
    suspender: Arc<dyn SuspendPort>,
    delay: SuspendDelay,
    tracker: TaskTracker,
}

impl SuspendScheduler {
    /// Creates a new [`SuspendScheduler`].
    pub fn new(suspender: Arc<dyn SuspendPort>, delay: SuspendDelay) -> Self {
        Self {
            suspender,
            delay,
            tracker: TaskTracker::new(),
        }
    }

    /// Spawn a task which waits for the delay and then puts the machine to
    /// sleep. The returned handle may be dropped; the task keeps running and
    /// reports its own failure.
    pub fn schedule(&self) -> JoinHandle<Result<(), SuspendError>> {
        let suspender = Arc::clone(&self.suspender);
        let delay = self.delay.inner();

        self.tracker.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(parameters = %SuspendParameters::SLEEP, "Suspending");

            let res = suspender.suspend(SuspendParameters::SLEEP).await;
            match &res {
                Ok(()) => tracing::info!("Suspend call returned"),
                Err(err) => {
                    tracing_report!(err, "Could not put the machine to sleep");
                }
            }
            res
        })
    }

    /// Number of suspensions scheduled but not finished yet.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Close the tracker and wait at most `grace` for scheduled suspensions.
    ///
    /// # Errors
    ///
    /// This function will return an error if some suspensions are still
    /// pending when the grace period elapses.
    pub async fn drain(&self, grace: Duration) -> Result<(), DrainError> {
        self.tracker.close();
        match tokio::time::timeout(grace, self.tracker.wait()).await {
            Ok(()) => Ok(()),
            Err(_) => TimeoutSnafu {
                pending: self.pending(),
                grace,
            }
            .fail(),
        }
    }
}
