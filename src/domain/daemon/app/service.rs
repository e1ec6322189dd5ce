use std::sync::Arc;
use std::time::Duration;

use crate::domain::daemon::inbound::{DrainError, DrainPort, SleepOutcome, SleepPort};
use crate::domain::daemon::scheduler::SuspendScheduler;
use crate::domain::entity::SleepRequest;

pub struct SleepService {
    scheduler: Arc<SuspendScheduler>,
}

impl SleepService {
    pub fn new(scheduler: Arc<SuspendScheduler>) -> Self {
        Self { scheduler }
    }
}

#[async_trait::async_trait]
impl SleepPort for SleepService {
    async fn sleep(&self, request: SleepRequest) -> SleepOutcome {
        if !request.is_accepted() {
            tracing::debug!(
                remote = ?request.remote(),
                method = %request.method(),
                "Ignored request"
            );
            return SleepOutcome::Rejected;
        }

        // The handle stays with the tracker; failures are reported by the task.
        let _ = self.scheduler.schedule();
        tracing::info!(
            remote = ?request.remote(),
            pending = self.scheduler.pending(),
            "Scheduled suspension"
        );
        SleepOutcome::Acknowledged
    }
}

pub struct DrainService {
    scheduler: Arc<SuspendScheduler>,
}

impl DrainService {
    pub fn new(scheduler: Arc<SuspendScheduler>) -> Self {
        Self { scheduler }
    }
}

#[async_trait::async_trait]
impl DrainPort for DrainService {
    async fn drain(&self, grace: Duration) -> Result<(), DrainError> {
        tracing::info!(pending = self.scheduler.pending(), "Draining scheduled suspensions");
        self.scheduler.drain(grace).await
    }
}
