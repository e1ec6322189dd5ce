use std::sync::Arc;
use std::time::Duration;

use snafu::prelude::*;

use crate::domain::daemon::app::service::{DrainService, SleepService};
use crate::domain::daemon::inbound::{DrainPort, SleepPort};
use crate::domain::daemon::outbound::SuspendPort;
use crate::domain::daemon::scheduler::SuspendScheduler;
use crate::domain::entity::{SuspendDelay, TryNewSuspendDelayError};

/// Entrance to the domain logic, providing ports for external adapters.
pub struct ApplicationCore {
    pub sleep: Arc<dyn SleepPort>,
    pub drain: Arc<dyn DrainPort>,
}

impl ApplicationCore {
    /// Initialize the application by injecting the adapter which talks to the
    /// operating system.
    ///
    /// # Errors
    ///
    /// This function will return an error if the delay is invalid.
    pub fn setup(
        suspend_port: Arc<dyn SuspendPort>,
        delay: Duration,
    ) -> Result<ApplicationCore, SetupApplicationCoreError> {
        let delay = SuspendDelay::try_new(delay).context(DelaySnafu { delay })?;
        let scheduler = Arc::new(SuspendScheduler::new(suspend_port, delay));

        let sleep_port = Arc::new(SleepService::new(Arc::clone(&scheduler)));
        let drain_port = Arc::new(DrainService::new(scheduler));

        let app = ApplicationCore {
            sleep: sleep_port,
            drain: drain_port,
        };

        Ok(app)
    }
}

/// An error for initializing the application.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SetupApplicationCoreError {
    #[snafu(display("Could not use {delay:?} as suspend delay"))]
    Delay {
        delay: Duration,
        source: TryNewSuspendDelayError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::daemon::inbound::SleepOutcome;
    use crate::domain::daemon::outbound::MockSuspendPort;
    use crate::domain::entity::{RequestMethod, SleepRequest};

    #[tokio::test(start_paused = true)]
    async fn application_core_setup() {
        let mut suspender = MockSuspendPort::new();
        suspender.expect_suspend().times(1).returning(|_| Ok(()));

        let core = ApplicationCore::setup(Arc::new(suspender), Duration::from_millis(500)).unwrap();
        let request = SleepRequest::new(None, RequestMethod::Post);
        assert_eq!(core.sleep.sleep(request).await, SleepOutcome::Acknowledged);
        assert!(core.drain.drain(Duration::from_secs(1)).await.is_ok());
    }

    #[test]
    fn application_core_setup_error_delay() {
        let res = ApplicationCore::setup(Arc::new(MockSuspendPort::new()), Duration::ZERO);
        assert!(matches!(
            res,
            Err(SetupApplicationCoreError::Delay {
                source: TryNewSuspendDelayError::Zero,
                ..
            }),
        ));
    }
}
