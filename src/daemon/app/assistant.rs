use std::sync::Arc;
use std::time::Duration;

use snafu::prelude::*;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;

use crate::daemon::presence::Presence;
use crate::domain::daemon::inbound::{DrainError, DrainPort};
use crate::tracing_report;

use super::server::Server;

/// Everything the process runs, wired together. The HTTP server lives on its
/// own task while the caller blocks in the presence indicator's event loop.
pub struct Assistant {
    server: Server,
    presence: Presence,
    drain: Arc<dyn DrainPort>,
    shutdown: CancellationToken,
    grace: Duration,
}

impl Assistant {
    /// Creates a new [`Assistant`]. `shutdown` must be the token the server
    /// was bound with.
    pub fn new(
        server: Server,
        presence: Presence,
        drain: Arc<dyn DrainPort>,
        shutdown: CancellationToken,
        grace: Duration,
    ) -> Self {
        Self {
            server,
            presence,
            drain,
            shutdown,
            grace,
        }
    }

    /// Serve until quit is requested, then stop the server and wait for the
    /// suspensions already accepted. Each step is bounded by the grace period.
    ///
    /// # Errors
    ///
    /// This function will return an error if the server task panicked or if
    /// scheduled suspensions outlived the grace period. Scheduled suspensions
    /// are drained in both cases.
    pub async fn run(self) -> Result<(), AssistantError> {
        let mut server = tokio::spawn(self.server.serve());

        self.presence.run().await;
        self.shutdown.cancel();

        let served = match tokio::time::timeout(self.grace, &mut server).await {
            Ok(res) => res
                .context(ServerTaskSnafu)
                .inspect_err(|err| {
                    tracing_report!(err, "Server task failed");
                }),
            Err(_) => {
                tracing::warn!(grace = ?self.grace, "Server did not stop in time, aborting");
                server.abort();
                Ok(())
            }
        };

        let drained = self.drain.drain(self.grace).await;
        if let Err(err) = &drained {
            tracing_report!(err, "Could not drain scheduled suspensions");
        }

        tracing::info!("Exit");
        served?;
        drained.context(DrainSnafu)
    }
}

/// An error type for [`Assistant`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AssistantError {
    #[snafu(display("Could not join the server task"))]
    ServerTask { source: JoinError },
    #[snafu(display("Could not finish scheduled suspensions"))]
    Drain { source: DrainError },
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::daemon::presence::{PresenceConfig, PresenceHandle};
    use crate::domain::daemon::inbound::MockDrainPort;
    use crate::domain::daemon::outbound::MockSuspendPort;
    use crate::domain::daemon::ApplicationCore;

    #[tokio::test]
    async fn assistant_run_until_quit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (assistant, handle, address) = new_assistant(Arc::clone(&calls));
        let task = tokio::spawn(assistant.run());

        let url = format!("http://{address}/pol/sleep");
        let res = reqwest::Client::new().post(&url).send().await.unwrap();
        assert_eq!(res.text().await.unwrap(), "ok\n");

        assert!(handle.quit());
        assert!(task.await.unwrap().is_ok());

        // Accepted before quitting, so it still happens.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(reqwest::Client::new().post(&url).send().await.is_err());
    }

    #[tokio::test]
    async fn assistant_run_error_drain() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (assistant, handle, address) = new_assistant_with(
            Arc::clone(&calls),
            Duration::from_secs(30),
            Duration::from_millis(100),
        );
        let task = tokio::spawn(assistant.run());

        let url = format!("http://{address}/pol/sleep");
        reqwest::Client::new().post(&url).send().await.unwrap();

        handle.quit();
        assert!(matches!(
            task.await.unwrap(),
            Err(AssistantError::Drain {
                source: DrainError::Timeout { pending: 1, .. }
            }),
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn assistant_run_outlives_dropped_handle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (assistant, handle, address) = new_assistant(Arc::clone(&calls));
        let mut task = tokio::spawn(assistant.run());

        // Same as a signal hook which fails to install and gives up its handle.
        tokio::spawn(async move { drop(handle) }).await.unwrap();
        assert!(tokio::time::timeout(Duration::from_millis(200), &mut task)
            .await
            .is_err());

        let url = format!("http://{address}/pol/sleep");
        let res = reqwest::Client::new().post(&url).send().await.unwrap();
        assert_eq!(res.text().await.unwrap(), "ok\n");
        task.abort();
    }

    #[tokio::test]
    async fn assistant_run_drains_after_server_panic() {
        let mut drain = MockDrainPort::new();
        drain.expect_drain().times(1).returning(|_| Ok(()));

        let address = "127.0.0.1:0".parse().unwrap();
        let server = Server::from_future(address, async { panic!("listener crashed") });
        let (presence, handle) = Presence::new(PresenceConfig::new(address));
        let assistant = Assistant::new(
            server,
            presence,
            Arc::new(drain),
            CancellationToken::new(),
            Duration::from_secs(1),
        );

        handle.quit();
        assert!(matches!(
            assistant.run().await,
            Err(AssistantError::ServerTask { .. }),
        ));
    }

    fn new_assistant(calls: Arc<AtomicUsize>) -> (Assistant, PresenceHandle, SocketAddr) {
        new_assistant_with(calls, Duration::from_millis(500), Duration::from_secs(3))
    }

    fn new_assistant_with(
        calls: Arc<AtomicUsize>,
        delay: Duration,
        grace: Duration,
    ) -> (Assistant, PresenceHandle, SocketAddr) {
        let mut suspender = MockSuspendPort::new();
        suspender.expect_suspend().returning(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        let core = Arc::new(ApplicationCore::setup(Arc::new(suspender), delay).unwrap());

        let shutdown = CancellationToken::new();
        let address = "127.0.0.1:0".parse().unwrap();
        let server = Server::bind(address, Arc::clone(&core), shutdown.clone()).unwrap();
        let local_addr = server.local_addr();

        let (presence, handle) = Presence::new(PresenceConfig::new(local_addr));
        let drain = Arc::clone(&core.drain);
        let assistant = Assistant::new(server, presence, drain, shutdown, grace);
        (assistant, handle, local_addr)
    }
}
