use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tokio::time::Duration;

use crate::domain::client::outbound::ReachabilityPort;
use crate::tracing_report;

/// Default time to wait for an echo reply.
pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_secs(1);

/// A [`ReachabilityPort`] implementation which sends a single echo request
/// with the system's `ping`.
#[derive(Debug, Clone)]
pub struct PingService {
    program: PathBuf,
    timeout: Duration,
}

impl PingService {
    /// Creates a new [`PingService`] running `program`.
    pub fn new(program: PathBuf, timeout: Duration) -> Self {
        Self { program, timeout }
    }

    fn arguments(&self, host: &str) -> Vec<String> {
        if cfg!(windows) {
            let millis = self.timeout.as_millis().max(1);
            vec![
                "-n".to_owned(),
                "1".to_owned(),
                "-w".to_owned(),
                millis.to_string(),
                host.to_owned(),
            ]
        } else {
            let secs = self.timeout.as_secs().max(1);
            vec![
                "-c".to_owned(),
                "1".to_owned(),
                "-W".to_owned(),
                secs.to_string(),
                host.to_owned(),
            ]
        }
    }
}

impl Default for PingService {
    fn default() -> Self {
        Self::new(PathBuf::from("ping"), DEFAULT_PING_TIMEOUT)
    }
}

#[async_trait::async_trait]
impl ReachabilityPort for PingService {
    async fn reachable(&self, host: String) -> bool {
        let res = Command::new(&self.program)
            .args(self.arguments(&host))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match res {
            Ok(status) => {
                tracing::debug!(%host, %status, "Ping finished");
                status.success()
            }
            Err(err) => {
                tracing_report!(err, program = %self.program.display(), "Could not run ping");
                false
            }
        }
    }
}
