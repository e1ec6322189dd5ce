use std::path::PathBuf;
use std::process::Stdio;

use snafu::prelude::*;
use tokio::process::Command;

use crate::daemon::config::Configuration;
use crate::domain::daemon::outbound::{SuspendError, SuspendPort};
use crate::domain::entity::SuspendParameters;

/// Entry point of the power management library, in the form `rundll32`
/// expects it.
pub const SET_SUSPEND_STATE: &str = "powrprof.dll,SetSuspendState";

/// A [`SuspendPort`] implementation which asks `rundll32` to call into the
/// power management library. A fresh process is spawned for every call.
#[derive(Debug, Clone)]
pub struct PowrProfService {
    program: Option<PathBuf>,
}

impl PowrProfService {
    /// Creates a new [`PowrProfService`] running the given utility.
    pub fn new(program: Option<PathBuf>) -> Self {
        Self { program }
    }

    /// Creates a new [`PowrProfService`] using the utility shipped with the
    /// configured installation.
    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.rundll32())
    }
}

#[async_trait::async_trait]
impl SuspendPort for PowrProfService {
    async fn suspend(&self, parameters: SuspendParameters) -> Result<(), SuspendError> {
        let Some(program) = &self.program else {
            whatever!("Could not locate rundll32 without an installation directory");
        };

        tracing::debug!(program = %program.display(), %parameters, "Spawning suspend utility");
        let status = whatever!(
            Command::new(program)
                .arg(SET_SUSPEND_STATE)
                .arg(parameters.to_string())
                .stdin(Stdio::null())
                .status()
                .await,
            "Could not run {}",
            program.display()
        );

        ensure_whatever!(
            status.success(),
            "{} exited with {status}",
            program.display()
        );

        Ok(())
    }
}
