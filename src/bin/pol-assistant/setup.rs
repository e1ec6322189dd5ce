use std::sync::Arc;

use pol_assistant::daemon::config::{self, Configuration};
use pol_assistant::daemon::outbound::PowrProfService;
use pol_assistant::daemon::presence::{Presence, PresenceConfig, PresenceHandle};
use pol_assistant::daemon::{Assistant, Server};
use pol_assistant::domain::daemon::ApplicationCore;
use pol_assistant::tracing_report;
use snafu::{prelude::*, Whatever};
use tokio_util::sync::CancellationToken;

pub fn bootstrap() -> Result<Assistant, Whatever> {
    let configuration = config::load();
    let core = core(&configuration)?;

    let shutdown = CancellationToken::new();
    let server = server(&configuration, Arc::clone(&core), shutdown.clone())?;

    tracing::info!(
        address = %server.local_addr(),
        "PoL assistant is starting on {}",
        server.local_addr()
    );

    let (presence, handle) = Presence::new(PresenceConfig::new(server.local_addr()));
    interrupt(handle);

    let drain = Arc::clone(&core.drain);
    Ok(Assistant::new(
        server,
        presence,
        drain,
        shutdown,
        configuration.grace,
    ))
}

fn core(configuration: &Configuration) -> Result<Arc<ApplicationCore>, Whatever> {
    let suspend_port = Arc::new(PowrProfService::from_config(configuration));
    let core = ApplicationCore::setup(suspend_port, configuration.delay)
        .whatever_context("Could not setup application core")?;
    Ok(Arc::new(core))
}

fn server(
    configuration: &Configuration,
    core: Arc<ApplicationCore>,
    shutdown: CancellationToken,
) -> Result<Server, Whatever> {
    Server::bind(configuration.address, core, shutdown)
        .inspect_err(|err| {
            tracing_report!(err);
        })
        .whatever_context(format!("Could not listen on {}", configuration.address))
}

/// Treat Ctrl-C like the indicator's "Quit" item.
fn interrupt(handle: PresenceHandle) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupted");
                handle.quit();
            }
            Err(err) => {
                // The indicator's own "Quit" still ends the event loop.
                tracing_report!(err, "Could not listen for Ctrl-C");
            }
        }
    });
}
