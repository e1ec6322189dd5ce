use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use snafu::prelude::*;
use tokio_util::sync::CancellationToken;
use warp::http::Method;
use warp::{Filter, Rejection, Reply};

use crate::domain::daemon::inbound::SleepOutcome;
use crate::domain::daemon::ApplicationCore;
use crate::domain::entity::SleepRequest;

/// Body sent back once a suspension has been scheduled.
pub const ACKNOWLEDGMENT: &str = "ok\n";

type ServeFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// An HTTP server which turns requests on `/pol/sleep` into delayed
/// suspensions.
pub struct Server {
    local_addr: SocketAddr,
    serve: ServeFuture,
}

impl Server {
    /// Bind to `address` and prepare to serve until `shutdown` is cancelled.
    /// Nothing is accepted before [`Server::serve`] is polled.
    ///
    /// # Errors
    ///
    /// This function will return an error if the address can't be bound.
    pub fn bind(
        address: SocketAddr,
        core: Arc<ApplicationCore>,
        shutdown: CancellationToken,
    ) -> Result<Self, ServerError> {
        let signal = async move { shutdown.cancelled().await };
        let (local_addr, serve) = warp::serve(routes(core))
            .try_bind_with_graceful_shutdown(address, signal)
            .context(BindSnafu { address })?;

        tracing::info!(%local_addr, "Listening for sleep requests");
        Ok(Self {
            local_addr,
            serve: Box::pin(serve),
        })
    }

    /// The address actually bound, which differs from the requested one when
    /// port 0 was asked for.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until shutdown is signaled and in-flight requests are
    /// finished.
    #[tracing::instrument(skip(self), fields(addr = %self.local_addr))]
    pub async fn serve(self) {
        self.serve.await;
        tracing::info!("Server stopped");
    }
}

#[cfg(test)]
impl Server {
    pub(crate) fn from_future<F>(local_addr: SocketAddr, serve: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            local_addr,
            serve: Box::pin(serve),
        }
    }
}

/// All routes served by [`Server`].
pub fn routes(
    core: Arc<ApplicationCore>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone + Send + Sync + 'static {
    warp::path!("pol" / "sleep")
        .and(warp::method())
        .and(warp::addr::remote())
        .and(warp::any().map(move || Arc::clone(&core)))
        .and_then(handle_sleep)
}

async fn handle_sleep(
    method: Method,
    remote: Option<SocketAddr>,
    core: Arc<ApplicationCore>,
) -> Result<&'static str, Infallible> {
    tracing::info!(?remote, %method, "Got sleep request");

    let request = SleepRequest::new(remote, method.as_str().into());
    let body = match core.sleep.sleep(request).await {
        SleepOutcome::Acknowledged => ACKNOWLEDGMENT,
        SleepOutcome::Rejected => "",
    };
    Ok(body)
}

/// An error type for server.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ServerError {
    #[snafu(display("Could not bind to {address}"))]
    Bind {
        address: SocketAddr,
        source: warp::Error,
    },
}
