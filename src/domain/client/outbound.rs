use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::WakeTarget;

/// A public port for waking a host over the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WakePort: Send + Sync + 'static {
    /// Send a magic packet for `target`. Nothing tells whether the host
    /// actually woke up.
    ///
    /// # Errors
    ///
    /// This function will return an error if the packet could not be sent.
    async fn wake(&self, target: WakeTarget) -> Result<(), WakeHostError>;
}

/// An error type of sending a magic packet.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WakeHostError {
    #[snafu(whatever, display("Could not wake host: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

/// A public port for asking the assistant on a host to put it to sleep.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SleepHostPort: Send + Sync + 'static {
    /// Do the sleep request.
    ///
    /// # Errors
    ///
    /// This function will return an error if the assistant could not be
    /// reached or did not acknowledge.
    async fn sleep(&self, host: String) -> Result<(), RequestAssistantError>;
}

/// An error type of sending requests to the assistant.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum RequestAssistantError {
    #[snafu(display("Endpoint {endpoint} is unavailable"))]
    Unavailable { endpoint: String },
    #[snafu(display("Could not receive a valid response"))]
    BadResponse,
    #[snafu(whatever, display("Request failed: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

/// A public port for telling whether a host is up.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ReachabilityPort: Send + Sync + 'static {
    /// Whether `host` answers. Any failure to find out counts as no.
    async fn reachable(&self, host: String) -> bool;
}
