use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::SuspendParameters;

/// A public port for moving the machine into a low-power state.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SuspendPort: Send + Sync + 'static {
    /// Ask the operating system to suspend with the given parameters. The call
    /// may not return before the machine wakes up again.
    ///
    /// # Errors
    ///
    /// This function will return an error if the operating system could not
    /// be asked, or refused.
    async fn suspend(&self, parameters: SuspendParameters) -> Result<(), SuspendError>;
}

/// An error type of the suspend operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SuspendError {
    #[snafu(whatever, display("Could not suspend: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}
