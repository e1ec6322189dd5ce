use snafu::prelude::*;

use crate::client::app::command::Command;
use crate::domain::client::{PowerSwitch, SwitchError};

/// Main business logic implementation in client side.
pub struct Client {
    switch: PowerSwitch,
}

impl Client {
    /// Creates a new [`Client`].
    pub fn new(switch: PowerSwitch) -> Self {
        Self { switch }
    }

    /// Run specific function according to `command`.
    ///
    /// # Errors
    ///
    /// This function will return an error if any error occurs.
    pub async fn run(&mut self, command: Command) -> Result<(), ClientError> {
        match command {
            Command::On => self.switch.turn_on().await.context(SwitchSnafu),
            Command::Off => self.switch.turn_off().await.context(SwitchSnafu),
            Command::Status => self.status().await,
        }
    }

    /// Print the host's state.
    ///
    /// # Errors
    ///
    /// This function will return an error if there is no host to ask.
    async fn status(&mut self) -> Result<(), ClientError> {
        ensure!(self.switch.is_polled(), UnpolledSnafu);

        self.switch.update().await;
        let state = if self.switch.is_on() { "on" } else { "off" };
        println!("{state}");
        Ok(())
    }
}

/// An error for client's operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ClientError {
    #[snafu(display("Could not switch the host"))]
    Switch { source: SwitchError },
    #[snafu(display("Could not tell the state without a host"))]
    Unpolled,
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::domain::client::outbound::{
        MockReachabilityPort, MockSleepHostPort, MockWakePort,
    };
    use crate::domain::client::ApplicationCore;

    fn new_client(reachability: MockReachabilityPort, host: Option<&str>) -> Client {
        let core = Arc::new(ApplicationCore::setup(
            Arc::new(MockWakePort::new()),
            Arc::new(MockSleepHostPort::new()),
            Arc::new(reachability),
        ));
        Client::new(PowerSwitch::new(core, None, host.map(str::to_owned)))
    }

    #[tokio::test]
    async fn client_status() {
        let mut reachability = MockReachabilityPort::new();
        reachability
            .expect_reachable()
            .withf(|host| host == "10.0.0.2")
            .times(1)
            .returning(|_| true);
        let mut client = new_client(reachability, Some("10.0.0.2"));

        assert!(client.run(Command::Status).await.is_ok());
        assert!(client.switch.is_on());
    }

    #[tokio::test]
    async fn client_status_error_unpolled() {
        let mut reachability = MockReachabilityPort::new();
        reachability.expect_reachable().never();
        let mut client = new_client(reachability, None);

        assert!(matches!(
            client.run(Command::Status).await,
            Err(ClientError::Unpolled)
        ));
    }

    #[tokio::test]
    async fn client_error_switch() {
        let mut client = new_client(MockReachabilityPort::new(), None);

        assert!(matches!(
            client.run(Command::On).await,
            Err(ClientError::Switch {
                source: SwitchError::MissingMac
            })
        ));
        assert!(matches!(
            client.run(Command::Off).await,
            Err(ClientError::Switch {
                source: SwitchError::MissingHost
            })
        ));
    }
}
