use snafu::prelude::*;

use crate::daemon::app::ACKNOWLEDGMENT;
use crate::domain::client::outbound::{BadResponseSnafu, UnavailableSnafu};
use crate::domain::client::outbound::{RequestAssistantError, SleepHostPort};

/// A [`SleepHostPort`] implementation which posts to the assistant's
/// `/pol/sleep` endpoint.
#[derive(Debug, Clone)]
pub struct HttpSleepService {
    client: reqwest::Client,
    port: u16,
}

impl HttpSleepService {
    /// Creates a new [`HttpSleepService`] talking to assistants on `port`.
    pub fn new(port: u16) -> Self {
        Self {
            client: reqwest::Client::new(),
            port,
        }
    }

    fn endpoint(&self, host: &str) -> String {
        format!("http://{host}:{}/pol/sleep", self.port)
    }
}

#[async_trait::async_trait]
impl SleepHostPort for HttpSleepService {
    async fn sleep(&self, host: String) -> Result<(), RequestAssistantError> {
        let endpoint = self.endpoint(&host);
        tracing::debug!(%endpoint, "Sending sleep request");

        let response = match self.client.post(&endpoint).send().await {
            Ok(response) => response,
            Err(err) if err.is_connect() => return UnavailableSnafu { endpoint }.fail(),
            Err(err) => return Err(err).whatever_context("Could not send request"),
        };

        ensure!(response.status().is_success(), BadResponseSnafu);
        let body = response
            .text()
            .await
            .whatever_context("Could not receive response")?;

        ensure!(body == ACKNOWLEDGMENT, BadResponseSnafu);
        Ok(())
    }
}
