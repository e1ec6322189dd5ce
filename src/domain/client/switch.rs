use std::sync::Arc;

use snafu::prelude::*;
use tokio::time::{Duration, Instant};

use crate::domain::client::outbound::{RequestAssistantError, WakeHostError};
use crate::domain::client::ApplicationCore;
use crate::domain::entity::WakeTarget;

/// How long a state set by [`PowerSwitch::turn_on`] or
/// [`PowerSwitch::turn_off`] is trusted before reachability is asked again.
/// Hosts take a while to finish waking up or going down.
pub const STATE_HOLD: Duration = Duration::from_secs(10);

/// The controller's view of a remote host's power state.
///
/// Without a host name the state is assumed: it is whatever was last asked
/// for, and [`PowerSwitch::update`] leaves it alone.
pub struct PowerSwitch {
    core: Arc<ApplicationCore>,
    target: Option<WakeTarget>,
    host: Option<String>,
    on: bool,
    changed_at: Option<Instant>,
}

impl PowerSwitch {
    /// Creates a new [`PowerSwitch`], initially off.
    pub fn new(
        core: Arc<ApplicationCore>,
        target: Option<WakeTarget>,
        host: Option<String>,
    ) -> Self {
        Self {
            core,
            target,
            host,
            on: false,
            changed_at: None,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Returns `true` if the state follows the host instead of being assumed.
    pub fn is_polled(&self) -> bool {
        self.host.is_some()
    }

    /// Wake the host up.
    ///
    /// # Errors
    ///
    /// This function will return an error if no hardware address is known or
    /// the magic packet could not be sent. The state is left unchanged then.
    pub async fn turn_on(&mut self) -> Result<(), SwitchError> {
        let target = self.target.context(MissingMacSnafu)?;
        self.core.wake.wake(target).await.context(WakeSnafu)?;

        tracing::info!(mac = %target.mac, broadcast = %target.broadcast, "Sent magic packet");
        self.set(true);
        Ok(())
    }

    /// Ask the assistant on the host to put it to sleep.
    ///
    /// # Errors
    ///
    /// This function will return an error if no host is known or the
    /// assistant did not acknowledge. The state is left unchanged then.
    pub async fn turn_off(&mut self) -> Result<(), SwitchError> {
        let host = self.host.clone().context(MissingHostSnafu)?;
        self.core
            .sleep
            .sleep(host.clone())
            .await
            .context(SleepSnafu { host: host.clone() })?;

        tracing::info!(%host, "Sleep request acknowledged");
        self.set(false);
        Ok(())
    }

    /// Refresh the state from the host's reachability, unless the state was
    /// changed less than [`STATE_HOLD`] ago or is assumed.
    pub async fn update(&mut self) {
        let Some(host) = self.host.clone() else {
            return;
        };

        if let Some(changed_at) = self.changed_at {
            if changed_at.elapsed() < STATE_HOLD {
                tracing::debug!(%host, on = self.on, "Holding recently changed state");
                return;
            }
        }

        self.on = self.core.reachability.reachable(host.clone()).await;
        tracing::debug!(%host, on = self.on, "Updated state");
    }

    fn set(&mut self, on: bool) {
        self.on = on;
        self.changed_at = Some(Instant::now());
    }
}

/// An error type of [`PowerSwitch`] operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SwitchError {
    #[snafu(display("No hardware address to wake"))]
    MissingMac,
    #[snafu(display("No host to send the sleep request to"))]
    MissingHost,
    #[snafu(display("Could not send magic packet"))]
    Wake { source: WakeHostError },
    #[snafu(display("Could not put {host} to sleep"))]
    Sleep {
        host: String,
        source: RequestAssistantError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use snafu::whatever;

    use crate::domain::client::outbound::{
        MockReachabilityPort, MockSleepHostPort, MockWakePort,
    };
    use crate::domain::entity::{MacAddress, DEFAULT_BROADCAST};

    const HOST: &str = "desktop.lan";

    fn wake_target() -> WakeTarget {
        WakeTarget::new(MacAddress::new([2, 0, 0, 0, 0, 1]), DEFAULT_BROADCAST)
    }

    fn new_core(
        wake: MockWakePort,
        sleep: MockSleepHostPort,
        reachability: MockReachabilityPort,
    ) -> Arc<ApplicationCore> {
        Arc::new(ApplicationCore::setup(
            Arc::new(wake),
            Arc::new(sleep),
            Arc::new(reachability),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn power_switch_turn_on_holds_state() {
        let mut wake = MockWakePort::new();
        wake.expect_wake()
            .withf(|target| *target == wake_target())
            .times(1)
            .returning(|_| Ok(()));
        let mut reachability = MockReachabilityPort::new();
        reachability
            .expect_reachable()
            .withf(|host| host == HOST)
            .times(1)
            .returning(|_| false);
        let core = new_core(wake, MockSleepHostPort::new(), reachability);

        let mut switch = PowerSwitch::new(core, Some(wake_target()), Some(HOST.to_owned()));
        assert!(!switch.is_on());
        switch.turn_on().await.unwrap();
        assert!(switch.is_on());

        // Still booting, so a failed ping must not flip the switch back.
        tokio::time::sleep(Duration::from_secs(9)).await;
        switch.update().await;
        assert!(switch.is_on());

        tokio::time::sleep(Duration::from_secs(1)).await;
        switch.update().await;
        assert!(!switch.is_on());
    }

    #[tokio::test(start_paused = true)]
    async fn power_switch_turn_off() {
        let mut sleep = MockSleepHostPort::new();
        sleep
            .expect_sleep()
            .withf(|host| host == HOST)
            .times(1)
            .returning(|_| Ok(()));
        let mut reachability = MockReachabilityPort::new();
        reachability.expect_reachable().times(2).returning(|_| true);
        let core = new_core(MockWakePort::new(), sleep, reachability);

        let mut switch = PowerSwitch::new(core, None, Some(HOST.to_owned()));
        switch.update().await;
        assert!(switch.is_on());

        switch.turn_off().await.unwrap();
        assert!(!switch.is_on());
        switch.update().await;
        assert!(!switch.is_on());

        tokio::time::sleep(STATE_HOLD).await;
        switch.update().await;
        assert!(switch.is_on());
    }

    #[tokio::test]
    async fn power_switch_assumed_state() {
        let mut wake = MockWakePort::new();
        wake.expect_wake().times(1).returning(|_| Ok(()));
        let mut reachability = MockReachabilityPort::new();
        reachability.expect_reachable().never();
        let core = new_core(wake, MockSleepHostPort::new(), reachability);

        let mut switch = PowerSwitch::new(core, Some(wake_target()), None);
        assert!(!switch.is_polled());
        switch.turn_on().await.unwrap();
        switch.update().await;
        assert!(switch.is_on());

        assert!(matches!(
            switch.turn_off().await,
            Err(SwitchError::MissingHost)
        ));
        assert!(switch.is_on());
    }

    #[tokio::test]
    async fn power_switch_error_missing_mac() {
        let mut wake = MockWakePort::new();
        wake.expect_wake().never();
        let core = new_core(wake, MockSleepHostPort::new(), MockReachabilityPort::new());

        let mut switch = PowerSwitch::new(core, None, Some(HOST.to_owned()));
        assert!(matches!(switch.turn_on().await, Err(SwitchError::MissingMac)));
        assert!(!switch.is_on());
    }

    #[tokio::test]
    async fn power_switch_error_keeps_state() {
        let mut wake = MockWakePort::new();
        wake.expect_wake().returning(|_| {
            whatever!("network is unreachable");
        });
        let mut sleep = MockSleepHostPort::new();
        sleep.expect_sleep().returning(|_| {
            Err(RequestAssistantError::Unavailable {
                endpoint: "http://desktop.lan:1312/pol/sleep".to_owned(),
            })
        });
        let mut reachability = MockReachabilityPort::new();
        reachability.expect_reachable().returning(|_| true);
        let core = new_core(wake, sleep, reachability);

        let mut switch = PowerSwitch::new(core, Some(wake_target()), Some(HOST.to_owned()));
        assert!(matches!(
            switch.turn_on().await,
            Err(SwitchError::Wake { .. })
        ));
        assert!(!switch.is_on());

        switch.update().await;
        assert!(matches!(
            switch.turn_off().await,
            Err(SwitchError::Sleep { .. })
        ));
        assert!(switch.is_on());
    }
}
