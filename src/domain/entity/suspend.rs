use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

use snafu::prelude::*;

/// Flags handed to the operating system's `SetSuspendState` entry point, in
/// the positional order it expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuspendParameters {
    pub hibernate: bool,
    pub force: bool,
    pub wake_events_disabled: bool,
}

impl SuspendParameters {
    /// Enter sleep rather than hibernation, keeping wake timers armed.
    ///
    /// `force` is set so the rendered triple is exactly `0,1,0`, the string
    /// the assistant has always handed to `rundll32`. `rundll32` passes its
    /// argument through as text, so changing the triple changes what every
    /// deployed controller gets when it asks for sleep.
    pub const SLEEP: Self = Self {
        hibernate: false,
        force: true,
        wake_events_disabled: false,
    };
}

impl Display for SuspendParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{},{},{}",
            u8::from(self.hibernate),
            u8::from(self.force),
            u8::from(self.wake_events_disabled),
        )
    }
}

/// The time between acknowledging a request and suspending the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SuspendDelay(Duration);

impl SuspendDelay {
    /// Try to create a [`SuspendDelay`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the duration is zero, since the
    /// acknowledgment would then race the suspension.
    pub fn try_new(delay: Duration) -> Result<Self, TryNewSuspendDelayError> {
        ensure!(!delay.is_zero(), ZeroSnafu);
        Ok(Self(delay))
    }

    /// Returns the inner duration of this [`SuspendDelay`].
    pub fn inner(&self) -> Duration {
        self.0
    }
}

impl TryFrom<Duration> for SuspendDelay {
    type Error = TryNewSuspendDelayError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`SuspendDelay`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewSuspendDelayError {
    #[snafu(display("Suspend delay must be greater than zero"))]
    #[non_exhaustive]
    Zero,
}
