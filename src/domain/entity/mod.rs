pub mod request;
pub mod suspend;
pub mod wake;

pub use request::{RequestMethod, SleepRequest};
pub use suspend::{SuspendDelay, SuspendParameters, TryNewSuspendDelayError};
pub use wake::{MacAddress, ParseMacAddressError, WakeTarget, DEFAULT_BROADCAST};
