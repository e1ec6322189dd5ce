use std::sync::Arc;

use crate::domain::client::outbound::{ReachabilityPort, SleepHostPort, WakePort};

/// Entrance to the domain logic, providing ports for external adapters.
pub struct ApplicationCore {
    pub wake: Arc<dyn WakePort>,
    pub sleep: Arc<dyn SleepHostPort>,
    pub reachability: Arc<dyn ReachabilityPort>,
}

impl ApplicationCore {
    /// Create and initialize a new [`ApplicationCore`] by injecting external
    /// adapters.
    pub fn setup(
        wake: Arc<dyn WakePort>,
        sleep: Arc<dyn SleepHostPort>,
        reachability: Arc<dyn ReachabilityPort>,
    ) -> ApplicationCore {
        Self {
            wake,
            sleep,
            reachability,
        }
    }
}
