use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Port the assistant listens on.
pub const DEFAULT_PORT: u16 = 1312;

/// Time given to the acknowledgment to reach the caller before suspending.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Upper bound for each step of the shutdown sequence.
pub const DEFAULT_GRACE: Duration = Duration::from_secs(3);

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Installation directory of the operating system, if known.
    pub windows_directory: Option<PathBuf>,
    /// Address the HTTP server binds to. All interfaces by default.
    pub address: SocketAddr,
    pub delay: Duration,
    pub grace: Duration,
}

impl Configuration {
    /// Location of the `rundll32` utility under the installation directory.
    pub fn rundll32(&self) -> Option<PathBuf> {
        self.windows_directory
            .as_ref()
            .map(|dir| dir.join("System32").join("rundll32.exe"))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            windows_directory: None,
            address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            delay: DEFAULT_DELAY,
            grace: DEFAULT_GRACE,
        }
    }
}
