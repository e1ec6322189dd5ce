mod ping;
mod sleep;
mod wake;

pub use ping::{PingService, DEFAULT_PING_TIMEOUT};
pub use sleep::HttpSleepService;
pub use wake::MagicPacketService;
