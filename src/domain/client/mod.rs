pub mod outbound;

mod app;
mod switch;

pub use app::ApplicationCore;
pub use switch::{PowerSwitch, SwitchError, STATE_HOLD};
