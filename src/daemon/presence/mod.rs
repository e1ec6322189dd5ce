//! Interface to the tray icon which tells the user the assistant is running.
//!
//! Drawing the icon is left to a platform backend. The backend holds a
//! [`PresenceHandle`] and reports menu activations through it, while the main
//! path blocks in [`Presence::run`].

mod indicator;
mod menu;

pub use indicator::{Presence, PresenceConfig, PresenceEvent, PresenceHandle};
pub use menu::{build_menu, MenuAction, MenuItem};
