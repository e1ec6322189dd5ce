use std::net::SocketAddr;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::menu::{self, MenuAction, MenuItem};

const APP_TITLE: &str = "PoL Assistant";

/// What the indicator shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceConfig {
    pub title: String,
    pub tooltip: String,
    /// Address shown in the status line.
    pub address: SocketAddr,
}

impl PresenceConfig {
    /// Creates a new [`PresenceConfig`] with the default title and tooltip.
    pub fn new(address: SocketAddr) -> Self {
        Self {
            title: APP_TITLE.to_owned(),
            tooltip: APP_TITLE.to_owned(),
            address,
        }
    }
}

/// Events emitted by the indicator backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceEvent {
    QuitRequested,
}

impl From<MenuAction> for PresenceEvent {
    fn from(action: MenuAction) -> Self {
        match action {
            MenuAction::Quit => Self::QuitRequested,
        }
    }
}

/// The event loop side of the presence indicator. The main path of the
/// process blocks in [`Presence::run`] until the user asks to quit.
///
/// The loop keeps a sender of its own, so it only ever ends on
/// [`PresenceEvent::QuitRequested`], however many handles are dropped.
#[derive(Debug)]
pub struct Presence {
    config: PresenceConfig,
    menu: Vec<MenuItem>,
    sender: UnboundedSender<PresenceEvent>,
    events: UnboundedReceiver<PresenceEvent>,
}

impl Presence {
    /// Creates a new [`Presence`] and the handle a backend uses to feed it
    /// events.
    pub fn new(config: PresenceConfig) -> (Self, PresenceHandle) {
        let (sender, events) = mpsc::unbounded_channel();
        let menu = menu::build_menu(config.address);
        let presence = Self {
            config,
            menu,
            sender,
            events,
        };
        let handle = presence.handle();
        (presence, handle)
    }

    /// Another handle feeding this event loop.
    pub fn handle(&self) -> PresenceHandle {
        PresenceHandle {
            sender: self.sender.clone(),
        }
    }

    /// Process indicator events until quit is requested.
    #[tracing::instrument(skip(self), fields(title = %self.config.title))]
    pub async fn run(mut self) {
        for item in &self.menu {
            tracing::debug!(label = %item.label, enabled = item.enabled, "Menu item");
        }
        tracing::info!(tooltip = %self.config.tooltip, "Presence indicator ready");

        while let Some(event) = self.events.recv().await {
            match event {
                PresenceEvent::QuitRequested => {
                    tracing::info!("Quit requested");
                    return;
                }
            }
        }
    }
}

/// The backend side of the presence indicator.
#[derive(Debug, Clone)]
pub struct PresenceHandle {
    sender: UnboundedSender<PresenceEvent>,
}

impl PresenceHandle {
    /// Report that a menu item was activated. Returns `false` if the event
    /// loop has already ended.
    pub fn activate(&self, action: MenuAction) -> bool {
        self.sender.send(action.into()).is_ok()
    }

    /// Shorthand for activating [`MenuAction::Quit`].
    pub fn quit(&self) -> bool {
        self.activate(MenuAction::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    fn address() -> SocketAddr {
        "0.0.0.0:1312".parse().unwrap()
    }

    #[test]
    fn presence_config_new() {
        let config = PresenceConfig::new(address());
        assert_eq!(config.title, "PoL Assistant");
        assert_eq!(config.tooltip, "PoL Assistant");
    }

    #[test]
    fn presence_event_from_menu_action() {
        assert_eq!(
            PresenceEvent::from(MenuAction::Quit),
            PresenceEvent::QuitRequested,
        );
    }

    #[tokio::test(start_paused = true)]
    async fn presence_run_until_quit() {
        let (presence, handle) = Presence::new(PresenceConfig::new(address()));
        let task = tokio::spawn(presence.run());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(!task.is_finished());

        assert!(handle.quit());
        task.await.unwrap();
        assert!(!handle.quit());
    }

    #[tokio::test(start_paused = true)]
    async fn presence_run_ignores_dropped_handles() {
        let (presence, handle) = Presence::new(PresenceConfig::new(address()));
        let other = presence.handle();
        drop(handle);
        let task = tokio::spawn(presence.run());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(!task.is_finished());

        assert!(other.quit());
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn presence_run_without_any_handle() {
        let (presence, handle) = Presence::new(PresenceConfig::new(address()));
        drop(handle);
        let task = tokio::spawn(presence.run());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(!task.is_finished());
        task.abort();
    }
}
