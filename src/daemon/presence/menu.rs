use std::net::SocketAddr;

/// Actions that can be triggered from the indicator's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Quit,
}

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub tooltip: String,
    /// Disabled items are shown but can't be clicked.
    pub enabled: bool,
    pub action: Option<MenuAction>,
}

/// Build the indicator's menu: a status line and a way out.
pub fn build_menu(address: SocketAddr) -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: format!("Status: Running on {address}"),
            tooltip: String::new(),
            enabled: false,
            action: None,
        },
        MenuItem {
            label: "Quit".to_owned(),
            tooltip: "Quit the whole app".to_owned(),
            enabled: true,
            action: Some(MenuAction::Quit),
        },
    ]
}
