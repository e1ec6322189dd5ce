use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use pol_assistant::client::app::Command as ClientCommand;
use pol_assistant::daemon::config::DEFAULT_PORT;
use pol_assistant::domain::entity::{MacAddress, DEFAULT_BROADCAST};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Host running the assistant. Without it the state is only assumed
    #[arg(long)]
    pub host: Option<String>,
    /// Port the assistant listens on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Hardware address of the host's network interface
    #[arg(short, long)]
    pub mac: Option<MacAddress>,
    /// Where to send the magic packet
    #[arg(short, long, default_value_t = DEFAULT_BROADCAST)]
    pub broadcast: SocketAddr,
    /// Maximum logging level the subscriber should use
    #[arg(short, long, default_value_t = Level::WARN)]
    pub verbosity: Level,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Wake the host up with a magic packet
    On,
    /// Ask the assistant on the host to put it to sleep
    Off,
    /// Tell whether the host is up
    Status,
}

impl From<Command> for ClientCommand {
    fn from(value: Command) -> Self {
        match value {
            Command::On => Self::On,
            Command::Off => Self::Off,
            Command::Status => Self::Status,
        }
    }
}
