use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use snafu::prelude::*;
use tokio::net::UdpSocket;

use crate::domain::client::outbound::{WakeHostError, WakePort};
use crate::domain::entity::WakeTarget;

/// A [`WakePort`] implementation which broadcasts a magic packet over UDP.
#[derive(Debug, Clone, Default)]
pub struct MagicPacketService;

impl MagicPacketService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl WakePort for MagicPacketService {
    async fn wake(&self, target: WakeTarget) -> Result<(), WakeHostError> {
        let local: SocketAddr = match target.broadcast {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(local)
            .await
            .whatever_context("Could not open a UDP socket")?;
        socket
            .set_broadcast(true)
            .whatever_context("Could not enable broadcast")?;

        let packet = target.mac.magic_packet();
        let sent = whatever!(
            socket.send_to(&packet, target.broadcast).await,
            "Could not send to {}",
            target.broadcast
        );
        ensure_whatever!(
            sent == packet.len(),
            "Only {sent} of {} bytes were sent",
            packet.len()
        );

        Ok(())
    }
}
