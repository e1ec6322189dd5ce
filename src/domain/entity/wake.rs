use std::fmt::{Display, Formatter, Result as FmtResult};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

use snafu::prelude::*;

/// Where magic packets go unless told otherwise: the limited broadcast
/// address on the discard port.
pub const DEFAULT_BROADCAST: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::BROADCAST, 9));

/// Length of a magic packet: six `0xFF` bytes followed by sixteen copies of
/// the hardware address.
pub const MAGIC_PACKET_LEN: usize = 6 + 16 * 6;

/// A hardware address of the network interface to wake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Creates a new [`MacAddress`] from raw octets.
    pub fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Build the frame that wakes the interface owning this address.
    pub fn magic_packet(&self) -> [u8; MAGIC_PACKET_LEN] {
        let mut packet = [0xFF; MAGIC_PACKET_LEN];
        for chunk in packet[6..].chunks_exact_mut(6) {
            chunk.copy_from_slice(&self.0);
        }
        packet
    }
}

impl FromStr for MacAddress {
    type Err = ParseMacAddressError;

    /// Accepts `aabbccddeeff`, `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` and
    /// `aabb.ccdd.eeff`, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = match s.len() {
            12 => s.to_owned(),
            14 if s.as_bytes()[4] == b'.' && s.as_bytes()[9] == b'.' => s.replace('.', ""),
            17 => {
                let separator = s.as_bytes()[2];
                ensure!(
                    matches!(separator, b':' | b'-')
                        && s.bytes().skip(2).step_by(3).all(|b| b == separator),
                    InvalidFormatSnafu { input: s }
                );
                s.replace(char::from(separator), "")
            }
            _ => return InvalidFormatSnafu { input: s }.fail(),
        };
        ensure!(
            digits.len() == 12 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
            InvalidFormatSnafu { input: s }
        );

        let value = u64::from_str_radix(&digits, 16)
            .ok()
            .context(InvalidFormatSnafu { input: s })?;
        let mut octets = [0; 6];
        octets.copy_from_slice(&value.to_be_bytes()[2..]);
        Ok(Self(octets))
    }
}

impl Display for MacAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// An error type of parsing [`MacAddress`].
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseMacAddressError {
    #[snafu(display("Invalid hardware address {input:?}"))]
    InvalidFormat { input: String },
}

/// Who to wake and where to send the magic packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeTarget {
    pub mac: MacAddress,
    pub broadcast: SocketAddr,
}

impl WakeTarget {
    /// Creates a new [`WakeTarget`].
    pub fn new(mac: MacAddress, broadcast: SocketAddr) -> Self {
        Self { mac, broadcast }
    }
}
