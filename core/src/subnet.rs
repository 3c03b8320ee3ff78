//! # IPv4 Subnet Calculator
//!
//! Derives the network block around an IPv4 address for a given prefix
//! length: mask, network id, broadcast, usable host range and the binary
//! AND derivation shown to the user.

use std::fmt;
use std::net::Ipv4Addr;

use fisi_common::locale;
use thiserror::Error;
use tracing::debug;

pub const MAX_PREFIX: u32 = 32;

/// Prefix used when combined notation carries no `/nn` part.
pub const DEFAULT_PREFIX: u32 = 24;

/// Why an address literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFault {
    SegmentCount(usize),
    EmptyOctet,
    NonDigit,
    LeadingZero,
    OctetOutOfRange,
}

impl fmt::Display for AddressFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFault::SegmentCount(n) => write!(f, "expected 4 octets, found {n}"),
            AddressFault::EmptyOctet => f.write_str("empty octet"),
            AddressFault::NonDigit => f.write_str("octets may only contain digits"),
            AddressFault::LeadingZero => f.write_str("octets may not have leading zeros"),
            AddressFault::OctetOutOfRange => f.write_str("octet is larger than 255"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAddressError {
    #[error("invalid IPv4 address '{input}': {fault}")]
    Malformed { input: String, fault: AddressFault },

    #[error("invalid prefix length '{input}': must be a number between 0 and 32")]
    PrefixOutOfRange { input: String },
}

/// The full description of one IPv4 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4NetworkInfo {
    pub address: Ipv4Addr,
    pub prefix_len: u8,
    pub netmask: Ipv4Addr,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    /// `None` when the block has no room for hosts (/31, /32).
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub usable_hosts: u64,
}

/// One line of the binary masking derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRow {
    pub bits: String,
    pub annotation: String,
}

impl fmt::Display for BinaryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.bits, self.annotation)
    }
}

impl Ipv4NetworkInfo {
    /// Address, mask and network id in dotted binary, annotated so the rows
    /// read as `address AND mask = network`.
    pub fn binary_rows(&self) -> [BinaryRow; 3] {
        [
            BinaryRow {
                bits: format_binary(self.address),
                annotation: format!("({})", self.address),
            },
            BinaryRow {
                bits: format_binary(self.netmask),
                annotation: String::from("(AND)"),
            },
            BinaryRow {
                bits: format_binary(self.network_address),
                annotation: String::from("(=)"),
            },
        ]
    }

    /// Usable host count with thousands grouping, e.g. `65.534`.
    pub fn formatted_host_count(&self) -> String {
        locale::format_integer(self.usable_hosts)
    }

    pub fn first_host_label(&self) -> String {
        host_label(self.first_host)
    }

    pub fn last_host_label(&self) -> String {
        host_label(self.last_host)
    }

    /// Plain-text block meant for pasting into tickets or notes.
    pub fn summary(&self) -> String {
        format!(
            "Network: {}/{}\nNetmask: {}\nBroadcast: {}\nHosts: {}\nRange: {} - {}",
            self.network_address,
            self.prefix_len,
            self.netmask,
            self.broadcast_address,
            self.formatted_host_count(),
            self.first_host_label(),
            self.last_host_label(),
        )
    }
}

fn host_label(host: Option<Ipv4Addr>) -> String {
    host.map_or_else(|| String::from("N/A"), |ip| ip.to_string())
}

/// Calculates the block `address/prefix_len`.
pub fn calculate(address: &str, prefix_len: u32) -> Result<Ipv4NetworkInfo, InvalidAddressError> {
    let ip = parse_address(address)?;
    let prefix = validate_prefix(prefix_len)?;
    Ok(network_info(ip, prefix))
}

/// Calculates a block written in CIDR notation, e.g. `192.168.1.10/24`.
///
/// Without a `/nn` part the block uses [`DEFAULT_PREFIX`].
pub fn calculate_cidr(text: &str) -> Result<Ipv4NetworkInfo, InvalidAddressError> {
    let trimmed = text.trim();
    let Some((ip_str, prefix_str)) = trimmed.split_once('/') else {
        return calculate(trimmed, DEFAULT_PREFIX);
    };

    let prefix = prefix_str
        .parse::<u32>()
        .ok()
        .filter(|_| prefix_str.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| InvalidAddressError::PrefixOutOfRange {
            input: prefix_str.to_string(),
        })?;

    calculate(ip_str, prefix)
}

/// Builds the block description for an already validated address and prefix.
fn network_info(address: Ipv4Addr, prefix_len: u8) -> Ipv4NetworkInfo {
    let mask = netmask(prefix_len);
    let network = u32::from(address) & mask;
    let broadcast = network | !mask;

    let block_size: u64 = 1u64 << (MAX_PREFIX - u32::from(prefix_len));
    let usable_hosts = block_size.saturating_sub(2);

    let (first_host, last_host) = if usable_hosts > 0 {
        (
            Some(Ipv4Addr::from(network + 1)),
            Some(Ipv4Addr::from(broadcast - 1)),
        )
    } else {
        (None, None)
    };

    let info = Ipv4NetworkInfo {
        address,
        prefix_len,
        netmask: Ipv4Addr::from(mask),
        network_address: Ipv4Addr::from(network),
        broadcast_address: Ipv4Addr::from(broadcast),
        first_host,
        last_host,
        usable_hosts,
    };

    debug!(
        network = %info.network_address,
        prefix = prefix_len,
        hosts = usable_hosts,
        "calculated subnet"
    );

    info
}

/// The 32-bit value with the top `prefix_len` bits set.
pub fn netmask(prefix_len: u8) -> u32 {
    if prefix_len == 0 {
        0
    } else {
        u32::MAX << (MAX_PREFIX - u32::from(prefix_len).min(MAX_PREFIX))
    }
}

/// Four 8-bit groups joined by `.`, e.g. `11000000.10101000.00000001.00001010`.
pub fn format_binary(address: Ipv4Addr) -> String {
    address
        .octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// Strict dotted-quad parser: four decimal octets, no signs, no leading zeros.
pub fn parse_address(input: &str) -> Result<Ipv4Addr, InvalidAddressError> {
    let malformed = |fault| InvalidAddressError::Malformed {
        input: input.to_string(),
        fault,
    };

    let segments: Vec<&str> = input.split('.').collect();
    if segments.len() != 4 {
        return Err(malformed(AddressFault::SegmentCount(segments.len())));
    }

    let mut octets = [0u8; 4];
    for (slot, segment) in octets.iter_mut().zip(&segments) {
        if segment.is_empty() {
            return Err(malformed(AddressFault::EmptyOctet));
        }
        if !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(AddressFault::NonDigit));
        }
        if segment.len() > 1 && segment.starts_with('0') {
            return Err(malformed(AddressFault::LeadingZero));
        }
        *slot = segment
            .parse::<u8>()
            .map_err(|_| malformed(AddressFault::OctetOutOfRange))?;
    }

    Ok(Ipv4Addr::from(octets))
}

fn validate_prefix(prefix_len: u32) -> Result<u8, InvalidAddressError> {
    if prefix_len > MAX_PREFIX {
        return Err(InvalidAddressError::PrefixOutOfRange {
            input: prefix_len.to_string(),
        });
    }
    Ok(prefix_len as u8)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
