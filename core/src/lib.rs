//! # fisi-core
//!
//! The calculation engines behind the toolkit. Every engine is synchronous
//! and free of I/O; results are plain values the caller renders.
//!
//! * **[`subnet`]**: IPv4 network id, mask, broadcast and host range.
//! * **[`raid`]**: capacity, efficiency and fault tolerance of RAID 0/1/5/6/10.
//! * **[`bits`]**: a 32-bit register with decimal, hex, binary and bit views.
//! * **[`units`]**: data size conversion with a step-by-step derivation.

pub mod bits;
pub mod raid;
pub mod subnet;
pub mod units;

pub use bits::{BitConverter, BitState};
pub use raid::{RaidConfig, RaidLevel, RaidResult, ValidationError};
pub use subnet::{InvalidAddressError, Ipv4NetworkInfo};
pub use units::{ConversionResult, Unit};
