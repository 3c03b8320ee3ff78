//! # Bit Register
//!
//! A 32-bit unsigned register that keeps its decimal, hexadecimal and
//! binary views and the bit matrix in step. The caller owns the register
//! and re-reads [`BitConverter::state`] after every mutation.
//!
//! Setters never panic: oversized input clamps to `u32::MAX`, unreadable
//! input leaves the register untouched and reports why.

use std::num::IntErrorKind;

use fisi_common::{NumberKind, ParseError};
use tracing::{debug, trace};

pub const WIDTH: u32 = u32::BITS;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitConverter {
    value: u32,
}

/// One cell of the bit matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitCell {
    /// `0` is the least significant bit.
    pub position: u8,
    pub set: bool,
}

impl BitCell {
    /// Weight of the bit inside its byte: 128 down to 1.
    pub fn byte_weight(&self) -> u8 {
        1 << (self.position % 8)
    }
}

/// Every view of the register at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitState {
    pub decimal: String,
    /// Uppercase, no `0x` prefix.
    pub hex: String,
    /// No zero padding.
    pub binary: String,
    /// Most significant bit first.
    pub bits: Vec<BitCell>,
}

impl BitState {
    /// The matrix in byte groups, most significant byte first, each paired
    /// with its byte number (`3` down to `0`).
    pub fn byte_groups(&self) -> impl Iterator<Item = (usize, &[BitCell])> {
        let count = self.bits.len() / 8;
        self.bits
            .chunks(8)
            .enumerate()
            .map(move |(idx, chunk)| (count - 1 - idx, chunk))
    }
}

impl BitConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn set(&mut self, value: u32) {
        self.value = value;
    }

    pub fn set_from_decimal(&mut self, text: &str) -> Result<(), ParseError> {
        self.set_from_text(text, NumberKind::Decimal)
    }

    /// Accepts an optional `0x` prefix.
    pub fn set_from_hex(&mut self, text: &str) -> Result<(), ParseError> {
        self.set_from_text(text, NumberKind::Hexadecimal)
    }

    /// Accepts an optional `0b` prefix.
    pub fn set_from_binary(&mut self, text: &str) -> Result<(), ParseError> {
        self.set_from_text(text, NumberKind::Binary)
    }

    fn set_from_text(&mut self, text: &str, kind: NumberKind) -> Result<(), ParseError> {
        match parse_clamped(text, kind) {
            Ok(value) => {
                debug!(value, %kind, "register updated");
                self.value = value;
                Ok(())
            }
            Err(err) => {
                trace!(%err, "register left unchanged");
                Err(err)
            }
        }
    }

    /// Flips bit `index` (0 = least significant). Indices past 31 are ignored.
    pub fn toggle_bit(&mut self, index: u32) {
        if index >= WIDTH {
            trace!(index, "toggle outside the register ignored");
            return;
        }

        let mut bits = self.bits_lsb_first();
        bits[index as usize] = !bits[index as usize];
        self.value = bits
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(i, _)| 1u32 << i)
            .sum();
    }

    pub fn is_set(&self, index: u32) -> bool {
        index < WIDTH && (self.value >> index) & 1 == 1
    }

    pub fn state(&self) -> BitState {
        let bits = (0..WIDTH)
            .rev()
            .map(|position| BitCell {
                position: position as u8,
                set: self.is_set(position),
            })
            .collect();

        BitState {
            decimal: self.value.to_string(),
            hex: format!("{:X}", self.value),
            binary: format!("{:b}", self.value),
            bits,
        }
    }

    fn bits_lsb_first(&self) -> [bool; WIDTH as usize] {
        std::array::from_fn(|i| self.is_set(i as u32))
    }
}

/// Reads `text` in the radix of `kind`, clamping values past `u32::MAX`.
fn parse_clamped(text: &str, kind: NumberKind) -> Result<u32, ParseError> {
    let trimmed = text.trim();
    let digits = match kind {
        NumberKind::Hexadecimal => strip_radix_prefix(trimmed, "0x"),
        NumberKind::Binary => strip_radix_prefix(trimmed, "0b"),
        NumberKind::Decimal | NumberKind::Locale => trimmed,
    };

    match u32::from_str_radix(digits, kind.radix()) {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(u32::MAX),
            IntErrorKind::Empty => Err(ParseError::Empty { kind }),
            _ => Err(ParseError::not_numeric(trimmed, kind)),
        },
    }
}

fn strip_radix_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    match unsigned.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &unsigned[prefix.len()..],
        _ => text,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
