use std::net::Ipv4Addr;

use crate::terminal::colors;
use colored::*;
use fisi_core::bits::BitState;
use fisi_core::subnet::{BinaryRow, Ipv4NetworkInfo};
use fisi_core::units::{self, UnitReading};

pub type Detail = (String, ColoredString);

pub fn cidr(ip: Ipv4Addr, prefix: u8) -> ColoredString {
    let address: ColoredString = ip.to_string().color(colors::IPV4_ADDR);
    let prefix: ColoredString = prefix.to_string().color(colors::IPV4_PREFIX);
    format!("{address}/{prefix}").color(colors::SEPARATOR)
}

pub fn address(ip: Ipv4Addr) -> ColoredString {
    ip.to_string().color(colors::IPV4_ADDR)
}

pub fn optional_address(label: String, ip: Option<Ipv4Addr>) -> ColoredString {
    match ip {
        Some(_) => label.color(colors::IPV4_ADDR),
        None => label.color(colors::SEPARATOR),
    }
}

pub fn host_count(info: &Ipv4NetworkInfo) -> ColoredString {
    info.formatted_host_count().color(colors::RESULT).bold()
}

pub fn binary_row(row: &BinaryRow) -> String {
    format!(
        "{}  {}",
        row.bits.color(colors::PRIMARY),
        row.annotation.color(colors::SEPARATOR)
    )
}

/// Three lines: byte labels, the bits themselves, and in-byte weights.
pub fn bit_matrix(state: &BitState) -> [String; 3] {
    let mut labels: Vec<String> = Vec::new();
    let mut cells: Vec<String> = Vec::new();
    let mut weights: Vec<String> = Vec::new();

    for (byte_no, chunk) in state.byte_groups() {
        labels.push(format!("{:<16}", format!("Byte {byte_no}")));

        let bits: String = chunk
            .iter()
            .map(|cell| {
                if cell.set {
                    format!("{} ", "1".color(colors::BIT_SET).bold())
                } else {
                    format!("{} ", "0".color(colors::BIT_CLEAR))
                }
            })
            .collect();
        cells.push(bits);

        let byte_weights: String = chunk
            .iter()
            .map(|cell| format!("{:<2}", weight_glyph(cell.byte_weight())))
            .collect();
        weights.push(byte_weights);
    }

    [
        labels.join(" ").color(colors::PRIMARY).to_string(),
        cells.join(" "),
        weights.join(" ").color(colors::SEPARATOR).to_string(),
    ]
}

/// Single-column weight marker: the bit's exponent inside its byte.
fn weight_glyph(weight: u8) -> String {
    weight.trailing_zeros().to_string()
}

pub fn unit_reading(reading: &UnitReading) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        String::from("Value"),
        format!("{} {}", units::format_number(reading.value), reading.unit)
            .color(colors::RESULT),
    )];

    if let Some((unit, value)) = reading.decimal_equivalent {
        details.push((
            String::from("Decimal"),
            format!(
                "≈ {} {} (decimal, base 1000)",
                units::format_number(value),
                unit
            )
            .normal(),
        ));
    }

    details
}
