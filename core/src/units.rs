//! # Data Size Units
//!
//! Converts amounts between bits, bytes and the binary (1024) and decimal
//! (1000) byte multiples, formats results with locale punctuation and
//! explains every conversion as a two step derivation over bytes.
//!
//! All arithmetic is plain `f64`: `bytes = value * factor(src)` and
//! `result = bytes / factor(dst)`.

pub mod explain;

use std::fmt;
use std::str::FromStr;

use fisi_common::{ParseError, locale};
use thiserror::Error;
use tracing::debug;

pub use explain::generate_explanation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Bit,
    Byte,
    Kibibyte,
    Mebibyte,
    Gibibyte,
    Tebibyte,
    Pebibyte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
}

/// How a unit relates to the byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitBase {
    Bit,
    Byte,
    /// Powers of 1024.
    Binary,
    /// Powers of 1000.
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSpec {
    pub symbol: &'static str,
    pub display_name: &'static str,
    pub factor_in_bytes: f64,
    /// Power-of notation of the factor, e.g. `1024²`.
    pub exponent_label: &'static str,
    /// Exponent of the base (`0` for Bit and Byte).
    pub power: u32,
    pub base: UnitBase,
}

const fn spec(
    symbol: &'static str,
    display_name: &'static str,
    factor_in_bytes: f64,
    exponent_label: &'static str,
    power: u32,
    base: UnitBase,
) -> UnitSpec {
    UnitSpec {
        symbol,
        display_name,
        factor_in_bytes,
        exponent_label,
        power,
        base,
    }
}

static SPECS: [UnitSpec; 12] = [
    spec("Bit", "Bit (b)", 0.125, "1/8", 0, UnitBase::Bit),
    spec("Byte", "Byte (B)", 1.0, "1", 0, UnitBase::Byte),
    spec("KiB", "Kibibyte (KiB)", 1024.0, "1024", 1, UnitBase::Binary),
    spec("MiB", "Mebibyte (MiB)", 1_048_576.0, "1024²", 2, UnitBase::Binary),
    spec("GiB", "Gibibyte (GiB)", 1_073_741_824.0, "1024³", 3, UnitBase::Binary),
    spec("TiB", "Tebibyte (TiB)", 1_099_511_627_776.0, "1024⁴", 4, UnitBase::Binary),
    spec("PiB", "Pebibyte (PiB)", 1_125_899_906_842_624.0, "1024⁵", 5, UnitBase::Binary),
    spec("KB", "Kilobyte (KB)", 1e3, "1000", 1, UnitBase::Decimal),
    spec("MB", "Megabyte (MB)", 1e6, "1000²", 2, UnitBase::Decimal),
    spec("GB", "Gigabyte (GB)", 1e9, "1000³", 3, UnitBase::Decimal),
    spec("TB", "Terabyte (TB)", 1e12, "1000⁴", 4, UnitBase::Decimal),
    spec("PB", "Petabyte (PB)", 1e15, "1000⁵", 5, UnitBase::Decimal),
];

impl Unit {
    pub const ALL: [Unit; 12] = [
        Unit::Bit,
        Unit::Byte,
        Unit::Kibibyte,
        Unit::Mebibyte,
        Unit::Gibibyte,
        Unit::Tebibyte,
        Unit::Pebibyte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
    ];

    pub fn spec(self) -> &'static UnitSpec {
        &SPECS[self as usize]
    }

    pub fn symbol(self) -> &'static str {
        self.spec().symbol
    }

    pub fn factor(self) -> f64 {
        self.spec().factor_in_bytes
    }

    /// The 1000-based unit of the same power, e.g. KiB -> KB.
    pub fn decimal_counterpart(self) -> Option<Unit> {
        match self {
            Unit::Kibibyte => Some(Unit::Kilobyte),
            Unit::Mebibyte => Some(Unit::Megabyte),
            Unit::Gibibyte => Some(Unit::Gigabyte),
            Unit::Tebibyte => Some(Unit::Terabyte),
            Unit::Pebibyte => Some(Unit::Petabyte),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit '{0}' (expected one of Bit, Byte, KiB, MiB, GiB, TiB, PiB, KB, MB, GB, TB, PB)")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    /// Matches the unit symbol, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| unit.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

/// A finished conversion together with its derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub value: f64,
    pub src: Unit,
    pub dst: Unit,
    pub result: f64,
    pub bytes_equivalent: f64,
    pub explanation: Vec<String>,
}

/// One row of the "every unit at once" table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitReading {
    pub unit: Unit,
    pub value: f64,
    /// For binary units, the same amount in the matching decimal unit.
    pub decimal_equivalent: Option<(Unit, f64)>,
}

/// Reads a locale punctuated amount such as `1.234,5`.
pub fn parse_input(text: &str) -> Result<f64, ParseError> {
    locale::parse_locale_number(text)
}

/// Returns `(result, bytes_equivalent)`.
pub fn convert(value: f64, src: Unit, dst: Unit) -> (f64, f64) {
    let bytes = value * src.factor();
    let result = bytes / dst.factor();
    (result, bytes)
}

pub fn convert_with_explanation(value: f64, src: Unit, dst: Unit) -> ConversionResult {
    let (result, bytes_equivalent) = convert(value, src, dst);
    let explanation = generate_explanation(value, src, dst, bytes_equivalent, result);

    debug!(value, %src, %dst, result, "converted data size");

    ConversionResult {
        value,
        src,
        dst,
        result,
        bytes_equivalent,
        explanation,
    }
}

/// Converts `value` into every known unit, in table order.
pub fn convert_all(value: f64, src: Unit) -> Vec<UnitReading> {
    Unit::ALL
        .into_iter()
        .map(|unit| UnitReading {
            unit,
            value: convert(value, src, unit).0,
            decimal_equivalent: unit
                .decimal_counterpart()
                .map(|dec| (dec, convert(value, src, dec).0)),
        })
        .collect()
}

/// Locale formatting of a result.
///
/// Magnitudes of at least one (and zero) get four fraction digits with
/// thousands grouping; magnitudes below one get ten fraction digits so tiny
/// results do not collapse to `0`. Trailing zeros are stripped either way.
pub fn format_number(n: f64) -> String {
    if n == 0.0 || n.abs() >= 1.0 {
        locale::format_fixed(n, 4, true)
    } else {
        locale::format_fixed(n, 10, false)
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
