//! # Locale Number Punctuation
//!
//! Numbers are read and written with `.` grouping thousands and `,`
//! separating the fraction, so one thousand two hundred thirty-four and a
//! half is `1.234,5`.

use tracing::trace;

use crate::error::{NumberKind, ParseError};

pub const THOUSANDS_SEPARATOR: char = '.';
pub const DECIMAL_SEPARATOR: char = ',';

/// Inserts a thousands separator into a run of ASCII digits.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}

/// Formats an integer with thousands grouping, e.g. `65534` -> `65.534`.
pub fn format_integer(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Renders `value` rounded to `precision` fraction digits, then strips the
/// trailing zeros of the fraction (and the separator if nothing is left).
///
/// `grouped` controls whether the integer part gets thousands separators.
/// Non-finite values are passed through as Rust prints them.
pub fn format_fixed(value: f64, precision: usize, grouped: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let is_zero = frac.is_empty() && int_part.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    if grouped {
        out.push_str(&group_thousands(int_part));
    } else {
        out.push_str(int_part);
    }

    if !frac.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac);
    }

    out
}

/// Reads a locale punctuated number such as `1.234,5` or `-0,25`.
///
/// Each `.` must sit between thousands groups and is dropped; a single `,`
/// becomes the decimal point. Anything besides an optional leading sign, digits and the two
/// separators is rejected, which also keeps `inf` and `NaN` out.
pub fn parse_locale_number(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty {
            kind: NumberKind::Locale,
        });
    }

    let body = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);

    let has_digit = body.chars().any(|c| c.is_ascii_digit());
    let only_allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || c == THOUSANDS_SEPARATOR || c == DECIMAL_SEPARATOR);
    let separators = body.matches(DECIMAL_SEPARATOR).count();

    if !has_digit || !only_allowed || separators > 1 || !well_grouped(body) {
        trace!(input = trimmed, "rejected locale number");
        return Err(ParseError::not_numeric(trimmed, NumberKind::Locale));
    }

    let normalized: String = trimmed
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
        .collect();

    normalized
        .parse::<f64>()
        .map_err(|_| ParseError::not_numeric(trimmed, NumberKind::Locale))
}

/// A `.` may only split the integer part into a leading group of one to
/// three digits followed by groups of exactly three.
fn well_grouped(body: &str) -> bool {
    let (int_part, frac_part) = body
        .split_once(DECIMAL_SEPARATOR)
        .unwrap_or((body, ""));
    if frac_part.contains(THOUSANDS_SEPARATOR) {
        return false;
    }
    if !int_part.contains(THOUSANDS_SEPARATOR) {
        return true;
    }

    let mut groups = int_part.split(THOUSANDS_SEPARATOR);
    let leading_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
    leading_ok && groups.all(|g| g.len() == 3)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
