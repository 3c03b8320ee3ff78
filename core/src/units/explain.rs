use super::{Unit, UnitBase, format_number};

/// Restates a conversion as two lines: source to bytes, bytes to destination.
///
/// Every number is rendered through [`format_number`] so the trace always
/// agrees with the displayed result.
pub fn generate_explanation(
    value: f64,
    src: Unit,
    dst: Unit,
    bytes_equivalent: f64,
    result: f64,
) -> Vec<String> {
    let value = format_number(value);
    let bytes = format_number(bytes_equivalent);
    let result = format_number(result);

    let to_bytes = match src.spec().base {
        UnitBase::Byte => format!("{value} Byte = {bytes} Byte"),
        UnitBase::Bit => format!("{value} Bit / 8 = {bytes} Byte"),
        UnitBase::Binary | UnitBase::Decimal => {
            format!("{value} {src} * {} = {bytes} Byte", factor_label(src))
        }
    };

    let from_bytes = match dst.spec().base {
        UnitBase::Byte => format!("{bytes} Byte = {result} Byte"),
        UnitBase::Bit => format!("{bytes} Byte * 8 = {result} Bit"),
        UnitBase::Binary | UnitBase::Decimal => {
            format!("{bytes} Byte / {} = {result} {dst}", factor_label(dst))
        }
    };

    vec![format!("Step 1: {to_bytes}"), format!("Step 2: {from_bytes}")]
}

/// The byte factor, followed by its power notation once the power passes 1.
fn factor_label(unit: Unit) -> String {
    let spec = unit.spec();
    let factor = format_number(spec.factor_in_bytes);
    if spec.power > 1 {
        format!("{factor} ({})", spec.exponent_label)
    } else {
        factor
    }
}
