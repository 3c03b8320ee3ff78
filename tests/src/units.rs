use fisi_common::{NumberKind, ParseError};
use fisi_core::units::{self, Unit};
use proptest::prelude::*;

fn any_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(Unit::ALL.to_vec())
}

fn relative_error(a: f64, b: f64) -> f64 {
    if a == b {
        0.0
    } else {
        (a - b).abs() / a.abs().max(b.abs())
    }
}

proptest! {
    #[test]
    fn round_trip_returns_the_input(value in 0.001f64..1.0e9, a in any_unit(), b in any_unit()) {
        let (there, _) = units::convert(value, a, b);
        let (back, _) = units::convert(there, b, a);
        prop_assert!(relative_error(back, value) < 1e-12, "{value} {a} -> {b}: {back}");
    }

    #[test]
    fn result_is_bytes_over_factor(value in 0.001f64..1.0e9, a in any_unit(), b in any_unit()) {
        let (result, bytes) = units::convert(value, a, b);
        prop_assert_eq!(bytes, value * a.factor());
        prop_assert_eq!(result, bytes / b.factor());
    }

    #[test]
    fn explanation_ends_with_displayed_result(value in 0.001f64..1.0e9, a in any_unit(), b in any_unit()) {
        let conversion = units::convert_with_explanation(value, a, b);
        let shown = format!("= {} {}", units::format_number(conversion.result), b);
        let step_two = &conversion.explanation[1];

        prop_assert_eq!(conversion.explanation.len(), 2);
        prop_assert!(step_two.ends_with(&shown), "{step_two} vs {shown}");
        prop_assert!(conversion.explanation[0].contains(&units::format_number(conversion.bytes_equivalent)));
    }

    #[test]
    fn formatted_numbers_parse_back(value in 1.0f64..1.0e12) {
        let text = units::format_number(value);
        let parsed = units::parse_input(&text).unwrap();
        prop_assert!((parsed - value).abs() <= 0.00005 + value * 1e-15);
    }

    #[test]
    fn small_fractions_keep_ten_digits(value in 1.0e-6f64..1.0) {
        let text = units::format_number(value);
        prop_assert!(text.starts_with("0,") || text == "1");
        let digits = text.split(',').nth(1).map_or(0, str::len);
        prop_assert!(digits <= 10);
    }
}

#[test]
fn gib_to_mib() {
    assert_eq!(
        units::convert(1.0, Unit::Gibibyte, Unit::Mebibyte),
        (1024.0, 1_073_741_824.0)
    );
}

#[test]
fn bits_to_bytes() {
    assert_eq!(units::convert(8.0, Unit::Bit, Unit::Byte), (1.0, 1.0));
}

#[test]
fn locale_input_feeds_conversion() -> anyhow::Result<()> {
    let value = units::parse_input("1.536")?;
    let conversion = units::convert_with_explanation(value, Unit::Mebibyte, Unit::Gibibyte);
    assert_eq!(conversion.result, 1.5);
    assert_eq!(units::format_number(conversion.result), "1,5");
    Ok(())
}

#[test]
fn unreadable_input_is_a_typed_parse_error() {
    assert_eq!(
        units::parse_input(""),
        Err(ParseError::Empty {
            kind: NumberKind::Locale
        })
    );
    assert_eq!(
        units::parse_input("1.2.3"),
        Err(ParseError::not_numeric("1.2.3", NumberKind::Locale))
    );
}

#[test]
fn tiny_values_do_not_collapse() {
    assert_eq!(units::format_number(0.0001234), "0,0001234");
}
