use colored::*;
use fisi_common::config::Config;
use fisi_core::units::{self, ConversionResult, Unit, UnitReading};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn units(value: &str, from: Unit, to: Option<Unit>, cfg: &Config) -> anyhow::Result<()> {
    let amount: f64 = units::parse_input(value)?;

    match to {
        Some(to) => single(amount, from, to, cfg),
        None => table(amount, from, cfg),
    }

    print::end_of_program(cfg);
    Ok(())
}

fn single(amount: f64, from: Unit, to: Unit, cfg: &Config) {
    let conversion: ConversionResult = units::convert_with_explanation(amount, from, to);
    let result: String = format!("{} {}", units::format_number(conversion.result), to);

    if cfg.bare() {
        mprint!(&units::format_number(conversion.result));
        return;
    }

    print::set_key_width(["Input", "Bytes", "Result"]);
    print::aligned_line("Input", format!("{} {}", units::format_number(amount), from));
    print::aligned_line(
        "Bytes",
        format!("{} Byte", units::format_number(conversion.bytes_equivalent)),
    );
    print::aligned_line("Result", result.clone().color(colors::RESULT).bold());

    if !cfg.no_explain {
        mprint!();
        print::header("derivation", cfg);
        for step in &conversion.explanation {
            print::print_status(step);
        }
    }

    if cfg.shows_headers() {
        print::fat_separator();
        print::centerln(&format!(
            "{} {} = {}",
            units::format_number(amount),
            from,
            result.bold().green()
        ));
    }
}

fn table(amount: f64, from: Unit, cfg: &Config) {
    let readings: Vec<UnitReading> = units::convert_all(amount, from);

    if cfg.bare() {
        for reading in &readings {
            mprint!(&format!("{} {}", units::format_number(reading.value), reading.unit));
        }
        return;
    }

    for (idx, reading) in readings.iter().enumerate() {
        print::tree_head(idx, reading.unit.spec().display_name);
        print::as_tree_one_level(format::unit_reading(reading));
        if idx + 1 != readings.len() {
            mprint!();
        }
    }
}
