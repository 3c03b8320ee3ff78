use fisi_common::config::Config;
use fisi_core::bits::{BitConverter, BitState};
use tracing::warn;

use crate::mprint;
use crate::terminal::{colors, format, print};
use colored::*;

/// Where the register's starting value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterInput {
    Decimal(String),
    Hex(String),
    Binary(String),
    Empty,
}

impl RegisterInput {
    pub fn from_flags(dec: Option<String>, hex: Option<String>, bin: Option<String>) -> Self {
        match (dec, hex, bin) {
            (Some(text), _, _) => RegisterInput::Decimal(text),
            (_, Some(text), _) => RegisterInput::Hex(text),
            (_, _, Some(text)) => RegisterInput::Binary(text),
            _ => RegisterInput::Empty,
        }
    }

    /// Loads the input into the register; unreadable input leaves it as is.
    pub fn apply(&self, register: &mut BitConverter) {
        let outcome = match self {
            RegisterInput::Decimal(text) => register.set_from_decimal(text),
            RegisterInput::Hex(text) => register.set_from_hex(text),
            RegisterInput::Binary(text) => register.set_from_binary(text),
            RegisterInput::Empty => Ok(()),
        };

        if let Err(err) = outcome {
            warn!("Ignoring input: {err}");
        }
    }
}

pub fn bits(input: RegisterInput, toggles: &[u32], cfg: &Config) -> anyhow::Result<()> {
    let mut register = BitConverter::new();
    input.apply(&mut register);

    for &index in toggles {
        if index >= fisi_core::bits::WIDTH {
            warn!("Bit {index} is outside the 32-bit register, skipping");
        }
        register.toggle_bit(index);
    }

    let state: BitState = register.state();

    if cfg.bare() {
        mprint!(&format!("{} {} {}", state.decimal, state.hex, state.binary));
        return Ok(());
    }

    print::set_key_width(["Decimal", "Hex", "Binary"]);
    print::aligned_line("Decimal", state.decimal.clone().color(colors::RESULT).bold());
    print::aligned_line("Hex", state.hex.clone());
    print::aligned_line("Binary", state.binary.clone());

    mprint!();
    print::header("32-bit matrix", cfg);
    for line in format::bit_matrix(&state) {
        mprint!(&format!("  {line}"));
    }

    print::end_of_program(cfg);
    Ok(())
}
