pub mod bits;
pub mod raid;
pub mod subnet;
pub mod units;

use clap::{ArgAction, Parser, Subcommand};
use fisi_core::{RaidLevel, Unit};

#[derive(Parser)]
#[command(name = "fisi")]
#[command(version, about = "Calculators for IT technicians.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output: -q hides headers, -qq prints bare values
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Hide the step-by-step derivation of unit conversions
    #[arg(long, global = true)]
    pub no_explain: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate network, broadcast and host range of an IPv4 subnet
    #[command(alias = "n")]
    Subnet {
        /// Address, optionally in CIDR notation (e.g. 192.168.1.10/24)
        address: String,
        /// Prefix length, used when the address has no /nn part
        #[arg(short, long)]
        prefix: Option<u32>,
        /// Also print a plain-text summary for copying
        #[arg(long)]
        summary: bool,
    },
    /// Calculate the capacity of a RAID array
    #[command(alias = "r")]
    Raid {
        /// RAID level: 0, 1, 5, 6 or 10
        #[arg(short, long)]
        level: RaidLevel,
        /// Number of disks
        #[arg(short, long)]
        disks: u32,
        /// Size of a single disk in GB
        #[arg(short, long)]
        size: f64,
    },
    /// Convert a 32-bit value between decimal, hex and binary
    #[command(alias = "b")]
    Bits {
        /// Decimal value
        #[arg(long, conflicts_with_all = ["hex", "bin"])]
        dec: Option<String>,
        /// Hexadecimal value
        #[arg(long, conflicts_with = "bin")]
        hex: Option<String>,
        /// Binary value
        #[arg(long)]
        bin: Option<String>,
        /// Flip a bit (0 = least significant); may be repeated
        #[arg(short, long)]
        toggle: Vec<u32>,
    },
    /// Convert a data size between units
    #[command(alias = "u")]
    Units {
        /// Amount, with '.' grouping thousands and ',' as decimal separator
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit (Bit, Byte, KiB ... PiB, KB ... PB)
        from: Unit,
        /// Destination unit; omit to convert into every unit
        to: Option<Unit>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
