use colored::*;
use fisi_common::config::Config;
use fisi_core::raid::{self, RaidConfig, RaidLevel, RaidResult};

use crate::mprint;
use crate::terminal::{colors, print};

pub fn raid(level: RaidLevel, disks: u32, size: f64, cfg: &Config) -> anyhow::Result<()> {
    let config = RaidConfig::new(level, disks, size);
    let result: RaidResult = raid::calculate(&config)?;

    if cfg.bare() {
        mprint!(&result.net_label());
        return Ok(());
    }

    print::set_key_width(["Level", "Disks", "Gross", "Net", "Efficiency", "Fault tolerance", "Formula"]);
    print::aligned_line("Level", level.to_string().color(colors::ACCENT));
    print::aligned_line("Disks", format!("{disks} x {size} GB"));
    print::aligned_line("Gross", result.gross_label());
    print::aligned_line("Net", result.net_label().color(colors::RESULT).bold());
    print::aligned_line("Efficiency", result.efficiency_label());
    print::aligned_line("Fault tolerance", result.fault_tolerance.clone());
    print::aligned_line("Formula", result.formula.italic());

    if cfg.shows_headers() {
        print::fat_separator();
        print::centerln(&format!(
            "{} usable of {} ({})",
            result.net_label().bold().green(),
            result.gross_label(),
            result.efficiency_label().bold().yellow()
        ));
    }

    print::end_of_program(cfg);
    Ok(())
}
