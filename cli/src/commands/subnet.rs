use colored::*;
use fisi_common::config::Config;
use fisi_core::subnet::{self, Ipv4NetworkInfo};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn subnet(address: &str, prefix: Option<u32>, summary: bool, cfg: &Config) -> anyhow::Result<()> {
    let info: Ipv4NetworkInfo = resolve(address, prefix)?;

    if cfg.bare() {
        mprint!(&info.summary());
        return Ok(());
    }

    print_block(&info);
    mprint!();
    print::header("binary derivation", cfg);
    for row in info.binary_rows() {
        print::print_status(format::binary_row(&row));
    }

    if summary {
        print::fat_separator();
        for line in info.summary().lines() {
            mprint!(line);
        }
    }

    print::end_of_program(cfg);
    Ok(())
}

/// `--prefix` only applies to a bare address; `a.b.c.d/nn` carries its own.
fn resolve(address: &str, prefix: Option<u32>) -> anyhow::Result<Ipv4NetworkInfo> {
    match prefix {
        Some(_) if address.contains('/') => anyhow::bail!(
            "'{}' already has a prefix, drop either the /nn part or --prefix",
            address.trim()
        ),
        Some(prefix) => Ok(subnet::calculate(address, prefix)?),
        None => Ok(subnet::calculate_cidr(address)?),
    }
}

fn print_block(info: &Ipv4NetworkInfo) {
    print::set_key_width(["Address", "Network", "Netmask", "Broadcast", "Usable hosts", "First host", "Last host"]);

    print::aligned_line("Address", format::cidr(info.address, info.prefix_len));
    print::aligned_line("Network", format::cidr(info.network_address, info.prefix_len));
    print::aligned_line("Netmask", format::address(info.netmask));
    print::aligned_line("Broadcast", format::address(info.broadcast_address));
    print::aligned_line("Usable hosts", format::host_count(info));
    print::aligned_line(
        "First host",
        format::optional_address(info.first_host_label(), info.first_host),
    );
    print::aligned_line(
        "Last host",
        format::optional_address(info.last_host_label(), info.last_host),
    );

    if info.usable_hosts == 0 {
        print::print_status(
            format!("/{} leaves no room for hosts", info.prefix_len)
                .color(colors::WARNING)
                .to_string(),
        );
    }
}
