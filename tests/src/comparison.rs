//! Cross-checks the engines against reference values computed independently
//! from first principles: hand-picked edge cases first, then random samples.

use std::net::Ipv4Addr;

use fisi_core::raid::{self, RaidConfig, RaidLevel};
use fisi_core::subnet;
use fisi_core::units::{self, Unit, UnitBase};
use rand::Rng;
use rand::seq::IndexedRandom;

const RANDOM_CASES: usize = 50;

fn reference_factor(unit: Unit) -> f64 {
    let spec = unit.spec();
    match spec.base {
        UnitBase::Bit => 1.0 / 8.0,
        UnitBase::Byte => 1.0,
        UnitBase::Binary => 1024f64.powi(spec.power as i32),
        UnitBase::Decimal => 1000f64.powi(spec.power as i32),
    }
}

fn reference_hosts(prefix: u8) -> u64 {
    let block = 2f64.powi(32 - i32::from(prefix));
    (block - 2.0).max(0.0) as u64
}

fn reference_net(level: RaidLevel, disks: u32, size: f64) -> f64 {
    let n = f64::from(disks);
    match level {
        RaidLevel::Raid0 => n * size,
        RaidLevel::Raid1 => size,
        RaidLevel::Raid5 => (n - 1.0) * size,
        RaidLevel::Raid6 => (n - 2.0) * size,
        RaidLevel::Raid10 => n / 2.0 * size,
    }
}

fn check_subnet(ip: Ipv4Addr, prefix: u8) {
    let info = subnet::calculate(&ip.to_string(), u32::from(prefix))
        .unwrap_or_else(|err| panic!("{ip}/{prefix}: {err}"));
    let mask = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    };
    let raw = u32::from(ip);

    assert_eq!(u32::from(info.netmask), mask, "{ip}/{prefix}");
    assert_eq!(u32::from(info.network_address), raw & mask, "{ip}/{prefix}");
    assert_eq!(u32::from(info.broadcast_address), raw | !mask, "{ip}/{prefix}");
    assert_eq!(info.usable_hosts, reference_hosts(prefix), "{ip}/{prefix}");
}

fn check_raid(level: RaidLevel, disks: u32, size: f64) {
    let result = raid::calculate(&RaidConfig::new(level, disks, size))
        .unwrap_or_else(|err| panic!("{level} with {disks} disks: {err}"));
    let gross = f64::from(disks) * size;
    let net = reference_net(level, disks, size);

    assert!((result.gross_gb - gross).abs() <= gross * 1e-12);
    assert!((result.net_gb - net).abs() <= net * 1e-12);
    assert!((result.efficiency_pct - net / gross * 100.0).abs() < 1e-9);
}

fn check_units(value: f64, src: Unit, dst: Unit) {
    let expected = value * reference_factor(src) / reference_factor(dst);
    let (result, _) = units::convert(value, src, dst);
    let tolerance = expected.abs() * 1e-12;

    assert!(
        (result - expected).abs() <= tolerance,
        "{value} {src} -> {dst}: got {result}, expected {expected}"
    );
}

#[test]
fn subnet_edge_cases() {
    let cases = [
        ("0.0.0.0", 0),
        ("255.255.255.255", 32),
        ("10.0.0.1", 8),
        ("172.16.5.4", 12),
        ("192.168.1.77", 24),
        ("192.168.1.77", 30),
        ("192.168.1.77", 31),
        ("8.8.8.8", 32),
        ("203.0.113.200", 27),
    ];

    for (address, prefix) in cases {
        let ip: Ipv4Addr = address.parse().unwrap();
        check_subnet(ip, prefix);
    }
}

#[test]
fn subnet_random_cases() {
    let mut rng = rand::rng();
    for _ in 0..RANDOM_CASES {
        let ip = Ipv4Addr::from(rng.random::<u32>());
        let prefix: u8 = rng.random_range(0..=32);
        check_subnet(ip, prefix);
    }
}

#[test]
fn raid_edge_cases() {
    let cases = [
        (RaidLevel::Raid0, 2, 1000.0),
        (RaidLevel::Raid1, 2, 500.0),
        (RaidLevel::Raid5, 3, 4000.0),
        (RaidLevel::Raid6, 4, 2000.0),
        (RaidLevel::Raid10, 4, 1000.0),
        (RaidLevel::Raid10, 16, 0.5),
        (RaidLevel::Raid5, 24, 18_000.0),
    ];

    for (level, disks, size) in cases {
        check_raid(level, disks, size);
    }
}

#[test]
fn raid_random_cases() {
    let mut rng = rand::rng();
    for _ in 0..RANDOM_CASES {
        let level = *RaidLevel::ALL.choose(&mut rng).unwrap();
        let mut disks: u32 = rng.random_range(level.min_disks()..=64);
        if level.requires_even_disks() && disks % 2 == 1 {
            disks += 1;
        }
        let size: f64 = rng.random_range(0.1..20_000.0);
        check_raid(level, disks, size);
    }
}

#[test]
fn unit_edge_cases() {
    let cases = [
        (1.0, Unit::Gibibyte, Unit::Mebibyte),
        (8.0, Unit::Bit, Unit::Byte),
        (1.0, Unit::Terabyte, Unit::Tebibyte),
        (1.0, Unit::Pebibyte, Unit::Bit),
        (1.0, Unit::Bit, Unit::Petabyte),
        (0.0, Unit::Kilobyte, Unit::Kibibyte),
        (1536.0, Unit::Mebibyte, Unit::Gibibyte),
    ];

    for (value, src, dst) in cases {
        check_units(value, src, dst);
    }
}

#[test]
fn unit_random_cases() {
    let mut rng = rand::rng();
    for _ in 0..RANDOM_CASES {
        let src = *Unit::ALL.choose(&mut rng).unwrap();
        let dst = *Unit::ALL.choose(&mut rng).unwrap();
        let value: f64 = rng.random_range(0.0..1.0e6);
        check_units(value, src, dst);
    }
}
