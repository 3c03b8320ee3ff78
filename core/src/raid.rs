//! # RAID Capacity Calculator
//!
//! Gross and net capacity, efficiency and fault tolerance of the common RAID
//! levels. Each level is one row in a profile table holding its disk-count
//! rules and capacity arithmetic; adding a level means adding a row.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaidLevel {
    Raid0,
    Raid1,
    Raid5,
    Raid6,
    Raid10,
}

impl RaidLevel {
    pub const ALL: [RaidLevel; 5] = [
        RaidLevel::Raid0,
        RaidLevel::Raid1,
        RaidLevel::Raid5,
        RaidLevel::Raid6,
        RaidLevel::Raid10,
    ];

    pub fn number(self) -> u8 {
        match self {
            RaidLevel::Raid0 => 0,
            RaidLevel::Raid1 => 1,
            RaidLevel::Raid5 => 5,
            RaidLevel::Raid6 => 6,
            RaidLevel::Raid10 => 10,
        }
    }

    pub fn min_disks(self) -> u32 {
        self.profile().min_disks
    }

    pub fn requires_even_disks(self) -> bool {
        self.profile().even_disks
    }

    fn profile(self) -> &'static RaidProfile {
        match self {
            RaidLevel::Raid0 => &PROFILES[0],
            RaidLevel::Raid1 => &PROFILES[1],
            RaidLevel::Raid5 => &PROFILES[2],
            RaidLevel::Raid6 => &PROFILES[3],
            RaidLevel::Raid10 => &PROFILES[4],
        }
    }
}

impl fmt::Display for RaidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RAID {}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown RAID level '{0}' (expected 0, 1, 5, 6 or 10)")]
pub struct UnknownRaidLevel(pub String);

impl FromStr for RaidLevel {
    type Err = UnknownRaidLevel;

    /// Accepts `5`, `raid5`, `RAID 5` and `raid-5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("raid")
            .unwrap_or(&lower)
            .trim_start_matches([' ', '-', '_']);

        match digits {
            "0" => Ok(RaidLevel::Raid0),
            "1" => Ok(RaidLevel::Raid1),
            "5" => Ok(RaidLevel::Raid5),
            "6" => Ok(RaidLevel::Raid6),
            "10" => Ok(RaidLevel::Raid10),
            _ => Err(UnknownRaidLevel(s.to_string())),
        }
    }
}

/// The constraint a configuration broke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RaidConstraint {
    MinimumDisks { required: u32, actual: u32 },
    EvenDiskCount { actual: u32 },
    PositiveDiskSize { actual: f64 },
    /// The total capacity does not fit in an `f64`.
    FiniteCapacity { disks: u32, size: f64 },
}

impl fmt::Display for RaidConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaidConstraint::MinimumDisks { required, actual } => {
                write!(f, "at least {required} disks (got {actual})")
            }
            RaidConstraint::EvenDiskCount { actual } => {
                write!(f, "an even number of disks (got {actual})")
            }
            RaidConstraint::PositiveDiskSize { actual } => {
                write!(f, "a positive disk size (got {actual} GB)")
            }
            RaidConstraint::FiniteCapacity { disks, size } => {
                write!(f, "a representable total capacity (got {disks} x {size} GB)")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{level} requires {constraint}")]
pub struct ValidationError {
    pub level: RaidLevel,
    pub constraint: RaidConstraint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaidConfig {
    pub level: RaidLevel,
    pub disk_count: u32,
    pub disk_size_gb: f64,
}

impl RaidConfig {
    pub fn new(level: RaidLevel, disk_count: u32, disk_size_gb: f64) -> Self {
        Self {
            level,
            disk_count,
            disk_size_gb,
        }
    }

    /// Checks the level's disk-count rules and the disk size.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let profile = self.level.profile();
        let fail = |constraint| ValidationError {
            level: self.level,
            constraint,
        };

        if !(self.disk_size_gb.is_finite() && self.disk_size_gb > 0.0) {
            return Err(fail(RaidConstraint::PositiveDiskSize {
                actual: self.disk_size_gb,
            }));
        }
        if self.disk_count < profile.min_disks {
            return Err(fail(RaidConstraint::MinimumDisks {
                required: profile.min_disks,
                actual: self.disk_count,
            }));
        }
        if profile.even_disks && self.disk_count % 2 != 0 {
            return Err(fail(RaidConstraint::EvenDiskCount {
                actual: self.disk_count,
            }));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaidResult {
    pub gross_gb: f64,
    pub net_gb: f64,
    /// Full precision; round only when displaying.
    pub efficiency_pct: f64,
    pub fault_tolerance: String,
    pub formula: String,
}

impl RaidResult {
    pub fn gross_label(&self) -> String {
        format!("{:.2} GB", self.gross_gb)
    }

    pub fn net_label(&self) -> String {
        format!("{:.2} GB", self.net_gb)
    }

    pub fn efficiency_label(&self) -> String {
        format!("{:.1} %", self.efficiency_pct)
    }
}

struct RaidProfile {
    min_disks: u32,
    even_disks: bool,
    net_capacity: fn(u32, f64) -> f64,
    fault_tolerance: fn(u32) -> String,
    formula: fn(u32, f64, f64) -> String,
}

static PROFILES: [RaidProfile; 5] = [
    // RAID 0: striping
    RaidProfile {
        min_disks: 2,
        even_disks: false,
        net_capacity: |n, s| f64::from(n) * s,
        fault_tolerance: |_| String::from("None (0 disks)"),
        formula: |n, s, net| format!("{n} * {s} GB = {net} GB"),
    },
    // RAID 1: mirroring
    RaidProfile {
        min_disks: 2,
        even_disks: false,
        net_capacity: |_, s| s,
        fault_tolerance: |n| format!("{} (mirrored)", disks(n - 1)),
        formula: |_, s, _| format!("{s} GB (mirrored)"),
    },
    // RAID 5: single parity
    RaidProfile {
        min_disks: 3,
        even_disks: false,
        net_capacity: |n, s| f64::from(n - 1) * s,
        fault_tolerance: |_| String::from("1 disk"),
        formula: |n, s, net| format!("({n} - 1) * {s} GB = {net} GB"),
    },
    // RAID 6: double parity
    RaidProfile {
        min_disks: 4,
        even_disks: false,
        net_capacity: |n, s| f64::from(n - 2) * s,
        fault_tolerance: |_| String::from("2 disks"),
        formula: |n, s, net| format!("({n} - 2) * {s} GB = {net} GB"),
    },
    // RAID 10: striped mirrors
    RaidProfile {
        min_disks: 4,
        even_disks: true,
        net_capacity: |n, s| f64::from(n / 2) * s,
        fault_tolerance: |n| format!("Up to {} (sub-array dependent)", disks(n / 2)),
        formula: |n, s, net| format!("({n} / 2) * {s} GB = {net} GB"),
    },
];

fn disks(count: u32) -> String {
    if count == 1 {
        String::from("1 disk")
    } else {
        format!("{count} disks")
    }
}

/// Calculates the capacity figures of a validated configuration.
pub fn calculate(config: &RaidConfig) -> Result<RaidResult, ValidationError> {
    config.validate()?;

    let profile = config.level.profile();
    let n = config.disk_count;
    let s = config.disk_size_gb;

    let gross_gb = f64::from(n) * s;
    let net_gb = (profile.net_capacity)(n, s);
    if !(gross_gb.is_finite() && net_gb.is_finite()) {
        return Err(ValidationError {
            level: config.level,
            constraint: RaidConstraint::FiniteCapacity { disks: n, size: s },
        });
    }
    let efficiency_pct = net_gb / gross_gb * 100.0;

    debug!(
        level = %config.level,
        disks = n,
        gross_gb,
        net_gb,
        "calculated raid capacity"
    );

    Ok(RaidResult {
        gross_gb,
        net_gb,
        efficiency_pct,
        fault_tolerance: (profile.fault_tolerance)(n),
        formula: (profile.formula)(n, s, net_gb),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
