use fisi_core::raid::{self, RaidConfig, RaidConstraint, RaidLevel};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// The last number of a formula, i.e. the `{net}` in `... = {net} GB`.
fn formula_result(formula: &str) -> f64 {
    let tail = formula.rsplit("= ").next().unwrap_or(formula);
    let number = tail.split_whitespace().next().unwrap_or_default();
    number.parse().unwrap()
}

proptest! {
    #[test]
    fn efficiency_follows_the_level(n in 4u32..64, size in 0.5f64..100_000.0) {
        let n = n - n % 2;

        let eff = |level| raid::calculate(&RaidConfig::new(level, n, size)).unwrap().efficiency_pct;
        let n_f = f64::from(n);

        prop_assert!(close(eff(RaidLevel::Raid0), 100.0));
        prop_assert!(close(eff(RaidLevel::Raid1), 100.0 / n_f));
        prop_assert!(close(eff(RaidLevel::Raid5), (n_f - 1.0) / n_f * 100.0));
        prop_assert!(close(eff(RaidLevel::Raid6), (n_f - 2.0) / n_f * 100.0));
        prop_assert!(close(eff(RaidLevel::Raid10), 50.0));
    }

    #[test]
    fn formula_reproduces_net_capacity(n in 4u32..64, size in 0.5f64..100_000.0) {
        let n = n - n % 2;

        for level in RaidLevel::ALL {
            let result = raid::calculate(&RaidConfig::new(level, n, size)).unwrap();
            prop_assert_eq!(result.gross_gb, f64::from(n) * size);
            prop_assert_eq!(formula_result(&result.formula), result.net_gb);
            prop_assert!(close(result.efficiency_pct, result.net_gb / result.gross_gb * 100.0));
        }
    }

    #[test]
    fn odd_raid10_arrays_are_rejected(half in 2u32..50) {
        let n = half * 2 + 1;
        let err = raid::calculate(&RaidConfig::new(RaidLevel::Raid10, n, 1000.0)).unwrap_err();
        prop_assert_eq!(err.constraint, RaidConstraint::EvenDiskCount { actual: n });
    }
}

#[test]
fn raid1_mirrors_over_two_disks() -> anyhow::Result<()> {
    let result = raid::calculate(&RaidConfig::new(RaidLevel::Raid1, 2, 1000.0))?;
    assert_eq!(result.efficiency_pct, 50.0);
    assert_eq!(formula_result(&result.formula), 1000.0);
    assert_eq!(result.fault_tolerance, "1 disk (mirrored)");
    Ok(())
}

#[test]
fn raid5_with_two_disks_fails() {
    let err = raid::calculate(&RaidConfig::new(RaidLevel::Raid5, 2, 1000.0)).unwrap_err();
    assert_eq!(err.level, RaidLevel::Raid5);
    assert_eq!(
        err.constraint,
        RaidConstraint::MinimumDisks {
            required: 3,
            actual: 2
        }
    );
}

#[test]
fn raid10_with_five_disks_fails() {
    let err = raid::calculate(&RaidConfig::new(RaidLevel::Raid10, 5, 1000.0)).unwrap_err();
    assert!(err.to_string().contains("even"));
}
