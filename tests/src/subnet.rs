use std::net::Ipv4Addr;

use fisi_core::subnet::{self, InvalidAddressError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn masking_identities_hold(raw in any::<u32>(), prefix in 0u32..=32) {
        let address = Ipv4Addr::from(raw).to_string();
        let info = subnet::calculate(&address, prefix).unwrap();

        let mask = u32::from(info.netmask);
        let network = u32::from(info.network_address);
        let broadcast = u32::from(info.broadcast_address);

        prop_assert_eq!(network & !mask, 0);
        prop_assert_eq!(broadcast, network | !mask);
        prop_assert_eq!(network, raw & mask);
        prop_assert_eq!(mask.leading_ones(), prefix);
    }

    #[test]
    fn host_range_sits_inside_the_block(raw in any::<u32>(), prefix in 0u32..=30) {
        let info = subnet::calculate(&Ipv4Addr::from(raw).to_string(), prefix).unwrap();

        let first = u32::from(info.first_host.unwrap());
        let last = u32::from(info.last_host.unwrap());

        prop_assert_eq!(first, u32::from(info.network_address) + 1);
        prop_assert_eq!(last, u32::from(info.broadcast_address) - 1);
        prop_assert_eq!(info.usable_hosts, (1u64 << (32 - prefix)) - 2);
        prop_assert_eq!(u64::from(last - first) + 1, info.usable_hosts);
    }

    #[test]
    fn tiny_blocks_have_no_hosts(raw in any::<u32>(), prefix in 31u32..=32) {
        let info = subnet::calculate(&Ipv4Addr::from(raw).to_string(), prefix).unwrap();

        prop_assert_eq!(info.usable_hosts, 0);
        prop_assert_eq!(info.first_host, None);
        prop_assert_eq!(info.last_host, None);
        prop_assert_eq!(info.first_host_label(), "N/A");
    }

    #[test]
    fn prefixes_past_32_are_rejected(prefix in 33u32..=u32::MAX) {
        let rejected = matches!(
            subnet::calculate("10.0.0.1", prefix),
            Err(InvalidAddressError::PrefixOutOfRange { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn out_of_range_octets_are_rejected(octet in 256u32..100_000) {
        let address = format!("10.{octet}.0.1");
        let err = subnet::calculate(&address, 24).unwrap_err();
        prop_assert!(err.to_string().contains(&address));
    }

    #[test]
    fn binary_rows_match_the_addresses(raw in any::<u32>(), prefix in 0u32..=32) {
        let info = subnet::calculate(&Ipv4Addr::from(raw).to_string(), prefix).unwrap();
        let [ip, mask, net] = info.binary_rows();

        for (row, value) in [(ip, raw), (mask, u32::from(info.netmask)), (net, u32::from(info.network_address))] {
            let joined: String = row.bits.split('.').collect();
            prop_assert_eq!(u32::from_str_radix(&joined, 2).unwrap(), value);
        }
    }
}

#[test]
fn cidr_and_split_forms_agree() -> anyhow::Result<()> {
    let split = subnet::calculate("192.168.178.33", 27)?;
    let cidr = subnet::calculate_cidr("192.168.178.33/27")?;

    assert_eq!(split, cidr);
    assert_eq!(cidr.network_address, Ipv4Addr::new(192, 168, 178, 32));
    assert_eq!(cidr.broadcast_address, Ipv4Addr::new(192, 168, 178, 63));
    assert_eq!(cidr.usable_hosts, 30);
    Ok(())
}

#[test]
fn large_host_counts_are_grouped() -> anyhow::Result<()> {
    let info = subnet::calculate("10.0.0.0", 8)?;
    assert_eq!(info.formatted_host_count(), "16.777.214");
    Ok(())
}
