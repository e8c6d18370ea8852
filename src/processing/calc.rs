//! Network metadata for a single prefix.

use crate::models::{AddressClass, Ipv4};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything `calc` reports about a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    /// The prefix with host bits cleared.
    pub network: Ipv4,
    /// Legacy class of the network address.
    pub class: AddressClass,
    /// Dotted-quad netmask.
    pub netmask: Ipv4Addr,
    /// Network address.
    pub first: Ipv4Addr,
    /// Broadcast address.
    pub last: Ipv4Addr,
    /// Number of addresses in the block, network and broadcast included.
    pub total: u64,
}

/// Build the [`NetworkSummary`] of a prefix, normalizing any host bits.
pub fn calc(cidr: &Ipv4) -> NetworkSummary {
    let network = cidr.network();
    if network != *cidr {
        log::debug!("Normalized {cidr} to network {network}");
    }
    NetworkSummary {
        network,
        class: network.class(),
        netmask: network.netmask(),
        first: network.lo(),
        last: network.hi(),
        total: network.total(),
    }
}
