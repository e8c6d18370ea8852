//! Membership of a list of addresses in one prefix.

use crate::error::Result;
use crate::models::{parse_addr, Ipv4};
use serde::Serialize;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    pub address: Ipv4Addr,
    pub contained: bool,
}

/// Check each address against `cidr`, in input order.
///
/// Unparseable addresses yield an error in their slot; the others are
/// still checked.
pub fn cidr_contains<S: AsRef<str>>(cidr: &Ipv4, inputs: &[S]) -> Vec<Result<Membership>> {
    log::debug!(
        "Checking {} address(es) against {} ({} - {})",
        inputs.len(),
        cidr,
        cidr.lo(),
        cidr.hi()
    );
    inputs
        .iter()
        .map(|input| {
            let address = parse_addr(input.as_ref())?;
            Ok(Membership {
                address,
                contained: cidr.contains(address),
            })
        })
        .collect()
}
