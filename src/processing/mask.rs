//! Smallest netmask for a list of host counts.

use crate::error::{CidrError, Result};
use crate::models::{capacity, minimal_prefix_len, Ipv4};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Netmask chosen for one host count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskResult {
    pub hosts: u64,
    pub prefix_len: u8,
    pub netmask: Ipv4Addr,
    pub total: u64,
}

/// Parse a host count argument. Negative and non-numeric input is rejected.
pub fn parse_host_count(input: &str) -> Result<u64> {
    input
        .trim()
        .parse()
        .map_err(|_| CidrError::InvalidHostCount {
            input: input.to_string(),
        })
}

/// Netmask that fits `hosts` hosts plus network and broadcast.
pub fn mask_for_hosts(hosts: u64) -> Result<MaskResult> {
    let prefix_len = minimal_prefix_len(hosts)?;
    let block = Ipv4::from_parts(Ipv4Addr::UNSPECIFIED, prefix_len)?;
    Ok(MaskResult {
        hosts,
        prefix_len,
        netmask: block.netmask(),
        total: capacity(prefix_len)?,
    })
}

/// Process host count arguments in order. A bad item does not stop the rest.
pub fn masks_for_inputs<S: AsRef<str>>(inputs: &[S]) -> Vec<Result<MaskResult>> {
    inputs
        .iter()
        .map(|input| {
            let result = parse_host_count(input.as_ref()).and_then(mask_for_hosts);
            if let Err(e) = &result {
                log::debug!("Skipping host count {:?}: {e}", input.as_ref());
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_count() {
        assert_eq!(parse_host_count("12300").unwrap(), 12300);
        assert_eq!(parse_host_count(" 7 ").unwrap(), 7);
        for bad in ["-5", "ten", "", "1.5"] {
            assert_eq!(
                parse_host_count(bad).unwrap_err(),
                CidrError::InvalidHostCount {
                    input: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn test_mask_for_hosts() {
        let result = mask_for_hosts(10).unwrap();
        assert_eq!(result.prefix_len, 28);
        assert_eq!(result.netmask, Ipv4Addr::new(255, 255, 255, 240));
        assert_eq!(result.total, 16);

        let result = mask_for_hosts(12300).unwrap();
        assert_eq!(result.prefix_len, 18);
        assert_eq!(result.netmask, Ipv4Addr::new(255, 255, 192, 0));
    }

    #[test]
    fn test_masks_for_inputs_keeps_order() {
        let results = masks_for_inputs(&["200", "oops", "390", "4294967295", "12300"]);
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].as_ref().unwrap().prefix_len, 24);
        assert!(matches!(results[1], Err(CidrError::InvalidHostCount { .. })));
        assert_eq!(results[2].as_ref().unwrap().prefix_len, 23);
        assert_eq!(
            results[3].as_ref().unwrap_err(),
            &CidrError::HostCountOutOfRange { hosts: 4294967295 }
        );
        assert_eq!(results[4].as_ref().unwrap().prefix_len, 18);
    }
}
