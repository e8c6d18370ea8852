//! Host capacity of a prefix and the smallest prefix for a host count.

use super::ipv4::MAX_LENGTH;
use crate::error::{CidrError, Result};

/// Total number of addresses in a block of the given prefix length.
///
/// Network and broadcast addresses are included, so a /28 gives 16.
pub fn capacity(len: u8) -> Result<u64> {
    if len > MAX_LENGTH {
        return Err(CidrError::PrefixTooLong { len });
    }
    Ok(block_size(len))
}

/// Block size for a length already known to be at most [`MAX_LENGTH`].
pub(super) fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len)
}

/// Longest prefix length whose block holds `hosts` hosts plus the network
/// and broadcast addresses: `32 - ceil(log2(hosts + 2))`.
///
/// Counts that would need a /0 or wider fail with
/// [`CidrError::HostCountOutOfRange`].
pub fn minimal_prefix_len(hosts: u64) -> Result<u8> {
    let needed = hosts
        .checked_add(2)
        .ok_or(CidrError::HostCountOutOfRange { hosts })?;
    let host_bits = ceil_log2(needed);
    if host_bits >= u32::from(MAX_LENGTH) {
        return Err(CidrError::HostCountOutOfRange { hosts });
    }
    Ok(MAX_LENGTH - host_bits as u8)
}

fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}
