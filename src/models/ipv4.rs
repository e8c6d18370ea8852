//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] prefix type (an address plus a prefix length) along
//! with the bit arithmetic behind it: netmasks, network and broadcast
//! addresses, membership and overlap.

use super::class::AddressClass;
use super::hosts::block_size;
use crate::error::{CidrError, Result};
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixTooLong { len })
    } else {
        Ok(prefix_mask(len))
    }
}

/// Mask for a length already known to be at most [`MAX_LENGTH`].
fn prefix_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    // u64 so that a shift by 32 (len 0) is defined.
    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
///
/// The host bits of `addr` are cleared first, so an unmasked address gives
/// the same answer as its network address.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | !mask;
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Parse a single IPv4 address, rejecting IPv6 with a dedicated error.
pub fn parse_addr(input: &str) -> Result<Ipv4Addr> {
    let trimmed = input.trim();
    if trimmed.contains(':') {
        return Err(CidrError::Ipv6Unsupported {
            input: input.to_string(),
        });
    }
    trimmed.parse().map_err(|_| CidrError::InvalidAddress {
        input: input.to_string(),
    })
}

/// IPv4 address with CIDR notation support.
///
/// The address is kept as given; host bits are not cleared until
/// [`Ipv4::network`] (or any derived value) is asked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let invalid = |reason: &str| CidrError::InvalidCidr {
            input: addr_cidr.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = addr_cidr.trim();
        let (addr, len) = trimmed
            .split_once('/')
            .ok_or_else(|| invalid("missing prefix length"))?;

        if addr.contains(':') {
            return Err(CidrError::Ipv6Unsupported {
                input: addr_cidr.to_string(),
            });
        }
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| invalid(&format!("invalid address {addr}")))?;

        if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(&format!("invalid prefix length {len}")));
        }
        if len.len() > 1 && len.starts_with('0') {
            return Err(invalid(&format!("prefix length {len} has a leading zero")));
        }
        match len.parse::<u8>() {
            Ok(mask) if mask <= MAX_LENGTH => Ok(Ipv4 { addr, mask }),
            _ => Err(invalid(&format!("prefix length {len} out of range"))),
        }
    }

    /// Build a prefix from an address and a prefix length.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4> {
        if mask > MAX_LENGTH {
            return Err(CidrError::PrefixTooLong { len: mask });
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    fn mask_bits(&self) -> u32 {
        // mask <= MAX_LENGTH is enforced by every constructor
        prefix_mask(self.mask)
    }

    /// The netmask as a dotted quad, e.g. 255.255.255.240 for /28.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    /// The prefix with host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// Legacy class of the network address.
    pub fn class(&self) -> AddressClass {
        AddressClass::of(self.lo())
    }

    /// Total number of addresses in the block, network and broadcast included.
    pub fn total(&self) -> u64 {
        block_size(self.mask)
    }

    /// True if `addr` lies between the network and broadcast addresses.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }

    /// True if the two blocks share at least one address.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(28).unwrap(), 0xFFFFFFF0);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(
            get_cidr_mask(33).unwrap_err(),
            CidrError::PrefixTooLong { len: 33 }
        );
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
        assert!(broadcast_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_uses_masked_base() {
        let unmasked = Ipv4Addr::new(10, 10, 10, 124);
        assert_eq!(
            broadcast_addr(unmasked, 28).unwrap(),
            Ipv4Addr::new(10, 10, 10, 127)
        );
        let ipv4 = Ipv4::new("10.10.10.124/28").unwrap();
        assert_eq!(ipv4.hi(), Ipv4Addr::new(10, 10, 10, 127));
        assert_eq!(ipv4.lo(), Ipv4Addr::new(10, 10, 10, 112));
    }

    #[test]
    fn test_new_keeps_unmasked_addr() {
        let ipv4 = Ipv4::new(" 10.10.10.124/28 ").unwrap();
        assert_eq!(ipv4.addr(), Ipv4Addr::new(10, 10, 10, 124));
        assert_eq!(ipv4.mask(), 28);
        assert_eq!(ipv4.to_string(), "10.10.10.124/28");
        assert_eq!(ipv4.network().to_string(), "10.10.10.112/28");
        assert_eq!(ipv4.netmask(), Ipv4Addr::new(255, 255, 255, 240));
        assert_eq!(ipv4.total(), 16);
    }

    #[test]
    fn test_new_rejects_bad_input() {
        for bad in [
            "10.10.10.0",
            "10.10.10.0/",
            "10.10.10.0/33",
            "10.10.10.0/+8",
            "10.10.10.0/-1",
            "10.10.10.0/999",
            "10.0.0.0/08",
            "10.0.0.0/00",
            "10.10.10/8",
            "10.10.10.256/8",
            "010.10.10.0/8",
            "hello/8",
        ] {
            match Ipv4::new(bad) {
                Err(CidrError::InvalidCidr { input, .. }) => assert_eq!(input, bad),
                other => panic!("expected InvalidCidr for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_new_rejects_ipv6() {
        assert_eq!(
            Ipv4::new("2001:db8::/32").unwrap_err(),
            CidrError::Ipv6Unsupported {
                input: "2001:db8::/32".to_string()
            }
        );
    }

    #[test]
    fn test_new_accepts_single_zero_length() {
        let ipv4 = Ipv4::new("10.0.0.0/0").unwrap();
        assert_eq!(ipv4.mask(), 0);
        assert_eq!(ipv4.netmask(), Ipv4Addr::UNSPECIFIED);
    }

    #[test]
    fn test_lo_hi_agree_with_free_functions() {
        let addr = Ipv4Addr::new(172, 31, 200, 77);
        for len in 0..=MAX_LENGTH {
            let ipv4 = Ipv4::from_parts(addr, len).unwrap();
            assert_eq!(ipv4.lo(), cut_addr(addr, len).unwrap(), "/{len}");
            assert_eq!(ipv4.hi(), broadcast_addr(addr, len).unwrap(), "/{len}");
            assert_eq!(u32::from(ipv4.netmask()), get_cidr_mask(len).unwrap(), "/{len}");
            assert_eq!(ipv4.total(), 1u64 << (MAX_LENGTH - len), "/{len}");
        }
    }

    #[test]
    fn test_from_str() {
        let ipv4: Ipv4 = "192.168.0.0/16".parse().unwrap();
        assert_eq!(ipv4, Ipv4::from_parts(Ipv4Addr::new(192, 168, 0, 0), 16).unwrap());
        assert!(Ipv4::from_parts(Ipv4Addr::new(192, 168, 0, 0), 40).is_err());
    }

    #[test]
    fn test_parse_addr() {
        assert_eq!(
            parse_addr("10.20.10.10").unwrap(),
            Ipv4Addr::new(10, 20, 10, 10)
        );
        assert_eq!(
            parse_addr("10.20.10").unwrap_err(),
            CidrError::InvalidAddress {
                input: "10.20.10".to_string()
            }
        );
        assert!(matches!(
            parse_addr("::1"),
            Err(CidrError::Ipv6Unsupported { .. })
        ));
    }

    #[test]
    fn test_contains() {
        let ipv4 = Ipv4::new("10.10.10.0/8").unwrap();
        assert!(ipv4.contains(Ipv4Addr::new(10, 20, 10, 10)));
        assert!(ipv4.contains(Ipv4Addr::new(10, 0, 0, 0)));
        assert!(ipv4.contains(Ipv4Addr::new(10, 255, 255, 255)));
        assert!(!ipv4.contains(Ipv4Addr::new(11, 20, 10, 10)));
        assert!(!ipv4.contains(Ipv4Addr::new(9, 255, 255, 255)));
    }

    #[test]
    fn test_contains_own_bounds() {
        for cidr in ["0.0.0.0/0", "10.10.10.124/28", "192.168.1.1/32", "172.16.5.4/12"] {
            let ipv4 = Ipv4::new(cidr).unwrap();
            assert!(ipv4.contains(ipv4.lo()), "{cidr} should contain its network");
            assert!(ipv4.contains(ipv4.hi()), "{cidr} should contain its broadcast");
        }
    }

    #[test]
    fn test_overlaps() {
        let a = Ipv4::new("10.10.10.124/28").unwrap();
        let b = Ipv4::new("10.10.10.127/29").unwrap();
        let c = Ipv4::new("10.10.10.128/25").unwrap();
        let wide = Ipv4::new("10.10.10.0/8").unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
        assert!(wide.overlaps(&wide));
        assert!(wide.overlaps(&c));
        assert!(c.overlaps(&wide));
    }

    #[test]
    fn test_overlaps_adjacent_blocks() {
        let lower = Ipv4::new("10.0.0.0/24").unwrap();
        let upper = Ipv4::new("10.0.1.0/24").unwrap();
        assert!(!lower.overlaps(&upper));
        assert!(!upper.overlaps(&lower));
    }

    #[test]
    fn test_serialize() {
        let ipv4 = Ipv4::new("10.10.10.112/28").unwrap();
        assert_eq!(serde_json::to_string(&ipv4).unwrap(), "\"10.10.10.112/28\"");
    }
}
