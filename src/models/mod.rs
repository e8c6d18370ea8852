//! Domain models for CIDR arithmetic.
//!
//! - [`Ipv4`] - IPv4 prefix with network, broadcast, membership and overlap
//! - [`AddressClass`] - legacy address class of an address
//! - [`capacity`] and [`minimal_prefix_len`] - host counts per prefix length

mod class;
mod hosts;
mod ipv4;

// Re-export public types
pub use class::AddressClass;
pub use hosts::{capacity, minimal_prefix_len};
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, parse_addr, Ipv4, MAX_LENGTH};
