//! CIDR processing, one module per command.
//!
//! - [`calc`] - network metadata of a prefix
//! - [`mask`] - smallest netmask per host count
//! - [`contains`] - address membership
//! - [`overlap`] - prefix intersection

mod calc;
mod contains;
mod mask;
mod overlap;

// Re-export public functions
pub use calc::{calc, NetworkSummary};
pub use contains::{cidr_contains, Membership};
pub use mask::{mask_for_hosts, masks_for_inputs, parse_host_count, MaskResult};
pub use overlap::{find_overlap, OverlapReport};
