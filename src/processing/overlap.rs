//! Overlap detection between two prefixes.
//!
//! Two prefixes overlap when their address ranges share at least one
//! address. Identical prefixes overlap, as does a prefix and any block
//! nested inside it.

use super::calc::{calc, NetworkSummary};
use crate::models::Ipv4;
use serde::Serialize;

/// Result of comparing two prefixes, with both networks described.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapReport {
    pub overlaps: bool,
    pub first: NetworkSummary,
    pub second: NetworkSummary,
}

/// Compare two prefixes.
///
/// # Arguments
/// * `first` - The first prefix, host bits allowed
/// * `second` - The second prefix, host bits allowed
///
/// # Returns
/// An [`OverlapReport`]; `overlaps` is the same whichever order is used.
pub fn find_overlap(first: &Ipv4, second: &Ipv4) -> OverlapReport {
    let overlaps = first.overlaps(second);
    if overlaps {
        log::info!(
            "{} ({} - {}) overlaps {} ({} - {})",
            first.network(),
            first.lo(),
            first.hi(),
            second.network(),
            second.lo(),
            second.hi()
        );
    } else {
        log::debug!("No overlap between {} and {}", first.network(), second.network());
    }
    OverlapReport {
        overlaps,
        first: calc(first),
        second: calc(second),
    }
}
