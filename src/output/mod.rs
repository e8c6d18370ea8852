//! Output formatting for command results.
//!
//! - [`terminal`] - tab-separated text with optional colors
//! - [`json`] - JSON documents

mod json;
mod terminal;

pub use json::{batch_to_json, write_json};
pub use terminal::{format_bool, write_mask, write_membership, write_overlap, write_summary};
