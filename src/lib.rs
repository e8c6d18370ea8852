//! IPv4 CIDR arithmetic.
//!
//! Network and broadcast addresses, legacy address classes, netmask sizing
//! for a host count, membership and overlap checks. The `cidr` binary is a
//! thin wrapper around [`commands::run`].

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CidrError;
pub use models::Ipv4;
