//! Error types for CIDR parsing and arithmetic.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Invalid CIDR string: {input} ({reason})")]
    InvalidCidr { input: String, reason: String },

    #[error("Invalid IP string: {input}")]
    InvalidAddress { input: String },

    #[error("IPv6 is not supported: {input}")]
    Ipv6Unsupported { input: String },

    #[error("Invalid host count: {input}")]
    InvalidHostCount { input: String },

    #[error("number too large: {hosts} hosts do not fit in any IPv4 network")]
    HostCountOutOfRange { hosts: u64 },

    #[error("Network length is too long: /{len}")]
    PrefixTooLong { len: u8 },
}

pub type Result<T> = std::result::Result<T, CidrError>;
