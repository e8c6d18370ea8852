//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// IPv4 CIDR calculator
///
/// Network metadata, netmask sizing, membership and overlap checks for
/// IPv4 prefixes.
#[derive(Debug, Parser)]
#[command(name = "cidr")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// log4rs YAML configuration file, replaces the built-in stderr logger
    #[arg(long = "log-config", value_name = "FILE", global = true)]
    pub log_config: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show network metadata from CIDR
    #[command(after_help = "Example:\n  $ cidr calc 10.10.10.124/28\n  \
        Network:      10.10.10.112/28 (Class A)\n  \
        Netmask:      255.255.255.240\n  \
        First:        10.10.10.112\n  \
        Last:         10.10.10.127\n  \
        Total Hosts:  16")]
    Calc {
        /// Prefix in <address>/<length> form
        #[arg(value_name = "CIDR")]
        cidr: String,
    },

    /// Calculate the network mask needed to fit a number of hosts
    #[command(after_help = "Example:\n  $ cidr mask 200 390 12300\n  \
        netmask for 200 hosts is /24\n  \
        netmask for 390 hosts is /23\n  \
        netmask for 12300 hosts is /18")]
    Mask {
        /// Host counts, processed in order
        #[arg(value_name = "HOST_COUNT", required = true, allow_negative_numbers = true)]
        hosts: Vec<String>,
    },

    /// Check if a list of IPs are contained within a given CIDR
    #[command(after_help = "Example:\n  $ cidr contains 10.10.10.0/8 10.20.10.10 11.20.10.10\n  \
        10.20.10.10   : true\n  \
        11.20.10.10   : false")]
    Contains {
        /// Prefix in <address>/<length> form
        #[arg(value_name = "CIDR")]
        cidr: String,

        /// Addresses to check, processed in order
        #[arg(value_name = "IP")]
        ips: Vec<String>,
    },

    /// Determine if two CIDRs overlap by sharing some IPs
    #[command(after_help = "Example:\n  $ cidr overlap 10.10.10.124/28 10.10.10.127/29\n  true")]
    Overlap {
        #[arg(value_name = "CIDR")]
        first: String,

        #[arg(value_name = "CIDR")]
        second: String,
    },
}
