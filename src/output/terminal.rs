//! Terminal output.
//!
//! Tab-separated, human-readable lines. Booleans are colored when the
//! caller asks for it.

use crate::processing::{MaskResult, Membership, NetworkSummary, OverlapReport};
use colored::Colorize;
use std::io::{self, Write};

/// Format a boolean, green for true and red for false when `color` is set.
pub fn format_bool(value: bool, color: bool) -> String {
    match (value, color) {
        (true, true) => "true".green().to_string(),
        (false, true) => "false".red().to_string(),
        _ => value.to_string(),
    }
}

/// Print the `calc` block for one network.
pub fn write_summary<W: Write + ?Sized>(w: &mut W, summary: &NetworkSummary) -> io::Result<()> {
    writeln!(w, "Network:\t{} ({})", summary.network, summary.class)?;
    writeln!(w, "Netmask:\t{}", summary.netmask)?;
    writeln!(w, "First:\t\t{}", summary.first)?;
    writeln!(w, "Last:\t\t{}", summary.last)?;
    writeln!(w, "Total Hosts:\t{}", summary.total)
}

pub fn write_mask<W: Write + ?Sized>(w: &mut W, result: &MaskResult) -> io::Result<()> {
    writeln!(
        w,
        "netmask for {} hosts is /{}",
        result.hosts, result.prefix_len
    )
}

pub fn write_membership<W: Write + ?Sized>(
    w: &mut W,
    membership: &Membership,
    color: bool,
) -> io::Result<()> {
    writeln!(
        w,
        "{}\t: {}",
        membership.address,
        format_bool(membership.contained, color)
    )
}

/// Print the overlap verdict followed by the `calc` block of each prefix.
pub fn write_overlap<W: Write + ?Sized>(
    w: &mut W,
    report: &OverlapReport,
    color: bool,
) -> io::Result<()> {
    writeln!(w, "{}", format_bool(report.overlaps, color))?;
    writeln!(w)?;
    write_summary(w, &report.first)?;
    writeln!(w)?;
    write_summary(w, &report.second)
}
