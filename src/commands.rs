//! Command dispatch.
//!
//! Maps a parsed [`Commands`] value to its processing function and writes
//! the result in the requested format. Output and diagnostics go to the
//! writers passed in, so the whole command surface can be driven from tests.

use crate::cli::{Commands, OutputFormat};
use crate::error::CidrError;
use crate::models::Ipv4;
use crate::output;
use crate::processing::{calc, cidr_contains, find_overlap, masks_for_inputs};
use itertools::Itertools;
use serde_json::json;
use std::error::Error;
use std::io::Write;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::Text,
            color: false,
        }
    }
}

/// How a command finished when it did not abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Some batch items were rejected; the rest were still printed.
    PartialFailure { failed: usize },
}

/// Run one command.
///
/// # Returns
/// * `Ok(Outcome)` - The command ran; batch item failures are counted
/// * `Err` - A required CIDR argument was invalid, or writing failed
pub fn run(
    command: &Commands,
    settings: &OutputSettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome, Box<dyn Error>> {
    log::debug!("run({command:?})");
    match command {
        Commands::Calc { cidr } => run_calc(cidr, settings, out),
        Commands::Mask { hosts } => run_mask(hosts, settings, out, err),
        Commands::Contains { cidr, ips } => run_contains(cidr, ips, settings, out, err),
        Commands::Overlap { first, second } => run_overlap(first, second, settings, out),
    }
}

fn parse_cidr(input: &str) -> Result<Ipv4, CidrError> {
    Ipv4::new(input).map_err(|e| {
        log::debug!("Rejected CIDR argument {input:?}");
        e
    })
}

/// Print the diagnostic of each failed item and count them.
fn report_failures<T>(
    results: &[Result<T, CidrError>],
    err: &mut dyn Write,
) -> Result<Outcome, Box<dyn Error>> {
    let failures: Vec<&CidrError> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    for e in &failures {
        writeln!(err, "{e}")?;
    }
    if failures.is_empty() {
        Ok(Outcome::Success)
    } else {
        log::info!(
            "{} of {} item(s) failed: {}",
            failures.len(),
            results.len(),
            failures.iter().join("; ")
        );
        Ok(Outcome::PartialFailure {
            failed: failures.len(),
        })
    }
}

fn run_calc(
    cidr: &str,
    settings: &OutputSettings,
    out: &mut dyn Write,
) -> Result<Outcome, Box<dyn Error>> {
    let summary = calc(&parse_cidr(cidr)?);
    match settings.format {
        OutputFormat::Text => output::write_summary(out, &summary)?,
        OutputFormat::Json => output::write_json(out, &summary)?,
    }
    Ok(Outcome::Success)
}

fn run_mask(
    hosts: &[String],
    settings: &OutputSettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome, Box<dyn Error>> {
    let results = masks_for_inputs(hosts);
    match settings.format {
        OutputFormat::Text => {
            for result in results.iter().flatten() {
                output::write_mask(out, result)?;
            }
        }
        OutputFormat::Json => output::write_json(out, &output::batch_to_json(&results)?)?,
    }
    report_failures(&results, err)
}

fn run_contains(
    cidr: &str,
    ips: &[String],
    settings: &OutputSettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome, Box<dyn Error>> {
    let prefix = parse_cidr(cidr)?;
    let results = cidr_contains(&prefix, ips);
    match settings.format {
        OutputFormat::Text => {
            for membership in results.iter().flatten() {
                output::write_membership(out, membership, settings.color)?;
            }
        }
        OutputFormat::Json => {
            let doc = json!({
                "network": prefix.network(),
                "results": output::batch_to_json(&results)?,
            });
            output::write_json(out, &doc)?;
        }
    }
    report_failures(&results, err)
}

fn run_overlap(
    first: &str,
    second: &str,
    settings: &OutputSettings,
    out: &mut dyn Write,
) -> Result<Outcome, Box<dyn Error>> {
    let first = parse_cidr(first)?;
    let second = parse_cidr(second)?;
    let report = find_overlap(&first, &second);
    match settings.format {
        OutputFormat::Text => output::write_overlap(out, &report, settings.color)?,
        OutputFormat::Json => output::write_json(out, &report)?,
    }
    Ok(Outcome::Success)
}
