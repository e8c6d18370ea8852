//! log4rs setup.
//!
//! Either a user-supplied YAML config, or a stderr console appender whose
//! level follows the `-v` count. Nothing is logged to stdout.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";
const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

/// Root level for a given number of `-v` flags.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Build the default stderr config.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))?;
    Ok(config)
}

/// Install the global logger.
///
/// # Arguments
/// * `verbose` - Number of `-v` flags
/// * `config_file` - Optional log4rs YAML file, takes precedence over `verbose`
pub fn init_logging(verbose: u8, config_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match config_file {
        Some(file) => {
            log4rs::init_file(file, Default::default())
                .map_err(|e| format!("Error initializing log4rs from {}: {e}", file.display()))?;
            log::debug!("Logging configured from {}", file.display());
        }
        None => {
            log4rs::init_config(stderr_config(level_for_verbosity(verbose))?)?;
        }
    }
    Ok(())
}
