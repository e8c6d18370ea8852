use cidr_calc::cli::{Cli, OutputFormat};
use cidr_calc::commands::{self, Outcome, OutputSettings};
use cidr_calc::logging::init_logging;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// Application exit codes. Usage errors exit with 2 from clap itself.
mod exit_code {
    use std::process::ExitCode;

    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Invalid CIDR, address or host count.
    pub const INVALID_INPUT: ExitCode = ExitCode::FAILURE;
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse_args();

    if let Err(e) = init_logging(cli.verbose, cli.log_config.as_deref()) {
        eprintln!("Error initializing logging: {e}");
        return exit_code::INVALID_INPUT;
    }
    log::info!("#Start main() {:?}", cli.command);

    let settings = OutputSettings {
        format: cli.format,
        color: !cli.no_color && cli.format == OutputFormat::Text && io::stdout().is_terminal(),
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match commands::run(&cli.command, &settings, &mut out, &mut err) {
        Ok(Outcome::Success) => exit_code::SUCCESS,
        Ok(Outcome::PartialFailure { failed }) => {
            log::info!("{failed} input(s) rejected");
            exit_code::INVALID_INPUT
        }
        Err(e) => {
            eprintln!("{e}");
            exit_code::INVALID_INPUT
        }
    }
}
