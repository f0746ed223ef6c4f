//! Core library entry for the `dimgen` CLI.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod generate;
pub mod logging;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    logging::init();
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["dimgen", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_reports_invalid_scope_config() {
        let err = run(["dimgen", "scope", "--count", "0"]).unwrap_err();
        assert!(err.contains("count must be at least 1"));
    }
}
