//! Binary entrypoint for the `dimgen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Settings may come from a .env file; a missing file is fine.
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => eprintln!("Warning: failed to load .env: {err}"),
        _ => {}
    }
    // Recording is handled in commands::dispatch via DIMGEN_RECORD=<dir>.
    match dimgen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
