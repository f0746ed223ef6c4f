//! Command dispatch and handlers.

pub mod params;
pub mod scope;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::context::ServiceContext;

/// Env var naming a directory to record random draws into.
pub const RECORD_ENV: &str = "DIMGEN_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `DIMGEN_RECORD` is set to a directory path, every random draw is
/// recorded to a cassette file in that directory.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = base_context(cli)?;
    let (ctx, session) = match env::var(RECORD_ENV) {
        Ok(dir) if !dir.is_empty() => {
            let (ctx, session) = ctx.recording_at(&PathBuf::from(dir))?;
            (ctx, Some(session))
        }
        _ => (ctx, None),
    };

    let result = dispatch_with_context(&cli.command, &ctx);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        return merge_errors(result, finish_recording(session));
    }

    result
}

/// Keep the command's own error when the recording also fails.
fn merge_errors(
    command: Result<(), String>,
    recording: Result<(), String>,
) -> Result<(), String> {
    match (command, recording) {
        (Err(command), Err(recording)) => Err(format!("{command}\n{recording}")),
        (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
        (Ok(()), Ok(())) => Ok(()),
    }
}

/// Pick the random source named by the global options.
fn base_context(cli: &Cli) -> Result<ServiceContext, String> {
    if let Some(path) = &cli.replay {
        tracing::debug!(path = %path.display(), "replaying random draws");
        ServiceContext::replaying(path)
    } else if let Some(seed) = cli.seed {
        tracing::debug!(seed, "using seeded random source");
        Ok(ServiceContext::seeded(seed))
    } else {
        Ok(ServiceContext::live())
    }
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    match command {
        Command::Scope(args) => scope::run_with_context(ctx, &args.into(), &mut out),
        Command::Params(args) => params::run_with_context(ctx, &args.into(), &mut out),
    }
}

/// Finish a recording session and log where the cassette went.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let path = session.finish()?;
    tracing::info!(path = %path.display(), "recording saved");
    Ok(())
}
