//! `dimgen params` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::generate::{emit_params, ParamsConfig};

/// Execute the `params` command, writing the benchmark program to `out`.
///
/// # Errors
///
/// Returns an error string if the config is invalid, the expression cannot
/// be drawn without overflow, or writing fails.
pub fn run_with_context<W: Write>(
    ctx: &ServiceContext,
    config: &ParamsConfig,
    out: &mut W,
) -> Result<(), String> {
    let benchmark = emit_params(ctx.random.as_ref(), config, out).map_err(|e| e.to_string())?;
    tracing::debug!(count = config.count, expected = benchmark.expected, "benchmark written");
    Ok(())
}
