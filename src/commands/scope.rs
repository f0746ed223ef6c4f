//! `dimgen scope` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::generate::{emit_scope, ScopeConfig};

/// Execute the `scope` command, writing the block to `out`.
///
/// # Errors
///
/// Returns an error string if the config is invalid or writing fails.
pub fn run_with_context<W: Write>(
    ctx: &ServiceContext,
    config: &ScopeConfig,
    out: &mut W,
) -> Result<(), String> {
    tracing::debug!(?config, "emitting scope block");
    let selection = emit_scope(ctx.random.as_ref(), config, out).map_err(|e| e.to_string())?;
    tracing::debug!(%selection, "scope block written");
    Ok(())
}
