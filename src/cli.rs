//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generate::{ParamsConfig, ScopeConfig};

/// Top-level CLI parser for `dimgen`.
#[derive(Debug, Parser)]
#[command(name = "dimgen", version, about = "Generate random IFJ17 test snippets")]
pub struct Cli {
    /// Seed the random source so output is reproducible.
    #[arg(long, global = true, env = "DIMGEN_SEED", conflicts_with = "replay")]
    pub seed: Option<u64>,

    /// Replay random draws from a recorded cassette file.
    #[arg(long, global = true, env = "DIMGEN_REPLAY", value_name = "PATH")]
    pub replay: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Emit a scope block of random `dim` declarations.
    Scope(ScopeArgs),
    /// Emit a benchmark calling a function with many parameters.
    Params(ParamsArgs),
}

/// Options for `dimgen scope`.
#[derive(Debug, Args)]
pub struct ScopeArgs {
    /// Number of declarations.
    #[arg(long, default_value_t = 1000)]
    pub count: usize,
    /// Length of each identifier.
    #[arg(long, default_value_t = 30)]
    pub length: usize,
    /// Upper bound of the selection draw.
    #[arg(long, default_value_t = 50)]
    pub odds: u32,
    /// Draw value that moves the selection.
    #[arg(long, default_value_t = 20)]
    pub hit: u32,
}

impl From<&ScopeArgs> for ScopeConfig {
    fn from(args: &ScopeArgs) -> Self {
        Self { count: args.count, length: args.length, odds: args.odds, hit: args.hit }
    }
}

/// Options for `dimgen params`.
#[derive(Debug, Args)]
pub struct ParamsArgs {
    /// Number of function parameters.
    #[arg(long, default_value_t = 50)]
    pub count: usize,
}

impl From<&ParamsArgs> for ParamsConfig {
    fn from(args: &ParamsArgs) -> Self {
        Self { count: args.count }
    }
}
