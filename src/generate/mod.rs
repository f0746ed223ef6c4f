//! Text generators producing IFJ17 snippets from a `RandomSource`.

pub mod identifier;
pub mod params;
pub mod scope;

pub use identifier::generate_identifier;
pub use params::{emit_params, Benchmark, ParamsConfig};
pub use scope::{emit_scope, ScopeConfig};

/// Errors raised while generating a snippet.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Writing the generated text failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Every redraw of the benchmark expression overflowed 64-bit arithmetic.
    #[error("benchmark expression overflowed 64-bit arithmetic in all {attempts} attempts")]
    Overflow {
        /// Number of draws attempted.
        attempts: u32,
    },
}
