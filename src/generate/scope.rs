//! Scope block emitter: `count` random `dim` declarations and a `print`
//! of one selected name.

use std::io::Write;

use super::identifier::generate_identifier;
use super::GenerateError;
use crate::ports::RandomSource;

/// Parameters of a generated scope block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeConfig {
    /// Number of `dim` lines.
    pub count: usize,
    /// Length of each identifier.
    pub length: usize,
    /// Upper bound of the selection draw `draw(1, odds)`.
    pub odds: u32,
    /// Draw value that moves the selection to the current identifier.
    pub hit: u32,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self { count: 1000, length: 30, odds: 50, hit: 20 }
    }
}

impl ScopeConfig {
    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.count == 0 {
            return Err(GenerateError::InvalidConfig("count must be at least 1".into()));
        }
        if self.length == 0 {
            return Err(GenerateError::InvalidConfig("length must be at least 1".into()));
        }
        if self.odds == 0 {
            return Err(GenerateError::InvalidConfig("odds must be at least 1".into()));
        }
        if !(1..=self.odds).contains(&self.hit) {
            return Err(GenerateError::InvalidConfig(format!(
                "hit must be between 1 and {} (got {})",
                self.odds, self.hit
            )));
        }
        Ok(())
    }
}

/// Write a scope block to `out` and return the selected identifier.
///
/// Per iteration the source sees `length` alphabet draws followed by one
/// `draw(1, odds)`. The selection starts at the first identifier and moves to
/// the current one whenever that draw equals `hit`.
///
/// # Errors
///
/// Returns an error if the config is invalid or writing fails.
pub fn emit_scope<W: Write>(
    random: &dyn RandomSource,
    config: &ScopeConfig,
    out: &mut W,
) -> Result<String, GenerateError> {
    config.validate()?;

    writeln!(out, "scope")?;
    let (mut selection, _) = declare(random, config, out, 0)?;
    for i in 1..config.count {
        let (identifier, hit) = declare(random, config, out, i)?;
        if hit {
            selection = identifier;
        }
    }

    writeln!(out, "print {selection};")?;
    writeln!(out, "end scope")?;
    out.flush()?;

    Ok(selection)
}

/// Write the `dim` line for index `i` and report whether its selection draw hit.
fn declare<W: Write>(
    random: &dyn RandomSource,
    config: &ScopeConfig,
    out: &mut W,
    i: usize,
) -> Result<(String, bool), GenerateError> {
    let identifier = generate_identifier(random, config.length);
    writeln!(out, "dim {identifier} as integer = {i}")?;
    let hit = random.draw(1, config.odds) == config.hit;
    Ok((identifier, hit))
}
