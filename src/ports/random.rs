//! Random source port for every draw the generators make.

/// Produces uniformly distributed integers.
///
/// Abstracting randomness allows deterministic output by substituting a
/// seeded generator or a recorded sequence of draws during tests and
/// cassette playback.
pub trait RandomSource: Send + Sync {
    /// Returns an integer drawn uniformly from the inclusive range `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn draw(&self, low: u32, high: u32) -> u32;
}
