//! Random alphabetic identifiers.

use crate::ports::RandomSource;

/// Characters an identifier is drawn from, indexed by the draw.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Identifier length used when none is given.
pub const DEFAULT_LENGTH: usize = 10;

const LAST_INDEX: u32 = 51;

/// Generate an identifier of exactly `length` letters.
///
/// Each character is an independent `draw(0, 51)` into [`ALPHABET`].
pub fn generate_identifier(random: &dyn RandomSource, length: usize) -> String {
    (0..length).map(|_| char::from(ALPHABET[random.draw(0, LAST_INDEX) as usize])).collect()
}
