//! Port traits defining external boundaries.
//!
//! The generators only cross one boundary: the source of randomness.
//! Implementations live in `src/adapters/`.

pub mod random;

pub use random::RandomSource;
