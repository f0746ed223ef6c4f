//! Live adapters backed by real random number generators.

pub mod random;
