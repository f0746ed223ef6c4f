//! Live adapters for the `RandomSource` port.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Live random source drawing from the thread-local generator.
pub struct LiveRandomSource;

impl LiveRandomSource {
    /// Creates a new live random source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for LiveRandomSource {
    fn draw(&self, low: u32, high: u32) -> u32 {
        rand::rng().random_range(low..=high)
    }
}

/// Random source seeded with a fixed value; identical seeds yield identical draws.
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Creates a random source seeded from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl RandomSource for SeededRandomSource {
    fn draw(&self, low: u32, high: u32) -> u32 {
        let mut rng = self.rng.lock().expect("seeded rng lock poisoned");
        rng.random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_draws_stay_in_range() {
        let source = LiveRandomSource::new();
        for _ in 0..500 {
            let value = source.draw(1, 50);
            assert!((1..=50).contains(&value));
        }
    }

    #[test]
    fn live_draw_of_single_value_range() {
        let source = LiveRandomSource::new();
        assert_eq!(source.draw(7, 7), 7);
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededRandomSource::new(42);
        let b = SeededRandomSource::new(42);
        let first: Vec<u32> = (0..100).map(|_| a.draw(0, 51)).collect();
        let second: Vec<u32> = (0..100).map(|_| b.draw(0, 51)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = SeededRandomSource::new(1);
        let b = SeededRandomSource::new(2);
        let first: Vec<u32> = (0..100).map(|_| a.draw(0, 51)).collect();
        let second: Vec<u32> = (0..100).map(|_| b.draw(0, 51)).collect();
        assert_ne!(first, second);
    }
}
