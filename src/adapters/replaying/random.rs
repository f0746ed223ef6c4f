//! Replaying adapter for the `RandomSource` port.

use std::sync::Mutex;

use super::next_interaction;
use crate::adapters::recording::random::{DrawRange, METHOD, PORT};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::RandomSource;

/// Replays recorded draws from a cassette.
pub struct ReplayingRandomSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingRandomSource {
    /// Creates a replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl RandomSource for ReplayingRandomSource {
    /// # Panics
    ///
    /// Panics when the cassette is exhausted, when the recorded draw was made
    /// over a different range than the one requested now, or when the
    /// recorded output lies outside that range.
    fn draw(&self, low: u32, high: u32) -> u32 {
        let interaction = next_interaction(&self.replayer, PORT, METHOD);
        let recorded: DrawRange = serde_json::from_value(interaction.input)
            .expect("random::draw: expected {low, high} input");
        assert!(
            recorded == DrawRange { low, high },
            "Cassette mismatch at seq={}: recorded draw over [{}, {}], requested [{low}, {high}]",
            interaction.seq,
            recorded.low,
            recorded.high,
        );
        let value = interaction.output.as_u64().expect("random::draw: expected integer output");
        assert!(
            (u64::from(low)..=u64::from(high)).contains(&value),
            "Cassette mismatch at seq={}: output {value} outside [{low}, {high}]",
            interaction.seq,
        );
        u32::try_from(value).expect("random::draw: output out of u32 range")
    }
}
