//! Recording adapter for the `RandomSource` port.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::RandomSource;

/// Cassette port name for random draws.
pub const PORT: &str = "random";
/// Cassette method name for a single draw.
pub const METHOD: &str = "draw";

/// Recorded input of a single draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawRange {
    /// Inclusive lower bound.
    pub low: u32,
    /// Inclusive upper bound.
    pub high: u32,
}

/// Records every draw while delegating to an inner source.
pub struct RecordingRandomSource {
    inner: Box<dyn RandomSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRandomSource {
    /// Creates a recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn RandomSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl RandomSource for RecordingRandomSource {
    fn draw(&self, low: u32, high: u32) -> u32 {
        let value = self.inner.draw(low, high);
        record_interaction(&self.recorder, PORT, METHOD, &DrawRange { low, high }, &value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::random::SeededRandomSource;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_each_draw_with_its_range() {
        let dir = std::env::temp_dir().join("dimgen_rec_random_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("random.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));

        // Scope the adapter so it's dropped before we try to unwrap
        let draws = {
            let source = RecordingRandomSource::new(
                Box::new(SeededRandomSource::new(9)),
                Arc::clone(&recorder),
            );
            vec![source.draw(0, 51), source.draw(1, 50)]
        };

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].port, PORT);
        assert_eq!(cassette.interactions[0].method, METHOD);
        assert_eq!(cassette.interactions[0].input, serde_json::json!({"low": 0, "high": 51}));
        assert_eq!(cassette.interactions[0].output, serde_json::json!(draws[0]));
        assert_eq!(cassette.interactions[1].input, serde_json::json!({"low": 1, "high": 50}));
        assert_eq!(cassette.interactions[1].output, serde_json::json!(draws[1]));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
