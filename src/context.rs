//! Service context bundling the port trait objects a command runs against.

use std::path::Path;

use crate::adapters::live::random::{LiveRandomSource, SeededRandomSource};
use crate::adapters::recording::RecordingRandomSource;
use crate::adapters::replaying::ReplayingRandomSource;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::RandomSource;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, seeded,
/// replaying, recording).
pub struct ServiceContext {
    /// Source of every random draw.
    pub random: Box<dyn RandomSource>,
}

impl ServiceContext {
    /// Creates a live context drawing from the thread-local generator.
    #[must_use]
    pub fn live() -> Self {
        Self { random: Box::new(LiveRandomSource::new()) }
    }

    /// Creates a context whose draws are fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { random: Box::new(SeededRandomSource::new(seed)) }
    }

    /// Creates a replaying context serving draws from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self { random: Box::new(ReplayingRandomSource::new(CassetteReplayer::new(&cassette))) })
    }

    /// Wraps this context's random source so every draw is recorded into a
    /// cassette under `dir`.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(self, dir: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(dir)?;
        let random = RecordingRandomSource::new(self.random, session.random.clone());
        Ok((Self { random: Box::new(random) }, session))
    }
}
