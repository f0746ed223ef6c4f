//! Recording session owning the cassette recorder for a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the random-draw cassette inside a session directory.
pub const RANDOM_CASSETTE: &str = "random.cassette.yaml";

/// Manages the `CassetteRecorder` for a recording session.
///
/// Draws are written to `<dir>/random.cassette.yaml` when the session finishes.
pub struct RecordingSession {
    /// Recorder for random draws.
    pub random: Arc<Mutex<CassetteRecorder>>,
    output_path: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session writing into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: &Path) -> Result<Self, String> {
        std::fs::create_dir_all(dir).map_err(|e| {
            format!("Failed to create cassette directory {}: {e}", dir.display())
        })?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_path = dir.join(RANDOM_CASSETTE);
        let recorder =
            CassetteRecorder::new(&output_path, format!("{timestamp}-random"), get_commit_hash());

        Ok(Self { random: Arc::new(Mutex::new(recorder)), output_path })
    }

    /// Path the cassette will be written to.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Finish the recorder and write the cassette file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a recording adapter is still alive or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.random)
            .map_err(|_| "Recording adapter for random still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for random poisoned: {e}"))?;
        tracing::debug!(draws = recorder.len(), "writing random cassette");
        recorder.finish().map_err(|e| format!("Failed to write random cassette: {e}"))
    }
}

/// Get the current git commit hash, or "unknown" with a warning if unavailable.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    hash.unwrap_or_else(|| {
        tracing::warn!("could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    })
}
