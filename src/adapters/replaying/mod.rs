//! Replaying adapters that replay recorded interactions.

pub mod random;

use std::sync::Mutex;

use crate::cassette::format::Interaction;
use crate::cassette::replayer::CassetteReplayer;

pub use random::ReplayingRandomSource;

/// Take the next recorded interaction for `port::method` from a shared replayer.
pub(crate) fn next_interaction(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Interaction {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).clone()
}
