//! Cassette format for recording and replaying random draws.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
