//! Record-replay round-trip integration test.
//!
//! 1. Run the binary with `DIMGEN_RECORD` set, capturing every draw.
//! 2. Replay the cassette with `--replay`.
//! 3. Assert the replayed output is byte-identical, twice.

use std::path::Path;
use std::process::Command;

use dimgen::cassette::format::Cassette;
use dimgen::cassette::recorder::CassetteRecorder;
use dimgen::cassette::session::RANDOM_CASSETTE;
use dimgen::context::ServiceContext;
use dimgen::generate::{emit_scope, ScopeConfig};
use serde_json::json;

fn dimgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dimgen"));
    cmd.env_remove("DIMGEN_SEED").env_remove("DIMGEN_REPLAY").env_remove("DIMGEN_RECORD");
    cmd
}

#[test]
fn recorded_scope_replays_identically() {
    let dir = std::env::temp_dir().join("dimgen_record_replay_scope");
    let _ = std::fs::remove_dir_all(&dir);

    let recorded = dimgen()
        .args(["scope", "--count", "50"])
        .env("DIMGEN_RECORD", &dir)
        .output()
        .unwrap();
    assert!(recorded.status.success());

    let cassette_path = dir.join(RANDOM_CASSETTE);
    let cassette = Cassette::load(&cassette_path).unwrap();
    // 30 alphabet draws plus one selection draw per declaration.
    assert_eq!(cassette.interactions.len(), 50 * 31);

    for _ in 0..2 {
        let replayed = dimgen()
            .args(["scope", "--count", "50", "--replay"])
            .arg(&cassette_path)
            .output()
            .unwrap();
        assert!(replayed.status.success());
        assert_eq!(replayed.stdout, recorded.stdout, "replay differs from recording");
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn recorded_params_replays_identically() {
    let dir = std::env::temp_dir().join("dimgen_record_replay_params");
    let _ = std::fs::remove_dir_all(&dir);

    let recorded = dimgen()
        .args(["--seed", "4", "params"])
        .env("DIMGEN_RECORD", &dir)
        .output()
        .unwrap();
    assert!(recorded.status.success());

    let replayed = dimgen()
        .args(["params", "--replay"])
        .arg(dir.join(RANDOM_CASSETTE))
        .output()
        .unwrap();
    assert_eq!(replayed.stdout, recorded.stdout);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replaying_a_different_shape_fails() {
    let dir = std::env::temp_dir().join("dimgen_record_replay_mismatch");
    let _ = std::fs::remove_dir_all(&dir);

    let recorded =
        dimgen().args(["scope", "--count", "2"]).env("DIMGEN_RECORD", &dir).output().unwrap();
    assert!(recorded.status.success());

    let replayed = dimgen()
        .args(["scope", "--count", "3", "--replay"])
        .arg(dir.join(RANDOM_CASSETTE))
        .output()
        .unwrap();
    assert!(!replayed.status.success());
    assert!(String::from_utf8_lossy(&replayed.stderr).contains("Cassette exhausted"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn command_error_is_kept_when_recording_also_fails() {
    let dir = std::env::temp_dir().join("dimgen_record_replay_both_fail");
    let _ = std::fs::remove_dir_all(&dir);
    // A directory where the cassette file should go makes the final write fail.
    std::fs::create_dir_all(dir.join(RANDOM_CASSETTE)).unwrap();

    let output = dimgen()
        .args(["scope", "--count", "0"])
        .env("DIMGEN_RECORD", &dir)
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("count must be at least 1"), "{stderr}");
    assert!(stderr.contains("Failed to write random cassette"), "{stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn hand_built_cassette_drives_the_selection() {
    let dir = std::env::temp_dir().join("dimgen_record_replay_hand");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("hand.cassette.yaml");

    // Two one-letter identifiers, `B` then `c`; the second selection draw hits.
    let mut recorder = CassetteRecorder::new(&path, "hand", "abc123");
    recorder.record("random", "draw", json!({"low": 0, "high": 51}), json!(27));
    recorder.record("random", "draw", json!({"low": 1, "high": 50}), json!(1));
    recorder.record("random", "draw", json!({"low": 0, "high": 51}), json!(2));
    recorder.record("random", "draw", json!({"low": 1, "high": 50}), json!(20));
    recorder.finish().unwrap();

    let ctx = ServiceContext::replaying(Path::new(&path)).unwrap();
    let config = ScopeConfig { count: 2, length: 1, ..ScopeConfig::default() };
    let mut out = Vec::new();
    let selection = emit_scope(ctx.random.as_ref(), &config, &mut out).unwrap();

    assert_eq!(selection, "c");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "scope\ndim B as integer = 0\ndim c as integer = 1\nprint c;\nend scope\n"
    );

    let _ = std::fs::remove_dir_all(&dir);
}
