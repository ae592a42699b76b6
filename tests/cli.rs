//! Integration tests driving the alogidx binary end to end.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const SAMPLE: &str = include_str!("fixtures/sample.alog");

/// Create an isolated directory holding a copy of the sample log
fn setup_fixture() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create fixture dir");
    let raw = dir.path().join("sample.alog");
    fs::write(&raw, SAMPLE).expect("Failed to write fixture log");
    (dir, raw)
}

/// Run alogidx with given args; returns (stdout, stderr, success)
fn run_alogidx(args: &[&str], config_home: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_alogidx"))
        .args(args)
        .arg("--no-color")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run alogidx");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn index(raw: &Path, home: &Path) {
    let (stdout, stderr, ok) = run_alogidx(&["index", "--force", raw.to_str().unwrap()], home);
    assert!(ok, "alogidx index failed: {}\nstdout: {}", stderr, stdout);
}

#[test]
fn test_index_writes_sibling_file() {
    let (dir, raw) = setup_fixture();
    index(&raw, dir.path());

    assert!(dir.path().join("sample.alog.idx").exists());
}

#[test]
fn test_index_no_clobber() {
    let (dir, raw) = setup_fixture();
    index(&raw, dir.path());

    let (_, stderr, ok) = run_alogidx(&["index", "--no-clobber", raw.to_str().unwrap()], dir.path());
    assert!(!ok);
    assert!(stderr.contains("cannot open") && stderr.contains("for writing"), "{}", stderr);
}

#[test]
fn test_seek_prints_first_line_at_time() {
    let (dir, raw) = setup_fixture();
    index(&raw, dir.path());

    let (stdout, _, ok) = run_alogidx(
        &["seek", raw.to_str().unwrap(), "1710234844.0", "-n", "2"],
        dir.path(),
    );
    assert!(ok);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("9:2.05"), "{}", lines[0]);
    assert!(lines[1].starts_with("10:3.75"), "{}", lines[1]);
}

#[test]
fn test_seek_relative_and_past_end() {
    let (dir, raw) = setup_fixture();
    index(&raw, dir.path());
    let raw = raw.to_str().unwrap();

    let (stdout, _, ok) = run_alogidx(&["seek", raw, "0.5", "--relative"], dir.path());
    assert!(ok);
    assert!(stdout.contains("IVPHELM_SUMMARY"), "{}", stdout);

    let (stdout, _, ok) = run_alogidx(&["seek", raw, "99", "--relative"], dir.path());
    assert!(ok);
    assert!(stdout.starts_with("No entry at or after"), "{}", stdout);
}

#[test]
fn test_show_clamps_to_line_count() {
    let (dir, raw) = setup_fixture();
    index(&raw, dir.path());

    let (stdout, _, ok) = run_alogidx(&["show", raw.to_str().unwrap(), "11", "-n", "10"], dir.path());
    assert!(ok);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("DB_UPTIME"));
}

#[test]
fn test_sources_and_messages() {
    let (dir, raw) = setup_fixture();
    index(&raw, dir.path());
    let raw = raw.to_str().unwrap();

    let (stdout, _, ok) = run_alogidx(&["sources", raw], dir.path());
    assert!(ok);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["MOOSDB_heron", "pHelmIvP", "pMarineViewer", "uSimMarine"]
    );

    let (stdout, _, ok) = run_alogidx(&["messages", raw], dir.path());
    assert!(ok);
    assert_eq!(stdout.lines().count(), 10);
}

#[test]
fn test_missing_index_hint() {
    let (dir, raw) = setup_fixture();

    let (_, stderr, ok) = run_alogidx(&["stats", raw.to_str().unwrap()], dir.path());
    assert!(!ok);
    assert!(stderr.contains("No index found"), "{}", stderr);
}

#[test]
fn test_stats() {
    let (dir, raw) = setup_fixture();
    index(&raw, dir.path());

    let (stdout, _, ok) = run_alogidx(&["stats", raw.to_str().unwrap()], dir.path());
    assert!(ok);
    assert!(stdout.contains("Record count:     13"), "{}", stdout);
    assert!(stdout.contains(&format!("Raw log:          {}", raw.display())));
    assert!(stdout.contains("Sources (4):"));
}
