//! Build-then-read tests over real files: scenarios, round trip and the
//! error distinctions callers rely on.

use alogidx::index::{INDEX_VERSION, IndexBuilder, IndexReader, index_path_for};
use alogidx::log::{AlogReader, SeekIndex};
use alogidx::Error;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLE: &str = include_str!("fixtures/sample.alog");

fn write_log(dir: &Path, name: &str, content: &str) -> PathBuf {
    let raw = dir.join(name);
    fs::write(&raw, content).unwrap();
    raw
}

fn build(raw: &Path) -> IndexBuilder {
    let mut builder = IndexBuilder::new();
    builder.parse(raw).unwrap();
    builder.write(&index_path_for(raw), true).unwrap();
    builder
}

fn scenario_a(dir: &Path) -> PathBuf {
    let raw = write_log(
        dir,
        "scenario_a.alog",
        "0.0 %comment LOGSTART 100.5\n1.2 NAV_X pNav 20.4\n1.2 NAV_Y pNav 5.1\n3.4 NAV_X pNav 21.0\n",
    );
    build(&raw);
    raw
}

#[test]
fn scenario_a_header_and_sets() {
    let dir = tempfile::tempdir().unwrap();
    let raw = scenario_a(dir.path());

    let reader = IndexReader::open(&index_path_for(&raw)).unwrap();
    assert_eq!(reader.start_time(), 100.5);
    assert_eq!(reader.record_count(), 3);
    assert_eq!(reader.header().version, INDEX_VERSION);
    assert_eq!(reader.sources(), ["pNav"]);
    assert_eq!(reader.messages(), ["NAV_X", "NAV_Y"]);
}

#[test]
fn scenario_b_seek_between_entries() {
    let dir = tempfile::tempdir().unwrap();
    let raw = scenario_a(dir.path());

    let mut seek = SeekIndex::new();
    seek.open(&raw).unwrap();
    assert_eq!(seek.seek_to_find_time(102.9), Some(2));
    assert_eq!(seek.line(2).unwrap(), "3.4 NAV_X pNav 21.0");
}

#[test]
fn scenario_c_seek_past_end() {
    let dir = tempfile::tempdir().unwrap();
    let raw = scenario_a(dir.path());

    let mut seek = SeekIndex::new();
    seek.open(&raw).unwrap();
    assert_eq!(seek.seek_to_find_time(100.5 + 3.5), None);
    assert_eq!(seek.seek_to_find_time(1e12), None);
}

#[test]
fn tie_break_returns_lower_line() {
    let dir = tempfile::tempdir().unwrap();
    let raw = scenario_a(dir.path());

    let mut seek = SeekIndex::new();
    seek.open(&raw).unwrap();
    let line = seek.seek_to_find_time(seek.entry_time(1)).unwrap();
    assert_eq!(line, 0);
    assert_eq!(seek.entry_time(0), seek.entry_time(1));
    assert_eq!(seek.line(line).unwrap(), "1.2 NAV_X pNav 20.4");
}

#[test]
fn round_trip_reproduces_every_data_line() {
    let dir = tempfile::tempdir().unwrap();
    let raw = write_log(dir.path(), "sample.alog", SAMPLE);
    let builder = build(&raw);

    let expected: Vec<&str> = SAMPLE
        .lines()
        .filter(|l| l.starts_with(|c: char| c.is_ascii_digit()))
        .collect();
    assert_eq!(expected.len(), 13);
    assert_eq!(builder.header().record_count, 13);

    let mut reader = AlogReader::open(&raw).unwrap();
    assert_eq!(reader.line_count(), expected.len());
    assert_eq!(reader.start_time(), 1710234842.37);

    let fetched: Vec<String> = (0..reader.line_count())
        .map(|_| reader.next_line().unwrap())
        .collect();
    assert_eq!(fetched, expected);

    assert_eq!(reader.sources().len(), 4);
    assert_eq!(reader.messages().len(), 10);
    assert!(reader.messages().iter().any(|m| m == "IVPHELM_SUMMARY"));
}

#[test]
fn records_are_sorted_after_write() {
    let dir = tempfile::tempdir().unwrap();
    let content: String = [7.0, 1.5, 3.25, 1.5, 0.0, 9.75, 3.25]
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{t} VAR_{i} pSrc {i}\n"))
        .collect();
    let raw = write_log(dir.path(), "shuffled.alog", &content);
    build(&raw);

    let reader = IndexReader::open(&index_path_for(&raw)).unwrap();
    let records = reader.records();
    assert_eq!(records.len(), 7);
    assert!(records.windows(2).all(|w| w[0].time <= w[1].time));

    // simultaneous entries stay in the order they were logged
    let mut log = AlogReader::open(&raw).unwrap();
    assert_eq!(log.line(1).unwrap(), "1.5 VAR_1 pSrc 1");
    assert_eq!(log.line(2).unwrap(), "1.5 VAR_3 pSrc 3");
}

#[test]
fn version_mismatch_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let raw = scenario_a(dir.path());
    let idx = index_path_for(&raw);

    let mut bytes = fs::read(&idx).unwrap();
    bytes[..4].copy_from_slice(&99u32.to_le_bytes());
    fs::write(&idx, bytes).unwrap();

    let mut reader = IndexReader::new();
    match reader.read(&idx) {
        Err(Error::IncorrectIndexVersion { path, found, expected }) => {
            assert_eq!(path, idx);
            assert_eq!(found, 99);
            assert_eq!(expected, INDEX_VERSION);
        }
        other => panic!("expected version error, got {other:?}"),
    }
    assert_eq!(reader.record_count(), 0);
    assert!(reader.sources().is_empty());

    let err = AlogReader::open(&raw).unwrap_err();
    assert!(matches!(err, Error::IncorrectIndexVersion { .. }));
}

#[test]
fn missing_index_is_distinct_from_missing_log() {
    let dir = tempfile::tempdir().unwrap();
    let raw = write_log(dir.path(), "fresh.alog", "1.0 A pA 1\n");

    let mut seek = SeekIndex::new();
    let err = seek.open(&raw).unwrap_err();
    assert!(matches!(err, Error::CannotOpenIndexForReading { .. }));
    assert!(err.is_file_io());
    assert!(!seek.is_open());

    let err = seek.open(&dir.path().join("absent.alog")).unwrap_err();
    assert!(matches!(err, Error::CannotOpenForReading { .. }));
}

#[test]
fn no_clobber_leaves_existing_index() {
    let dir = tempfile::tempdir().unwrap();
    let raw = scenario_a(dir.path());
    let idx = index_path_for(&raw);
    let before = fs::read(&idx).unwrap();

    let mut builder = IndexBuilder::new();
    builder.parse(&raw).unwrap();
    let err = builder.write(&idx, false).unwrap_err();
    assert!(matches!(err, Error::CannotOpenForWriting { .. }));
    assert_eq!(err.path(), idx.as_path());
    assert_eq!(fs::read(&idx).unwrap(), before);
}

#[test]
fn empty_log_builds_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    let raw = write_log(dir.path(), "empty.alog", "%% LOGSTART 42\n\n");
    build(&raw);

    let mut seek = SeekIndex::new();
    seek.open(&raw).unwrap();
    assert_eq!(seek.line_count(), 0);
    assert_eq!(seek.seek_to_find_time(0.0), None);
    assert_eq!(seek.start_time(), None);
    assert_eq!(seek.finish_time(), None);
}

#[test]
fn seek_then_walk_sample() {
    let dir = tempfile::tempdir().unwrap();
    let raw = write_log(dir.path(), "sample.alog", SAMPLE);
    build(&raw);

    let mut seek = SeekIndex::new();
    seek.open(&raw).unwrap();

    // 0.88 relative: two NAV entries logged together
    assert!(seek.goto_time(1710234842.37 + 0.7));
    let first = seek.next_line().unwrap();
    let second = seek.next_line().unwrap();
    assert!(first.contains("NAV_X") && first.contains("20.9"));
    assert!(second.contains("NAV_Y"));
    assert_eq!(seek.prev_line().unwrap(), second);
}
