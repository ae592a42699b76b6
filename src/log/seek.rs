//! Time-domain access to an indexed log.
//!
//! [`SeekIndex`] is what playback and scrubbing tools talk to: it turns a
//! wall-clock time into a line number with a lower-bound binary search over
//! the time-sorted record table, and back again.

use crate::error::Result;
use crate::log::reader::AlogReader;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use crate::utils::tokenizer::{next_token, nth_field};

/// Seekable, time-addressed view over a raw log and its index
#[derive(Debug, Default)]
pub struct SeekIndex {
    reader: Option<AlogReader>,
    path: PathBuf,
    line_count: usize,
}

impl SeekIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a raw log and its index; anything opened before is closed first
    pub fn open(&mut self, raw_log: &Path) -> Result<()> {
        self.close();

        let reader = AlogReader::open(raw_log)?;
        self.line_count = reader.line_count();
        self.path = raw_log.to_path_buf();
        self.reader = Some(reader);
        Ok(())
    }

    pub fn close(&mut self) {
        self.reader = None;
        self.path = PathBuf::new();
        self.line_count = 0;
    }

    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Line number of the first entry at or after `global_time`.
    ///
    /// Entries logged at the same instant resolve to the lowest line number.
    /// `None` when every entry is earlier than `global_time`, or when closed.
    pub fn seek_to_find_time(&self, global_time: f64) -> Option<usize> {
        let reader = self.reader.as_ref()?;
        let start_time = reader.start_time();

        // Same arithmetic as entry_time, so the two always agree at the boundary
        let line = reader
            .index()
            .records()
            .partition_point(|record| record.time + start_time < global_time);

        (line < self.line_count).then_some(line)
    }

    /// Wall-clock time of a line; the inverse of [`seek_to_find_time`](Self::seek_to_find_time)
    ///
    /// # Panics
    ///
    /// If closed or `line` is out of range.
    pub fn entry_time(&self, line: usize) -> f64 {
        let reader = self.open_reader();
        reader.time(line) + reader.start_time()
    }

    /// Wall-clock time of the first entry
    pub fn start_time(&self) -> Option<f64> {
        (self.is_open() && self.line_count > 0).then(|| self.entry_time(0))
    }

    /// Wall-clock time of the last entry
    pub fn finish_time(&self) -> Option<f64> {
        (self.is_open() && self.line_count > 0).then(|| self.entry_time(self.line_count - 1))
    }

    /// Move the cursor to the first entry at or after `global_time`.
    ///
    /// Returns `false`, leaving the cursor alone, if there is no such entry.
    pub fn goto_time(&mut self, global_time: f64) -> bool {
        let Some(line) = self.seek_to_find_time(global_time) else {
            return false;
        };
        if let Some(reader) = self.reader.as_mut() {
            debug!(time = global_time, line, "cursor moved");
            reader.set_cursor(line);
        }
        true
    }

    pub fn line(&mut self, line: usize) -> Result<String> {
        self.open_reader_mut().line(line)
    }

    pub fn next_line(&mut self) -> Result<String> {
        self.open_reader_mut().next_line()
    }

    pub fn prev_line(&mut self) -> Result<String> {
        self.open_reader_mut().prev_line()
    }

    pub fn source_names(&self) -> &[String] {
        self.reader.as_ref().map(AlogReader::sources).unwrap_or(&[])
    }

    pub fn message_names(&self) -> &[String] {
        self.reader.as_ref().map(AlogReader::messages).unwrap_or(&[])
    }

    pub fn reader(&self) -> Option<&AlogReader> {
        self.reader.as_ref()
    }

    fn open_reader(&self) -> &AlogReader {
        self.reader.as_ref().expect("SeekIndex used before open")
    }

    fn open_reader_mut(&mut self) -> &mut AlogReader {
        self.reader.as_mut().expect("SeekIndex used before open")
    }
}
