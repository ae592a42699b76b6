use crate::error::Result;
use crate::index::reader::IndexReader;
use crate::index::types::index_path_for;
use crate::log::fetcher::LineFetcher;
use std::path::Path;
use tracing::debug;

/// A raw log paired with its index, with a cursor for sequential reads.
///
/// Line numbers are positions in the time-sorted index, not in the raw file.
/// Nothing here bounds-checks them: an out-of-range line panics in
/// [`IndexReader::record`].
#[derive(Debug, Default)]
pub struct AlogReader {
    fetcher: LineFetcher,
    index: IndexReader,
    cursor: usize,
}

impl AlogReader {
    /// Open a raw log and load its `<raw>.idx` companion.
    ///
    /// A missing raw log fails with `CannotOpenForReading`; a present log
    /// whose index is missing fails with `CannotOpenIndexForReading`.
    pub fn open(raw_log: &Path) -> Result<Self> {
        let mut reader = Self::default();
        reader.init(raw_log)?;
        Ok(reader)
    }

    pub fn init(&mut self, raw_log: &Path) -> Result<()> {
        let index_path = index_path_for(raw_log);
        self.cursor = 0;

        self.fetcher.open(raw_log)?;
        self.index.read(&index_path)?;

        debug!(
            raw = %raw_log.display(),
            index = %index_path.display(),
            lines = self.index.record_count(),
            "opened indexed log"
        );
        Ok(())
    }

    /// Line at the cursor; the cursor then moves forward one line
    pub fn next_line(&mut self) -> Result<String> {
        let line = self.line(self.cursor)?;
        self.cursor += 1;
        Ok(line)
    }

    /// The cursor moves back one line, then that line is read
    pub fn prev_line(&mut self) -> Result<String> {
        self.cursor = self.cursor.wrapping_sub(1);
        self.line(self.cursor)
    }

    /// Line by absolute line number; the cursor does not move
    pub fn line(&mut self, line: usize) -> Result<String> {
        let record = *self.index.record(line);
        self.fetcher.read(&record)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, line: usize) {
        self.cursor = line;
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn line_count(&self) -> usize {
        self.index.record_count()
    }

    pub fn start_time(&self) -> f64 {
        self.index.start_time()
    }

    /// Relative time of a line
    pub fn time(&self, line: usize) -> f64 {
        self.index.time(line)
    }

    pub fn messages(&self) -> &[String] {
        self.index.messages()
    }

    pub fn sources(&self) -> &[String] {
        self.index.sources()
    }

    pub fn index(&self) -> &IndexReader {
        &self.index
    }

    pub fn raw_log_path(&self) -> &Path {
        self.fetcher.path()
    }
}
