use crate::error::{Error, Result};
use crate::index::types::*;
use crate::utils::{read_header, read_record, read_string_set};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::info;

/// Read-only view of a previously built index
#[derive(Debug, Default)]
pub struct IndexReader {
    index_path: PathBuf,
    header: IndexHeader,
    messages: Vec<String>,
    sources: Vec<String>,
    records: Vec<Record>,
}

impl IndexReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and load an index file
    pub fn open(index_path: &Path) -> Result<Self> {
        let mut reader = Self::new();
        reader.read(index_path)?;
        Ok(reader)
    }

    /// Load an index file, replacing anything loaded before.
    ///
    /// On failure the reader is left empty.
    pub fn read(&mut self, index_path: &Path) -> Result<()> {
        *self = Self::default();

        let file = File::open(index_path).map_err(|source| Error::CannotOpenIndexForReading {
            path: index_path.to_path_buf(),
            source,
        })?;

        let loaded = Self::read_from(BufReader::new(file), index_path)?;
        *self = loaded;

        info!(
            path = %index_path.display(),
            records = self.records.len(),
            start_time = self.header.start_time,
            "loaded index"
        );
        Ok(())
    }

    /// Deserialize an index from any seekable byte source
    pub fn read_from<R: Read + Seek>(mut input: R, index_path: &Path) -> Result<Self> {
        let header = read_header(&mut input).map_err(Error::io(index_path))?;
        if header.version != INDEX_VERSION {
            return Err(Error::IncorrectIndexVersion {
                path: index_path.to_path_buf(),
                found: header.version,
                expected: INDEX_VERSION,
            });
        }

        let messages: Vec<String> = read_string_set(&mut input).map_err(Error::io(index_path))?;
        let sources: Vec<String> = read_string_set(&mut input).map_err(Error::io(index_path))?;

        input
            .seek(SeekFrom::Start(header.records_begin))
            .map_err(Error::io(index_path))?;

        // Cap the up-front allocation; a corrupt count fails on read, not on alloc
        let capacity = usize::try_from(header.record_count)
            .unwrap_or(usize::MAX)
            .min(1 << 20);
        let mut records = Vec::with_capacity(capacity);
        for _ in 0..header.record_count {
            records.push(read_record(&mut input).map_err(Error::io(index_path))?);
        }

        Ok(Self {
            index_path: index_path.to_path_buf(),
            header,
            messages,
            sources,
            records,
        })
    }

    /// Record at a line number.
    ///
    /// # Panics
    ///
    /// If `line` is not below [`record_count`](Self::record_count).
    pub fn record(&self, line: usize) -> &Record {
        assert!(
            line < self.records.len(),
            "line {} out of range for index with {} records",
            line,
            self.records.len()
        );
        &self.records[line]
    }

    /// Relative time of the record at a line number
    pub fn time(&self, line: usize) -> f64 {
        self.record(line).time
    }

    pub fn start_time(&self) -> f64 {
        self.header.start_time
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn header(&self) -> &IndexHeader {
        &self.header
    }

    /// Distinct variable names, in lexical order
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Distinct source process names, in lexical order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }
}
