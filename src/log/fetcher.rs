use crate::error::{Error, Result};
use crate::index::types::Record;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Random-access reader for single lines of a raw log
#[derive(Debug, Default)]
pub struct LineFetcher {
    path: PathBuf,
    file: Option<BufReader<File>>,
    /// Logical file position after the last read, when known
    pos: Option<u64>,
    buf: Vec<u8>,
}

impl LineFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a raw log, closing any log opened before
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.close();

        let file = File::open(path).map_err(|source| Error::CannotOpenForReading {
            path: path.to_path_buf(),
            source,
        })?;
        self.file = Some(BufReader::new(file));
        self.pos = Some(0);
        self.path = path.to_path_buf();
        Ok(())
    }

    pub fn close(&mut self) {
        self.file = None;
        self.pos = None;
        self.path = PathBuf::new();
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the line a record points at, without its terminator.
    ///
    /// The read is bounded by the newline, not by `record.length`. Returns an
    /// empty line when the offset lies at or past the end of the file.
    ///
    /// # Panics
    ///
    /// If no log is open.
    pub fn read(&mut self, record: &Record) -> Result<String> {
        let file = self
            .file
            .as_mut()
            .expect("LineFetcher::read called before open");

        // Relative moves keep whatever of the buffer is still valid
        let delta = self.pos.take().and_then(|pos| {
            i64::try_from(record.line_begin)
                .ok()?
                .checked_sub(i64::try_from(pos).ok()?)
        });
        let moved = match delta {
            Some(delta) => file.seek_relative(delta),
            None => file.seek(SeekFrom::Start(record.line_begin)).map(drop),
        };
        moved.map_err(Error::io(&self.path))?;

        self.buf.clear();
        let consumed = file
            .read_until(b'\n', &mut self.buf)
            .map_err(Error::io(&self.path))?;
        self.pos = Some(record.line_begin + consumed as u64);

        let mut end = self.buf.len();
        if self.buf[..end].ends_with(b"\n") {
            end -= 1;
            if self.buf[..end].ends_with(b"\r") {
                end -= 1;
            }
        }

        Ok(String::from_utf8_lossy(&self.buf[..end]).into_owned())
    }
}
