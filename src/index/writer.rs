use crate::error::{Error, Result};
use crate::index::types::*;
use crate::utils::{next_token, write_header, write_record, write_string_set};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, info};

/// Counts of how each raw-log line was classified during a parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub indexed: u64,
    pub blank: u64,
    pub comments: u64,
    pub bad: u64,
    /// Total bytes read from the raw log
    pub bytes: u64,
}

/// What a single raw-log line turned out to be
#[derive(Debug, PartialEq)]
enum LineKind<'a> {
    Blank,
    /// Comment, possibly carrying the session start time
    Comment(Option<f64>),
    Bad,
    Data {
        time: f64,
        variable: &'a str,
        source: &'a str,
    },
}

fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start_matches([' ', '\t']);
    let Some(first) = trimmed.chars().next() else {
        return LineKind::Blank;
    };

    if first == '%' {
        return LineKind::Comment(find_log_start(line));
    }

    // Multi-line payloads and negative timestamps land here
    if !first.is_ascii_digit() {
        return LineKind::Bad;
    }

    let mut pos = 0;
    let time = next_token(line, &mut pos).map(str::parse::<f64>);
    let variable = next_token(line, &mut pos);

    if variable.is_some_and(|v| v.starts_with('%')) {
        return LineKind::Comment(find_log_start(line));
    }

    let source = next_token(line, &mut pos);

    match (time, variable, source) {
        (Some(Ok(time)), Some(variable), Some(source)) if time.is_finite() => LineKind::Data {
            time,
            variable,
            source,
        },
        _ => LineKind::Bad,
    }
}

/// First finite number following the `LOGSTART` token, if present
fn find_log_start(line: &str) -> Option<f64> {
    let mut pos = 0;
    while let Some(token) = next_token(line, &mut pos) {
        if token == LOGSTART_MARKER {
            while let Some(candidate) = next_token(line, &mut pos) {
                match candidate.parse::<f64>() {
                    Ok(value) if value.is_finite() => return Some(value),
                    _ => {}
                }
            }
            return None;
        }
    }
    None
}

/// Builds an index from a raw alog in a single pass, then writes it out
#[derive(Debug, Default)]
pub struct IndexBuilder {
    header: IndexHeader,
    messages: StringSet,
    sources: StringSet,
    records: Vec<Record>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a raw log and collect one record per data line
    pub fn parse(&mut self, raw_log: &Path) -> Result<ParseSummary> {
        let file = File::open(raw_log).map_err(|source| Error::CannotOpenForReading {
            path: raw_log.to_path_buf(),
            source,
        })?;
        let summary = self.parse_reader(BufReader::new(file), raw_log)?;

        info!(
            path = %raw_log.display(),
            records = summary.indexed,
            comments = summary.comments,
            bad = summary.bad,
            "parsed raw log"
        );
        Ok(summary)
    }

    /// Scan any buffered source; `raw_log` only names it in errors.
    ///
    /// Anything collected by an earlier parse is discarded first.
    pub fn parse_reader<R: BufRead>(&mut self, mut reader: R, raw_log: &Path) -> Result<ParseSummary> {
        *self = Self::default();

        let mut summary = ParseSummary::default();
        let mut buf = Vec::with_capacity(256);
        let mut offset: u64 = 0;

        loop {
            buf.clear();
            let consumed = reader
                .read_until(b'\n', &mut buf)
                .map_err(Error::io(raw_log))?;
            if consumed == 0 {
                break;
            }

            let line_begin = offset;
            offset += consumed as u64;

            let line = String::from_utf8_lossy(&buf);
            match classify_line(&line) {
                LineKind::Blank => summary.blank += 1,
                LineKind::Comment(start_time) => {
                    if let Some(start_time) = start_time {
                        self.header.start_time = start_time;
                    }
                    summary.comments += 1;
                }
                LineKind::Bad => {
                    debug!(offset = line_begin, "skipping unindexable line");
                    summary.bad += 1;
                }
                LineKind::Data {
                    time,
                    variable,
                    source,
                } => {
                    if !self.messages.contains(variable) {
                        self.messages.insert(variable.to_string());
                    }
                    if !self.sources.contains(source) {
                        self.sources.insert(source.to_string());
                    }
                    self.records
                        .push(Record::new(time, line_begin, consumed as u64));
                    summary.indexed += 1;
                }
            }
        }

        summary.bytes = offset;
        self.header.record_count = self.records.len() as u64;
        Ok(summary)
    }

    /// Sort the records by time and write the index file.
    ///
    /// With `overwrite == false` an existing file at `index_path` is left
    /// alone and [`Error::CannotOpenForWriting`] is returned. A failure part
    /// way through leaves a partial file that must not be used.
    pub fn write(&mut self, index_path: &Path, overwrite: bool) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let file = options
            .open(index_path)
            .map_err(|source| Error::CannotOpenForWriting {
                path: index_path.to_path_buf(),
                source,
            })?;

        self.write_to(&mut BufWriter::new(file))
            .map_err(Error::io(index_path))?;

        info!(
            path = %index_path.display(),
            records = self.records.len(),
            messages = self.messages.len(),
            sources = self.sources.len(),
            "wrote index"
        );
        Ok(())
    }

    /// Sort the records by time and serialize into any seekable sink
    pub fn write_to<W: Write + Seek>(&mut self, out: &mut W) -> std::io::Result<()> {
        // Stable, so lines logged at the same instant keep their file order
        self.records.sort_by(Record::cmp_time);
        self.header.record_count = self.records.len() as u64;

        // Header goes out with a placeholder records_begin
        write_header(out, &self.header)?;
        write_string_set(out, &self.messages)?;
        write_string_set(out, &self.sources)?;

        // Now the record offset is known: patch the header and come back
        let records_begin = out.stream_position()?;
        self.header.records_begin = records_begin;
        out.seek(SeekFrom::Start(0))?;
        write_header(out, &self.header)?;
        out.seek(SeekFrom::Start(records_begin))?;

        for record in &self.records {
            write_record(out, record)?;
        }

        out.flush()
    }

    pub fn header(&self) -> &IndexHeader {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn messages(&self) -> &StringSet {
        &self.messages
    }

    pub fn sources(&self) -> &StringSet {
        &self.sources
    }
}
