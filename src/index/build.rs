use crate::index::types::index_path_for;
use crate::index::writer::{IndexBuilder, ParseSummary};
use crate::utils::progress::Spinner;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Outcome of building the index for one raw log
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub raw_log: PathBuf,
    pub index_path: PathBuf,
    pub summary: ParseSummary,
    pub message_count: usize,
    pub source_count: usize,
    pub start_time: f64,
}

/// Build `<raw_log>.idx` next to the raw log, with optional silent mode
pub fn build_index_with_progress(raw_log: &Path, overwrite: bool, silent: bool) -> Result<BuildReport> {
    let index_path = index_path_for(raw_log);
    let started = Instant::now();

    let spinner = Spinner::start(silent, format!("Indexing {}...", raw_log.display()));

    let mut builder = IndexBuilder::new();
    let summary = builder
        .parse(raw_log)
        .with_context(|| format!("Failed to parse {}", raw_log.display()))?;

    spinner.message(format!("Writing {} records...", summary.indexed));
    builder
        .write(&index_path, overwrite)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    spinner.finish(format!(
        "Indexed {} lines in {:.2?}",
        summary.indexed,
        started.elapsed()
    ));

    if !silent {
        println!("Index stored at: {}", index_path.display());
        if summary.bad > 0 {
            eprintln!("({} lines could not be indexed)", summary.bad);
        }
    }

    Ok(BuildReport {
        raw_log: raw_log.to_path_buf(),
        index_path,
        message_count: builder.messages().len(),
        source_count: builder.sources().len(),
        start_time: builder.header().start_time,
        summary,
    })
}
