use crate::error::Error;
use crate::log::seek::SeekIndex;
use anyhow::{Context, Result};
use std::path::Path;

/// Open a raw log and its index, with a rebuild hint when only the index is missing
pub fn open_log(raw_log: &Path) -> Result<SeekIndex> {
    let mut seek = SeekIndex::new();
    match seek.open(raw_log) {
        Ok(()) => Ok(seek),
        Err(err @ Error::CannotOpenIndexForReading { .. }) => Err(err).with_context(|| {
            format!("No index found. Run 'alogidx index {}' first.", raw_log.display())
        }),
        Err(err) => Err(err).with_context(|| format!("Failed to open {}", raw_log.display())),
    }
}

/// Display index statistics for a raw log
pub fn show_stats(raw_log: &Path) -> Result<()> {
    let seek = open_log(raw_log)?;

    let Some(reader) = seek.reader() else {
        anyhow::bail!("Index for {} is not open", raw_log.display());
    };
    let index = reader.index();
    let header = index.header();

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Raw log:          {}", reader.raw_log_path().display());
    println!("Index location:   {}", index.index_path().display());
    println!("Index version:    {}", header.version);
    println!("Record count:     {}", index.record_count());
    println!("Log start:        {:.3}", header.start_time);

    if let (Some(first), Some(last)) = (seek.start_time(), seek.finish_time()) {
        println!("First entry:      {:.3}", first);
        println!("Last entry:       {:.3}", last);
        println!("Duration:         {}", format_duration(last - first));
    }

    if let Ok(meta) = std::fs::metadata(raw_log) {
        println!("Raw log size:     {}", format_size(meta.len()));
    }
    if let Ok(meta) = std::fs::metadata(index.index_path()) {
        println!("Index size:       {}", format_size(meta.len()));
    }

    print_name_list("Sources", seek.source_names());
    print_name_list("Variables", seek.message_names());

    Ok(())
}

fn print_name_list(title: &str, names: &[String]) {
    println!();
    println!("{} ({}):", title, names.len());
    for name in names.iter().take(25) {
        println!("  {}", name);
    }
    if names.len() > 25 {
        println!("  ... and {} more", names.len() - 25);
    }
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Format seconds as h:mm:ss.sss
fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let hours = (total / 3600.0).floor();
    let minutes = ((total - hours * 3600.0) / 60.0).floor();
    let secs = total - hours * 3600.0 - minutes * 60.0;
    format!("{}:{:02}:{:06.3}", hours as u64, minutes as u64, secs)
}
