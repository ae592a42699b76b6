use alogidx::index::stats::{self, open_log};
use alogidx::log::SeekIndex;
use alogidx::output::{self, LineView};
use alogidx::utils::AppConfig;
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alogidx")]
#[command(about = "Build and query time indexes for mission alog files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index for an alog (written to <ALOG>.idx)
    Index {
        /// Raw alog file
        alog: PathBuf,

        /// Overwrite an existing index
        #[arg(short, long, conflicts_with = "no_clobber")]
        force: bool,

        /// Fail if the index already exists
        #[arg(long)]
        no_clobber: bool,
    },
    /// Show index statistics
    Stats {
        /// Raw alog file
        alog: PathBuf,
    },
    /// Print the first line at or after a time
    Seek {
        /// Raw alog file
        alog: PathBuf,

        /// Wall-clock time (or relative to log start with --relative)
        time: f64,

        /// Interpret TIME relative to the log start
        #[arg(short, long)]
        relative: bool,

        /// Number of lines to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Print lines by line number (time-sorted order)
    Show {
        /// Raw alog file
        alog: PathBuf,

        /// First line number to print
        from: usize,

        /// Number of lines to print
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// List the source processes seen in the log
    Sources {
        /// Raw alog file
        alog: PathBuf,
    },
    /// List the variable names seen in the log
    Messages {
        /// Raw alog file
        alog: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load()?;
    let color = config.color && !cli.no_color;

    match cli.command {
        Commands::Index {
            alog,
            force,
            no_clobber,
        } => {
            let overwrite = if force {
                true
            } else if no_clobber {
                false
            } else {
                config.overwrite_index
            };
            alogidx::index::build::build_index_with_progress(&alog, overwrite, !config.progress)?;
        }
        Commands::Stats { alog } => {
            stats::show_stats(&alog)?;
        }
        Commands::Seek {
            alog,
            time,
            relative,
            count,
        } => {
            let mut seek = open_log(&alog)?;
            let target = if relative {
                time + seek.reader().map_or(0.0, |r| r.start_time())
            } else {
                time
            };

            match seek.seek_to_find_time(target) {
                Some(line) => {
                    let lines = fetch_lines(&mut seek, line, count)?;
                    output::print_lines(&lines, color)?;
                }
                None => {
                    let last = seek.finish_time().unwrap_or(0.0);
                    println!("No entry at or after {:.3} (last entry at {:.3})", target, last);
                }
            }
        }
        Commands::Show { alog, from, count } => {
            let mut seek = open_log(&alog)?;
            let lines = fetch_lines(&mut seek, from, count)?;
            output::print_lines(&lines, color)?;
        }
        Commands::Sources { alog } => {
            let seek = open_log(&alog)?;
            output::print_names(seek.source_names(), color)?;
        }
        Commands::Messages { alog } => {
            let seek = open_log(&alog)?;
            output::print_names(seek.message_names(), color)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Fetch up to `count` lines starting at `from`, clamped to the index
fn fetch_lines(seek: &mut SeekIndex, from: usize, count: usize) -> Result<Vec<LineView>> {
    let end = from.saturating_add(count).min(seek.line_count());
    (from..end)
        .map(|line_number| -> Result<LineView> {
            let text = seek.line(line_number)?;
            Ok(LineView { line_number, text })
        })
        .collect()
}
