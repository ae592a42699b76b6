//! # alogidx - Time-indexed access to mission alog files
//!
//! Mission logs are plain text, one timestamped variable update per line, and
//! routinely run to gigabytes. Finding "what happened at time T" means
//! scanning from the top. `alogidx` builds a companion index once
//! (`<log>.idx`) and then answers time lookups in O(log n) and reads any
//! line by seeking straight to it.
//!
//! ## Architecture
//!
//! - [`index`] - Record/header model, the one-pass builder and the loader
//! - [`log`] - Line fetcher, cursor reader and the time-seek facade
//! - [`output`] - Terminal rendering of fetched lines
//! - [`utils`] - Binary encoding, field tokenizer, configuration
//! - [`error`] - Error kinds, each carrying the failing path
//!
//! ## Quick Start
//!
//! ```no_run
//! use alogidx::index::{IndexBuilder, index_path_for};
//! use alogidx::log::SeekIndex;
//! use std::path::Path;
//!
//! let raw = Path::new("/data/mission.alog");
//!
//! // Build once
//! let mut builder = IndexBuilder::new();
//! builder.parse(raw)?;
//! builder.write(&index_path_for(raw), true)?;
//!
//! // Read many times
//! let mut seek = SeekIndex::new();
//! seek.open(raw)?;
//! if let Some(line) = seek.seek_to_find_time(1_700_000_123.5) {
//!     println!("{}", seek.line(line)?);
//! }
//! # Ok::<(), alogidx::Error>(())
//! ```

pub mod error;
pub mod index;
pub mod log;
pub mod output;
pub mod utils;

pub use error::{Error, Result};
