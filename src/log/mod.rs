//! Query-time access to a raw log through its index.
//!
//! - [`fetcher`] - one line from the raw log by byte offset
//! - [`reader`] - raw log + index, with a sequential cursor
//! - [`seek`] - time-to-line search for playback tools

pub mod fetcher;
pub mod reader;
pub mod seek;

pub use fetcher::LineFetcher;
pub use reader::AlogReader;
pub use seek::SeekIndex;
