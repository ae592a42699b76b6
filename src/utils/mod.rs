//! Utility functions shared by the index and log modules.
//!
//! ## Modules
//!
//! - [`app_data`] - Persisted user configuration
//! - [`encoding`] - Little-endian primitives and the string-set block codec
//! - [`progress`] - Spinner, compiled out without the `progress` feature
//! - [`tokenizer`] - Whitespace field extraction for alog lines
//!
//! ## Key Functions
//!
//! ```no_run
//! use alogidx::utils::{nth_field, next_token};
//!
//! let line = "1.2 NAV_X pNav 20.4";
//! assert_eq!(nth_field(line, 1), Some("NAV_X"));
//!
//! let mut pos = 0;
//! let time = next_token(line, &mut pos);
//! ```

pub mod app_data;
pub mod encoding;
pub mod progress;
pub mod tokenizer;

pub use app_data::*;
pub use encoding::*;
pub use tokenizer::*;
