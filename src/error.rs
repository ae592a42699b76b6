use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building, loading or reading an alog index.
///
/// Every variant carries the path that failed so callers can tell a missing
/// raw log apart from a missing index and decide whether to rebuild.
#[derive(Debug, Error)]
pub enum Error {
    /// The raw log (or another input file) could not be opened.
    #[error("cannot open {} for reading: {source}", path.display())]
    CannotOpenForReading {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be opened, or already exists and the
    /// overwrite policy forbids clobbering it.
    #[error("cannot open {} for writing: {source}", path.display())]
    CannotOpenForWriting {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The index file for a raw log could not be opened.
    #[error("cannot open index {} for reading: {source}", path.display())]
    CannotOpenIndexForReading {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The index was written by a different format version.
    #[error("index {} has version {found}, expected {expected}", path.display())]
    IncorrectIndexVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    /// A read or write failed after the file was opened.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The file this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Error::CannotOpenForReading { path, .. }
            | Error::CannotOpenForWriting { path, .. }
            | Error::CannotOpenIndexForReading { path, .. }
            | Error::IncorrectIndexVersion { path, .. }
            | Error::Io { path, .. } => path,
        }
    }

    /// True for the open-failure kinds.
    pub fn is_file_io(&self) -> bool {
        matches!(
            self,
            Error::CannotOpenForReading { .. }
                | Error::CannotOpenForWriting { .. }
                | Error::CannotOpenIndexForReading { .. }
        )
    }

    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
        move |source| Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
