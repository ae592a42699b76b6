use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Current on-disk format version. Indexes with any other version are rejected.
pub const INDEX_VERSION: u32 = 1;

/// Suffix appended to a raw log path to name its index
pub const INDEX_SUFFIX: &str = ".idx";

/// Comment token carrying the log session's wall-clock start time
pub const LOGSTART_MARKER: &str = "LOGSTART";

/// Ordered set of distinct names (variables or sources)
pub type StringSet = BTreeSet<String>;

/// One indexed raw-log line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Timestamp relative to the session start
    pub time: f64,
    /// Byte offset of the line in the raw log
    pub line_begin: u64,
    /// Bytes consumed by the line, terminator included
    pub length: u64,
}

impl Record {
    /// Size of a serialized record in bytes
    pub const SIZE: usize = 8 + 8 + 8;

    pub fn new(time: f64, line_begin: u64, length: u64) -> Self {
        Self {
            time,
            line_begin,
            length,
        }
    }

    /// Time-ascending ordering used both to sort and to search the table
    #[inline]
    pub fn cmp_time(&self, other: &Record) -> Ordering {
        self.time.total_cmp(&other.time)
    }
}

/// Index metadata stored at the start of the index file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexHeader {
    pub version: u32,
    /// Byte offset of the first serialized record
    pub records_begin: u64,
    pub record_count: u64,
    /// Wall-clock time corresponding to relative time 0
    pub start_time: f64,
}

impl IndexHeader {
    /// Size of the serialized header in bytes (fixed so it can be patched in place)
    pub const SIZE: usize = 4 + 8 + 8 + 8; // 28 bytes
}

impl Default for IndexHeader {
    fn default() -> Self {
        Self {
            version: INDEX_VERSION,
            records_begin: 0,
            record_count: 0,
            start_time: 0.0,
        }
    }
}

/// Path of the index that belongs to a raw log: `<raw>.idx`
pub fn index_path_for(raw_log: &Path) -> PathBuf {
    let mut name = OsString::from(raw_log.as_os_str());
    name.push(INDEX_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_path_for() {
        assert_eq!(
            index_path_for(Path::new("/data/mission.alog")),
            PathBuf::from("/data/mission.alog.idx")
        );
        assert_eq!(index_path_for(Path::new("log")), PathBuf::from("log.idx"));
    }

    #[test]
    fn test_cmp_time() {
        let a = Record::new(1.2, 0, 10);
        let b = Record::new(3.4, 10, 10);
        assert_eq!(a.cmp_time(&b), Ordering::Less);
        assert_eq!(b.cmp_time(&a), Ordering::Greater);
        assert_eq!(a.cmp_time(&Record::new(1.2, 99, 1)), Ordering::Equal);
    }
}
