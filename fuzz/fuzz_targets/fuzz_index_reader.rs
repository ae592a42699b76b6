#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Loading arbitrary bytes must fail cleanly, never panic
    let _ = alogidx::index::IndexReader::read_from(Cursor::new(data), Path::new("fuzz.idx"));
});
