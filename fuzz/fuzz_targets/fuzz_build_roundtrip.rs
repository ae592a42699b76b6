#![no_main]

use alogidx::index::{IndexBuilder, IndexReader};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let raw = Path::new("fuzz.alog");
    let mut builder = IndexBuilder::new();
    let summary = builder.parse_reader(Cursor::new(data), raw).unwrap();
    assert_eq!(summary.bytes, data.len() as u64);

    let mut out = Cursor::new(Vec::new());
    builder.write_to(&mut out).unwrap();

    let reader = IndexReader::read_from(Cursor::new(out.into_inner()), Path::new("fuzz.idx")).unwrap();
    assert_eq!(reader.record_count() as u64, summary.indexed);
    assert_eq!(reader.messages().len(), builder.messages().len());

    assert!(reader.records().windows(2).all(|w| w[0].time <= w[1].time));

    // Every record must point inside the input
    for record in reader.records() {
        assert!(record.line_begin + record.length <= data.len() as u64);
    }
});
