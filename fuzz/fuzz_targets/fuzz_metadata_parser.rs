#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Malformed metadata must surface as an error, never a panic
    if let Ok(records) = umbmid::metadata::parse_reader(Cursor::new(data), Path::new("fuzz-metadata.csv")) {
        let _ = umbmid::metadata::MetadataSummary::from_records(&records);
        for record in &records {
            let _ = record.adipose_shell_id();
            let _ = record.adjusted_antenna_radius();
        }
    }
});
