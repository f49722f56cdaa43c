#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use std::path::Path;

use umbmid::loader::{normalize_direction, parse_spectrum, ScanDirection};

fuzz_target!(|data: &[u8]| {
    if let Ok(spectrum) = parse_spectrum(Cursor::new(data), Path::new("fuzz_expt01_Mono_.txt")) {
        let _ = normalize_direction(spectrum, ScanDirection::CounterClockwise);
    }
});
