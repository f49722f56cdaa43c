use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::{Array2, Axis};
use num_complex::Complex64;

use super::filename::{direction_of, ScanDirection};
use super::{LoaderError, Spectrum};

/// Parse a raw measurement file without touching the antenna axis.
///
/// The file is a whitespace-separated real matrix of shape
/// (frequencies × 2·positions): column `2k` holds the real part and column
/// `2k + 1` the imaginary part of antenna position `k`.
pub fn load_spectrum<P: AsRef<Path>>(path: P) -> Result<Spectrum, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse_spectrum(BufReader::new(file), path)
}

/// Parse a raw measurement file and bring it to the clockwise convention,
/// judging the scan direction from the file name.
pub fn load_scan<P: AsRef<Path>>(path: P) -> Result<Spectrum, LoaderError> {
    let path = path.as_ref();
    let spectrum = load_spectrum(path)?;
    Ok(normalize_direction(spectrum, direction_of(path)))
}

/// Mirror the antenna axis of counter-clockwise scans
pub fn normalize_direction(mut spectrum: Spectrum, direction: ScanDirection) -> Spectrum {
    if direction == ScanDirection::CounterClockwise {
        spectrum.invert_axis(Axis(1));
    }
    spectrum
}

/// Parse raw measurement text from a reader.
///
/// Blank lines and lines starting with `#` are skipped. `source` labels
/// errors only.
pub fn parse_spectrum<R: BufRead>(reader: R, source: &Path) -> Result<Spectrum, LoaderError> {
    let mut values: Vec<f64> = Vec::new();
    let mut width: Option<usize> = None;
    let mut rows = 0usize;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let before = values.len();
        for token in trimmed.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| LoaderError::InvalidNumber {
                path: source.to_path_buf(),
                line: line_idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
        let found = values.len() - before;

        match width {
            None => {
                if found % 2 != 0 {
                    return Err(LoaderError::OddColumnCount {
                        path: source.to_path_buf(),
                        columns: found,
                    });
                }
                width = Some(found);
            }
            Some(expected) if expected != found => {
                return Err(LoaderError::RaggedRow {
                    path: source.to_path_buf(),
                    line: line_idx + 1,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let width = match width {
        Some(w) if w > 0 => w,
        _ => return Err(LoaderError::EmptyFile(source.to_path_buf())),
    };

    let positions = width / 2;
    Ok(Array2::from_shape_fn((rows, positions), |(f, k)| {
        let base = f * width + 2 * k;
        Complex64::new(values[base], values[base + 1])
    }))
}
