//! # Raw Spectrum Loader
//!
//! Reads the raw frequency-domain measurement files of a session into
//! complex [`Spectrum`] matrices of shape (frequencies × antenna positions).
//!
//! Counter-clockwise scans (file names carrying a `(foC` token) have their
//! antenna axis mirrored on load, so every spectrum handed downstream shares
//! the clockwise convention.

mod error;
mod filename;
mod raw;
mod session;


use ndarray::Array2;
use num_complex::Complex64;

pub use error::LoaderError;
pub use filename::{direction_of, SParam, ScanDirection, ScanFileName, COUNTER_CLOCKWISE_MARKER};
pub use raw::{load_scan, load_spectrum, normalize_direction, parse_spectrum};
pub use session::{list_scan_files, load_session_spectra};

/// Complex scattering parameters of one scan, (frequencies × antenna positions)
pub type Spectrum = Array2<Complex64>;
