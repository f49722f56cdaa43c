//! # Dataset Assembly
//!
//! Index-aligned collections of scan records and spectra, built from a raw
//! directory tree:
//!
//! ```text
//! {root}/
//! ├── {session}/
//! │   ├── {session}-metadata.csv
//! │   ├── ..._expt01_..._Mono.txt          # S11, clockwise
//! │   └── ..._expt02_(foC)_..._Mono.txt    # S11, counter-clockwise
//! └── {session}/
//!     └── ...
//! ```
//!
//! [`Dataset::from_raw_dir`] visits sessions in name order and keeps scans in
//! metadata-row order. [`calibrate`] subtracts the empty-chamber or
//! adipose-only reference of each scan and optionally prunes the result.
//! [`Dataset::iczt`] and [`Dataset::idft`] move the spectra to the time
//! domain.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use umbmid::dataset::{CalibrationKind, Dataset};
//! use umbmid::loader::SParam;
//! use umbmid::sigproc::IcztParams;
//!
//! let fd = Dataset::calibrated_from_raw_dir("raw/", SParam::S11, CalibrationKind::EmptyChamber, true)?;
//! let td = fd.iczt(&IcztParams::new(0.0, 6e-9, 1024, 1e9, 8e9), true)?;
//! println!("{}", umbmid::dataset::DatasetStats::from_dataset(&td));
//! # Ok::<(), umbmid::dataset::DatasetError>(())
//! ```

mod build;
mod calibration;
mod convert;
mod error;
mod stats;
mod types;

#[cfg(test)]
mod tests;

pub use calibration::{calibrate, CalibrationKind, ReferenceIndex};
pub use error::DatasetError;
pub use stats::DatasetStats;
pub use types::Dataset;
