//! # umbmid - UM-BMID Dataset Reconstruction
//!
//! `umbmid` assembles the University of Manitoba Breast Microwave Imaging
//! Dataset (UM-BMID) from its raw measurement files and reconstructs the
//! time-domain response of every scan.
//!
//! ## Pipeline
//!
//! 1. [`metadata`]: parse per-session metadata files into typed
//!    [`ScanRecord`](metadata::ScanRecord)s against a fixed 24-field schema.
//! 2. [`loader`]: parse raw scan files into complex (frequencies x antenna
//!    positions) matrices, mirror counter-clockwise scans, and pair each file
//!    with its metadata row.
//! 3. [`dataset`]: join records and spectra into a [`Dataset`](dataset::Dataset),
//!    subtract the empty-chamber or adipose-only reference scan of each
//!    measurement, and optionally prune to calibrated fibroglandular scans.
//! 4. [`sigproc`]: convert spectra to the time domain with the inverse chirp
//!    z-transform (ICZT) and phase compensation, or a plain inverse DFT.
//!
//! [`validator`] checks a raw directory tree before assembly; [`antenna`]
//! holds the antenna phase-delay correction.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use umbmid::prelude::*;
//!
//! let fd = Dataset::calibrated_from_raw_dir(
//!     "raw/",
//!     SParam::S11,
//!     CalibrationKind::EmptyChamber,
//!     true,
//! )?;
//!
//! let params = IcztParams::new(0.0, 6e-9, 1024, 1e9, 8e9);
//! let td = fd.iczt(&params, true)?;
//!
//! println!("{}", DatasetStats::from_dataset(&td));
//! # Ok::<(), umbmid::dataset::DatasetError>(())
//! ```
//!
//! ## Raw Directory Layout
//!
//! ```text
//! raw/
//! ├── 2019-07-17/
//! │   ├── 2019-07-17-metadata.csv         # one row per scan
//! │   ├── 20190717_expt01_Mono_.txt        # S11, clockwise
//! │   ├── 20190717_expt01_Multi_.txt       # S21
//! │   └── 20190717_expt02_Mono_(foC_.txt   # S11, counter-clockwise
//! └── 2019-07-18/
//!     └── ...
//! ```
//!
//! Raw scan files are whitespace-separated text: one row per frequency, and
//! per antenna position a (real, imaginary) column pair.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod antenna;
pub mod dataset;
pub mod loader;
pub mod metadata;
pub mod sigproc;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::antenna::phase_delay_radius;
    pub use crate::dataset::{calibrate, CalibrationKind, Dataset, DatasetError, DatasetStats};
    pub use crate::loader::{load_scan, SParam, ScanDirection, Spectrum};
    pub use crate::metadata::{
        load_catalog, FieldType, FieldValue, MetadataSummary, ScanField, ScanRecord,
    };
    pub use crate::sigproc::{iczt, idft, IcztParams, IcztTransform, SigprocError};
    pub use crate::validator::{validate_raw_dir, ValidationReport};
}
