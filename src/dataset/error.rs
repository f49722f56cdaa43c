use crate::loader::LoaderError;
use crate::metadata::MetadataError;
use crate::sigproc::SigprocError;

/// Errors that can occur during dataset assembly and calibration
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Error parsing session metadata
    #[error("Metadata error: {0}")]
    MetadataError(#[from] MetadataError),

    /// Error loading raw scan files
    #[error("Loader error: {0}")]
    LoaderError(#[from] LoaderError),

    /// Error transforming spectra
    #[error("Signal processing error: {0}")]
    SigprocError(#[from] SigprocError),

    /// Records and spectra differ in count
    #[error("Dataset has {records} records but {spectra} spectra")]
    LengthMismatch {
        /// Number of records
        records: usize,
        /// Number of spectra
        spectra: usize,
    },

    /// A spectrum's shape differs from the rest of the dataset
    #[error("Spectrum {index} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Position of the spectrum in the dataset
        index: usize,
        /// Shape shared by the dataset
        expected: (usize, usize),
        /// Shape of the offending spectrum
        found: (usize, usize),
    },

    /// A declared calibration reference does not resolve to exactly one scan
    #[error("Reference {reference_id} of scan {record_id:?} matches {matches} scans, expected exactly one")]
    ReferenceResolution {
        /// Id of the scan declaring the reference
        record_id: Option<i64>,
        /// Declared reference id
        reference_id: i64,
        /// Number of scans carrying that id
        matches: usize,
    },
}
