use std::path::Path;

use log::info;

use super::calibration::{calibrate, CalibrationKind};
use super::{Dataset, DatasetError};
use crate::loader::{load_session_spectra, SParam};
use crate::metadata::{list_sessions, load_session, validate_schema};

impl Dataset {
    /// Assemble the uncalibrated dataset of a raw directory tree.
    ///
    /// Sessions are visited in name order; within a session, scans follow
    /// the rows of its metadata file.
    pub fn from_raw_dir<P: AsRef<Path>>(root: P, sparam: SParam) -> Result<Self, DatasetError> {
        validate_schema()?;

        let root = root.as_ref();
        let mut dataset = Dataset::new();
        for session in list_sessions(root)? {
            info!("Working on: {}", session.display());
            let records = load_session(&session)?;
            let spectra = load_session_spectra(&session, &records, sparam)?;
            for (record, spectrum) in records.into_iter().zip(spectra) {
                dataset.push(record, spectrum)?;
            }
        }

        info!(
            "Loaded {} {} scans from {}",
            dataset.len(),
            sparam,
            root.display()
        );
        Ok(dataset)
    }

    /// Assemble the dataset of a raw directory tree and calibrate it
    pub fn calibrated_from_raw_dir<P: AsRef<Path>>(
        root: P,
        sparam: SParam,
        kind: CalibrationKind,
        prune: bool,
    ) -> Result<Self, DatasetError> {
        let raw = Self::from_raw_dir(root, sparam)?;
        calibrate(&raw, kind, prune)
    }
}
