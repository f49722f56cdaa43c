use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::{Dataset, DatasetError};
use crate::loader::Spectrum;
use crate::metadata::{ScanField, ScanRecord};

/// Which reference scan is subtracted during calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalibrationKind {
    /// Empty-chamber scan, referenced by `emp_ref_id`
    #[serde(rename = "emp", alias = "empty-chamber")]
    EmptyChamber,
    /// Adipose-only phantom scan, referenced by `adi_ref_id`
    #[serde(rename = "adi", alias = "adipose-only")]
    AdiposeOnly,
}

impl CalibrationKind {
    /// Metadata field holding the reference id
    pub fn reference_field(&self) -> ScanField {
        match self {
            CalibrationKind::EmptyChamber => ScanField::EmptyRefId,
            CalibrationKind::AdiposeOnly => ScanField::AdiposeRefId,
        }
    }

    /// Reference id declared by `record`, `None` when the cell was empty
    pub fn reference_id(&self, record: &ScanRecord) -> Option<i64> {
        match self {
            CalibrationKind::EmptyChamber => record.empty_ref_id,
            CalibrationKind::AdiposeOnly => record.adipose_ref_id,
        }
    }

    /// Short name used in file names and configuration
    pub fn short_name(&self) -> &'static str {
        match self {
            CalibrationKind::EmptyChamber => "emp",
            CalibrationKind::AdiposeOnly => "adi",
        }
    }
}

impl fmt::Display for CalibrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationKind::EmptyChamber => write!(f, "empty-chamber"),
            CalibrationKind::AdiposeOnly => write!(f, "adipose-only"),
        }
    }
}

impl FromStr for CalibrationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emp" | "empty-chamber" => Ok(CalibrationKind::EmptyChamber),
            "adi" | "adipose-only" => Ok(CalibrationKind::AdiposeOnly),
            other => Err(format!(
                "unknown calibration kind '{}', expected emp or adi",
                other
            )),
        }
    }
}

/// Lookup from scan id to dataset positions.
///
/// Keeps every position per id so that ambiguous references are detected.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    positions: HashMap<i64, Vec<usize>>,
}

impl ReferenceIndex {
    /// Index the ids of `records`; records without an id are skipped
    pub fn new(records: &[ScanRecord]) -> Self {
        let mut positions: HashMap<i64, Vec<usize>> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            if let Some(id) = record.id {
                positions.entry(id).or_default().push(i);
            }
        }
        Self { positions }
    }

    /// Position of the single other scan carrying `reference_id`.
    ///
    /// `position` is where the referencing `record` sits in the dataset; a
    /// scan never resolves to itself.
    pub fn resolve(
        &self,
        position: usize,
        record: &ScanRecord,
        reference_id: i64,
    ) -> Result<usize, DatasetError> {
        let candidates: Vec<usize> = self
            .positions
            .get(&reference_id)
            .map(|found| found.iter().copied().filter(|&i| i != position).collect())
            .unwrap_or_default();
        match candidates.as_slice() {
            [only] => Ok(*only),
            other => Err(DatasetError::ReferenceResolution {
                record_id: record.id,
                reference_id,
                matches: other.len(),
            }),
        }
    }
}

/// Subtract each scan's reference scan.
///
/// Scans declaring a reference id of `kind` get `own − reference`; scans
/// without one get an all-zero spectrum. A declared id that does not match
/// exactly one other scan of `dataset` is an error.
///
/// With `prune`, only scans of phantoms with a fibroglandular shell that
/// declared a reference are kept, in input order.
pub fn calibrate(
    dataset: &Dataset,
    kind: CalibrationKind,
    prune: bool,
) -> Result<Dataset, DatasetError> {
    let records = dataset.records();
    let spectra = dataset.spectra();
    let index = ReferenceIndex::new(records);

    info!(
        "Calibrating {} scans against {} references",
        dataset.len(),
        kind
    );

    let mut calibrated: Vec<Spectrum> = Vec::with_capacity(dataset.len());
    let mut referenced = Vec::with_capacity(dataset.len());
    for (position, (record, spectrum)) in dataset.iter().enumerate() {
        match kind.reference_id(record) {
            Some(reference_id) => {
                let ref_idx = index.resolve(position, record, reference_id)?;
                debug!("Scan {:?}: subtracting reference {}", record.id, reference_id);
                calibrated.push(spectrum - &spectra[ref_idx]);
                referenced.push(true);
            }
            None => {
                calibrated.push(Array2::zeros(spectrum.dim()));
                referenced.push(false);
            }
        }
    }

    if !prune {
        return dataset.with_spectra(calibrated);
    }

    let (kept_records, kept_spectra): (Vec<_>, Vec<_>) = records
        .iter()
        .zip(calibrated)
        .zip(referenced)
        .filter(|((record, _), has_reference)| *has_reference && record.has_fibroglandular())
        .map(|((record, spectrum), _)| (record.clone(), spectrum))
        .unzip();
    let pruned = Dataset::from_parts(kept_records, kept_spectra)?;

    if pruned.is_empty() {
        warn!("Pruning removed every scan; no calibrated {} scans with a fibroglandular shell", kind);
    } else {
        info!("Pruned dataset to {} of {} scans", pruned.len(), dataset.len());
    }
    Ok(pruned)
}
