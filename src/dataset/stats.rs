use std::fmt;

use serde::{Deserialize, Serialize};

use super::Dataset;

/// Shape and class statistics of an assembled dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Number of scans
    pub scans: usize,

    /// Rows per spectrum (frequencies, or time points after a transform)
    pub samples: usize,

    /// Antenna positions per spectrum
    pub positions: usize,

    /// Scans of tumour-containing phantoms
    pub positive: usize,

    /// Scans of tumour-free phantoms
    pub negative: usize,
}

impl DatasetStats {
    /// Collect statistics from a dataset
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let (samples, positions) = dataset.shape().unwrap_or((0, 0));
        let positive = dataset.records().iter().filter(|r| r.has_tumor()).count();
        Self {
            scans: dataset.len(),
            samples,
            positions,
            positive,
            negative: dataset.len() - positive,
        }
    }
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dataset: {} scans of {} x {} samples ({} positive, {} negative)",
            self.scans, self.samples, self.positions, self.positive, self.negative
        )
    }
}
