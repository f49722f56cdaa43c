use super::DatasetError;
use crate::loader::Spectrum;
use crate::metadata::ScanRecord;

/// Index-aligned scan records and spectra.
///
/// `spectra()[i]` is the measurement described by `records()[i]`. All spectra
/// share one shape. There is no way to reorder one side without the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ScanRecord>,
    spectra: Vec<Spectrum>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair records with spectra, checking count and shape
    pub fn from_parts(records: Vec<ScanRecord>, spectra: Vec<Spectrum>) -> Result<Self, DatasetError> {
        if records.len() != spectra.len() {
            return Err(DatasetError::LengthMismatch {
                records: records.len(),
                spectra: spectra.len(),
            });
        }
        if let Some(first) = spectra.first() {
            let expected = first.dim();
            if let Some((index, s)) = spectra.iter().enumerate().find(|(_, s)| s.dim() != expected) {
                return Err(DatasetError::ShapeMismatch {
                    index,
                    expected,
                    found: s.dim(),
                });
            }
        }
        Ok(Self { records, spectra })
    }

    /// Append one scan
    pub fn push(&mut self, record: ScanRecord, spectrum: Spectrum) -> Result<(), DatasetError> {
        if let Some(expected) = self.shape() {
            if spectrum.dim() != expected {
                return Err(DatasetError::ShapeMismatch {
                    index: self.len(),
                    expected,
                    found: spectrum.dim(),
                });
            }
        }
        self.records.push(record);
        self.spectra.push(spectrum);
        Ok(())
    }

    /// Number of scans
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no scans
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shape shared by every spectrum, `None` when empty
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.spectra.first().map(|s| s.dim())
    }

    /// Scan records, in dataset order
    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    /// Spectra, in dataset order
    pub fn spectra(&self) -> &[Spectrum] {
        &self.spectra
    }

    /// Record and spectrum at `index`
    pub fn get(&self, index: usize) -> Option<(&ScanRecord, &Spectrum)> {
        Some((self.records.get(index)?, self.spectra.get(index)?))
    }

    /// Iterate over (record, spectrum) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&ScanRecord, &Spectrum)> {
        self.records.iter().zip(self.spectra.iter())
    }

    /// Keep the scans for which `keep` returns true, preserving order
    pub fn filter<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&ScanRecord, &Spectrum) -> bool,
    {
        let (records, spectra) = self
            .iter()
            .filter(|(r, s)| keep(r, s))
            .map(|(r, s)| (r.clone(), s.clone()))
            .unzip();
        Dataset { records, spectra }
    }

    /// Same records with replacement spectra (e.g. after a transform)
    pub fn with_spectra(&self, spectra: Vec<Spectrum>) -> Result<Dataset, DatasetError> {
        Dataset::from_parts(self.records.clone(), spectra)
    }

    /// Split into records and spectra
    pub fn into_parts(self) -> (Vec<ScanRecord>, Vec<Spectrum>) {
        (self.records, self.spectra)
    }
}
