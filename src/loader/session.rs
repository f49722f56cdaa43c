use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::filename::{SParam, ScanFileName};
use super::raw::{load_spectrum, normalize_direction};
use super::{LoaderError, Spectrum};
use crate::metadata::{ScanRecord, METADATA_SUFFIX};

/// Scan files of one session holding the requested S-parameter, sorted by name
pub fn list_scan_files(session_dir: &Path, sparam: SParam) -> Result<Vec<PathBuf>, LoaderError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(session_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(METADATA_SUFFIX) || !name.contains(sparam.marker()) {
            continue;
        }
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

/// Load every scan of a session, aligned with the session's metadata rows.
///
/// Each scan file is paired with the record whose `experiment_index` equals
/// the index embedded in the file name. The returned spectra are in record
/// order, so `spectra[i]` belongs to `records[i]`.
pub fn load_session_spectra(
    session_dir: &Path,
    records: &[ScanRecord],
    sparam: SParam,
) -> Result<Vec<Spectrum>, LoaderError> {
    let mut slots: Vec<Option<Spectrum>> = vec![None; records.len()];

    for file in list_scan_files(session_dir, sparam)? {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let scan_name =
            ScanFileName::parse(&name).ok_or_else(|| LoaderError::InvalidFileName(file.clone()))?;
        let index = scan_name.experiment_index;

        let mut matches = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.experiment_index == Some(index))
            .map(|(i, _)| i);
        let slot = matches.next().ok_or_else(|| LoaderError::UnmatchedExperiment {
            file: file.clone(),
            session: session_dir.to_path_buf(),
            index,
        })?;
        if matches.next().is_some() || slots[slot].is_some() {
            return Err(LoaderError::DuplicateExperiment {
                session: session_dir.to_path_buf(),
                index,
            });
        }

        debug!("Loading scan {} (experiment {})", name, index);
        let spectrum = load_spectrum(&file)?;
        slots[slot] = Some(normalize_direction(spectrum, scan_name.direction));
    }

    slots
        .into_iter()
        .zip(records)
        .map(|(slot, record)| {
            slot.ok_or_else(|| LoaderError::MissingExperiment {
                session: session_dir.to_path_buf(),
                index: record.experiment_index,
            })
        })
        .collect()
}
