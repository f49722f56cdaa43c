use crate::loader::{load_session_spectra, SParam};

use super::metadata::SessionRecords;
use super::structure::session_name;
use super::{ValidationCheck, ValidationReport};

/// Step 3: Scan data validation
pub(crate) fn check_scan_data(catalog: &[SessionRecords], sparam: SParam, report: &mut ValidationReport) {
    let mut shape: Option<(usize, usize)> = None;
    let mut scans = 0usize;
    let mut mismatched = 0usize;

    for session in catalog {
        let name = format!("Scan files: {}", session_name(&session.dir));
        match load_session_spectra(&session.dir, &session.records, sparam) {
            Ok(spectra) => {
                report.add_check(ValidationCheck::ok(format!(
                    "{} ({} {} scans)",
                    name,
                    spectra.len(),
                    sparam
                )));
                for spectrum in &spectra {
                    scans += 1;
                    match shape {
                        None => shape = Some(spectrum.dim()),
                        Some(expected) if expected != spectrum.dim() => mismatched += 1,
                        Some(_) => {}
                    }
                }
            }
            Err(e) => report.add_check(ValidationCheck::failed(name, e.to_string())),
        }
    }

    let Some((n_freqs, n_positions)) = shape else {
        return;
    };
    if mismatched == 0 {
        report.add_check(ValidationCheck::ok(format!(
            "Spectrum shapes consistent ({} x {})",
            n_freqs, n_positions
        )));
    } else {
        report.add_check(ValidationCheck::failed(
            "Spectrum shapes consistent",
            format!(
                "{} of {} scans differ from {} x {}",
                mismatched, scans, n_freqs, n_positions
            ),
        ));
    }
}
