use crate::dataset::{CalibrationKind, ReferenceIndex};
use crate::metadata::ScanRecord;

use super::{ValidationCheck, ValidationReport};

/// Step 4: Calibration reference validation
pub(crate) fn check_references(records: &[ScanRecord], report: &mut ValidationReport) {
    if records.is_empty() {
        return;
    }
    let index = ReferenceIndex::new(records);

    for kind in [CalibrationKind::EmptyChamber, CalibrationKind::AdiposeOnly] {
        let name = format!("{} references resolve", kind);
        let unresolved: Vec<String> = records
            .iter()
            .enumerate()
            .filter_map(|(position, r)| {
                let reference_id = kind.reference_id(r)?;
                index.resolve(position, r, reference_id).err()
            })
            .map(|e| e.to_string())
            .collect();

        match unresolved.first() {
            None => report.add_check(ValidationCheck::ok(name)),
            Some(first) => report.add_check(ValidationCheck::failed(
                name,
                format!("{} unresolved; {}", unresolved.len(), first),
            )),
        }
    }
}
