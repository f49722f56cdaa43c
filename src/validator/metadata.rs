use std::collections::HashMap;
use std::path::PathBuf;

use crate::metadata::{load_session, validate_schema, ScanRecord};

use super::structure::session_name;
use super::{ValidationCheck, ValidationReport};

/// Parsed metadata of one session
pub(crate) struct SessionRecords {
    pub dir: PathBuf,
    pub records: Vec<ScanRecord>,
}

/// Step 2: Metadata integrity validation.
///
/// Returns the sessions whose metadata parsed.
pub(crate) fn check_metadata_integrity(
    sessions: &[PathBuf],
    report: &mut ValidationReport,
) -> Vec<SessionRecords> {
    match validate_schema() {
        Ok(()) => report.add_check(ValidationCheck::ok("Metadata schema")),
        Err(e) => report.add_check(ValidationCheck::failed("Metadata schema", e.to_string())),
    }

    let mut catalog = Vec::with_capacity(sessions.len());
    for dir in sessions {
        let name = format!("Metadata parses: {}", session_name(dir));
        match load_session(dir) {
            Ok(records) => {
                report.add_check(ValidationCheck::ok(format!("{} ({} rows)", name, records.len())));
                catalog.push(SessionRecords {
                    dir: dir.clone(),
                    records,
                });
            }
            Err(e) => report.add_check(ValidationCheck::failed(name, e.to_string())),
        }
    }

    let records: Vec<&ScanRecord> = catalog.iter().flat_map(|s| &s.records).collect();
    if !records.is_empty() {
        check_birads(&records, report);
        check_ids(&records, report);
    }
    catalog
}

fn check_birads(records: &[&ScanRecord], report: &mut ValidationReport) {
    let invalid: Vec<i64> = records
        .iter()
        .filter_map(|r| r.birads)
        .filter(|b| !(1..=4).contains(b))
        .collect();
    if invalid.is_empty() {
        report.add_check(ValidationCheck::ok("BI-RADS classes in 1-4"));
    } else {
        report.add_check(ValidationCheck::warning(
            "BI-RADS classes in 1-4",
            format!("{} rows outside 1-4 (e.g. {})", invalid.len(), invalid[0]),
        ));
    }
}

fn check_ids(records: &[&ScanRecord], report: &mut ValidationReport) {
    let missing = records.iter().filter(|r| r.id.is_none()).count();
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for id in records.iter().filter_map(|r| r.id) {
        *seen.entry(id).or_default() += 1;
    }
    let mut duplicated: Vec<i64> = seen.into_iter().filter(|(_, n)| *n > 1).map(|(id, _)| id).collect();
    duplicated.sort_unstable();

    if missing == 0 && duplicated.is_empty() {
        report.add_check(ValidationCheck::ok("Scan ids unique"));
        return;
    }
    if missing > 0 {
        report.add_check(ValidationCheck::warning(
            "Scan ids present",
            format!("{} rows without an id", missing),
        ));
    }
    if !duplicated.is_empty() {
        report.add_check(ValidationCheck::warning(
            "Scan ids unique",
            format!("Duplicated ids: {:?}", duplicated),
        ));
    }
}
