use super::*;
use std::fs;
use std::path::Path;

fn write_session(root: &Path, name: &str, metadata: Option<&str>, scans: &[(&str, &str)]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    if let Some(metadata) = metadata {
        fs::write(dir.join(format!("{}-metadata.csv", name)), metadata).unwrap();
    }
    for (file, body) in scans {
        fs::write(dir.join(file), body).unwrap();
    }
}

fn check<'a>(report: &'a ValidationReport, prefix: &str) -> &'a ValidationCheck {
    report
        .checks
        .iter()
        .find(|c| c.name.starts_with(prefix))
        .unwrap_or_else(|| panic!("no check named {:?} in\n{}", prefix, report))
}

#[test]
fn test_validation_report_display() {
    let mut report = ValidationReport::new("raw/");
    report.add_check(ValidationCheck::ok("Test check 1"));
    report.add_check(ValidationCheck::warning("Test check 2", "This is a warning"));
    report.add_check(ValidationCheck::failed("Test check 3", "This failed"));

    let output = format!("{}", report);
    assert!(output.contains("Directory: raw/"));
    assert!(output.contains("✓"));
    assert!(output.contains("⚠"));
    assert!(output.contains("✗"));
    assert!(output.contains("1 passed, 1 warnings, 1 failed"));
    assert!(output.contains("Validation FAILED"));
    assert_eq!(report.failures().count(), 1);
    assert_eq!(
        report.tally(),
        CheckTally {
            passed: 1,
            warnings: 1,
            failed: 1
        }
    );
}

#[test]
fn test_plain_and_colored_reports_agree() {
    let mut report = ValidationReport::new("raw/");
    report.add_check(ValidationCheck::ok("Scan ids unique"));
    report.add_check(ValidationCheck::warning("BI-RADS in range", "1 out of range"));

    #[cfg(feature = "colorized_output")]
    console::set_colors_enabled(false);
    assert_eq!(report.format_colored(), report.to_string());

    let output = report.to_string();
    assert!(output.contains("[✓] Scan ids unique\n"));
    assert!(output.contains("[⚠] BI-RADS in range - WARNING: 1 out of range\n"));
    assert!(output.ends_with("Validation PASSED with warnings\n"));
    assert_eq!(report.tally().failed, 0);
}

#[test]
fn test_missing_root_is_a_structure_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = validate_raw_dir(&tmp.path().join("nope"), SParam::S11).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::StructureError(_))
    ));
}

#[test]
fn test_clean_tree_passes() {
    let tmp = tempfile::tempdir().unwrap();
    write_session(
        tmp.path(),
        "s1",
        Some("n_expt,id,phant_id,birads,adi_ref_id,emp_ref_id\n1,1,,,,\n2,2,A2,2,,1\n3,3,A2F1,2,2,1\n"),
        &[
            ("d_expt01_Mono_.txt", "1 0 2 0\n"),
            ("d_expt02_Mono_.txt", "1 0 2 0\n"),
            ("d_expt03_Mono_(foC_.txt", "1 0 2 0\n"),
        ],
    );

    let report = validate_raw_dir(tmp.path(), SParam::S11).unwrap();
    assert!(!report.has_failures(), "{}", report);
    assert!(!report.has_warnings(), "{}", report);
    assert!(matches!(check(&report, "Spectrum shapes").status, CheckStatus::Ok));
    assert!(report.to_string().contains("Validation PASSED"));
}

#[test]
fn test_missing_root_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(validate_raw_dir(&tmp.path().join("nope"), SParam::S11).is_err());
}

#[test]
fn test_problems_are_collected() {
    let tmp = tempfile::tempdir().unwrap();
    write_session(tmp.path(), "a", None, &[]);
    write_session(
        tmp.path(),
        "b",
        Some("n_expt,id,birads,emp_ref_id\n1,1,7,\n2,1,2,9\n"),
        &[("d_expt01_Mono_.txt", "1 0 2 0\n"), ("d_expt02_Mono_.txt", "1 0\n")],
    );
    write_session(
        tmp.path(),
        "c",
        Some("n_expt,id,colour\n1,5,red\n"),
        &[],
    );

    let report = validate_raw_dir(tmp.path(), SParam::S11).unwrap();
    assert!(matches!(check(&report, "Metadata file: a").status, CheckStatus::Failed(_)));
    assert!(matches!(check(&report, "Metadata parses: b").status, CheckStatus::Ok));
    assert!(matches!(check(&report, "Metadata parses: c").status, CheckStatus::Failed(_)));
    assert!(matches!(check(&report, "BI-RADS").status, CheckStatus::Warning(_)));
    assert!(matches!(check(&report, "Scan ids unique").status, CheckStatus::Warning(_)));
    assert!(matches!(check(&report, "Spectrum shapes").status, CheckStatus::Failed(_)));
    assert!(matches!(
        check(&report, "empty-chamber references").status,
        CheckStatus::Failed(_)
    ));
    assert!(matches!(
        check(&report, "adipose-only references").status,
        CheckStatus::Ok
    ));
}

#[test]
fn test_missing_scan_files_fail() {
    let tmp = tempfile::tempdir().unwrap();
    write_session(
        tmp.path(),
        "s1",
        Some("n_expt,id\n1,1\n"),
        &[("d_expt01_Mono_.txt", "1 0\n")],
    );

    let report = validate_raw_dir(tmp.path(), SParam::S21).unwrap();
    assert!(matches!(check(&report, "Scan files: s1").status, CheckStatus::Failed(_)));
}

#[test]
fn test_self_reference_fails() {
    let tmp = tempfile::tempdir().unwrap();
    write_session(
        tmp.path(),
        "s1",
        Some("n_expt,id,phant_id,emp_ref_id\n1,1,A2F1,1\n"),
        &[("d_expt01_Mono_.txt", "1 0 2 0\n")],
    );

    let report = validate_raw_dir(tmp.path(), SParam::S11).unwrap();
    match &check(&report, "empty-chamber references").status {
        CheckStatus::Failed(message) => assert!(message.contains("matches 0 scans"), "{}", message),
        other => panic!("expected a failed reference check, got {:?}", other),
    }
}
