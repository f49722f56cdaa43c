use super::*;
use crate::loader::{SParam, Spectrum};
use crate::metadata::ScanRecord;
use crate::sigproc::IcztParams;
use ndarray::Array2;
use num_complex::Complex64;
use std::fs;
use std::path::Path;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn filled(value: Complex64) -> Spectrum {
    Array2::from_elem((3, 2), value)
}

fn record(id: i64, phantom_id: &str, emp_ref_id: Option<i64>) -> ScanRecord {
    ScanRecord {
        id: Some(id),
        phantom_id: phantom_id.to_string(),
        empty_ref_id: emp_ref_id,
        ..Default::default()
    }
}

#[test]
fn test_from_parts_checks_alignment() {
    let records = vec![record(1, "A2F1", None), record(2, "A2F1", None)];

    assert!(matches!(
        Dataset::from_parts(records.clone(), vec![filled(c(0.0, 0.0))]),
        Err(DatasetError::LengthMismatch { records: 2, spectra: 1 })
    ));

    let spectra = vec![filled(c(0.0, 0.0)), Array2::zeros((3, 3))];
    match Dataset::from_parts(records, spectra) {
        Err(DatasetError::ShapeMismatch { index, expected, found }) => {
            assert_eq!(index, 1);
            assert_eq!(expected, (3, 2));
            assert_eq!(found, (3, 3));
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_push_and_filter_keep_pairs_together() {
    let mut dataset = Dataset::new();
    assert_eq!(dataset.shape(), None);
    dataset.push(record(1, "A2F1", None), filled(c(1.0, 0.0))).unwrap();
    dataset.push(record(2, "A3", None), filled(c(2.0, 0.0))).unwrap();
    assert!(dataset.push(record(3, "A2", None), Array2::zeros((4, 2))).is_err());

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.shape(), Some((3, 2)));

    let kept = dataset.filter(|r, _| r.phantom_id == "A3");
    let (r, s) = kept.get(0).unwrap();
    assert_eq!(r.id, Some(2));
    assert_eq!(s[[0, 0]], c(2.0, 0.0));
    assert!(kept.get(1).is_none());
}

#[test]
fn test_empty_chamber_subtraction() {
    let records = vec![record(1, "A2F1", None), record(2, "A2F1", Some(1))];
    let spectra = vec![filled(c(0.0, 0.0)), filled(c(2.0, 0.0))];
    let dataset = Dataset::from_parts(records, spectra).unwrap();

    let calibrated = calibrate(&dataset, CalibrationKind::EmptyChamber, false).unwrap();
    assert_eq!(calibrated.len(), 2);
    assert_eq!(calibrated.records(), dataset.records());
    // No reference declared: all zeros of the same shape
    assert_eq!(calibrated.spectra()[0], Array2::<Complex64>::zeros((3, 2)));
    assert_eq!(calibrated.spectra()[1], filled(c(2.0, 0.0)));

    let pruned = calibrate(&dataset, CalibrationKind::EmptyChamber, true).unwrap();
    assert_eq!(pruned.len(), 1);
    assert_eq!(pruned.records()[0].id, Some(2));
    assert_eq!(pruned.spectra()[0], filled(c(2.0, 0.0)));
}

#[test]
fn test_adipose_reference_uses_its_own_column() {
    let mut target = record(3, "A2F1", Some(1));
    target.adipose_ref_id = Some(2);
    let records = vec![record(1, "", None), record(2, "A2", None), target];
    let spectra = vec![filled(c(1.0, 0.0)), filled(c(0.5, 0.5)), filled(c(3.0, 1.0))];
    let dataset = Dataset::from_parts(records, spectra).unwrap();

    let adi = calibrate(&dataset, CalibrationKind::AdiposeOnly, true).unwrap();
    assert_eq!(adi.len(), 1);
    assert_eq!(adi.spectra()[0], filled(c(2.5, 0.5)));

    let emp = calibrate(&dataset, CalibrationKind::EmptyChamber, true).unwrap();
    assert_eq!(emp.spectra()[0], filled(c(2.0, 1.0)));
}

#[test]
fn test_pruning_keeps_order_and_requires_fibroglandular_shell() {
    let records = vec![
        record(10, "", None),
        record(11, "A2F1", Some(10)),
        record(12, "A3", Some(10)),
        record(13, "A1F3", Some(10)),
        record(14, "A1F3", None),
    ];
    let spectra = (0..5).map(|i| filled(c(i as f64, 0.0))).collect();
    let dataset = Dataset::from_parts(records, spectra).unwrap();

    let pruned = calibrate(&dataset, CalibrationKind::EmptyChamber, true).unwrap();
    let ids: Vec<_> = pruned.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(11), Some(13)]);
    assert_eq!(pruned.spectra()[1], filled(c(3.0, 0.0)));
}

#[test]
fn test_pruning_everything_is_not_an_error() {
    let dataset = Dataset::from_parts(vec![record(1, "A2", None)], vec![filled(c(1.0, 0.0))]).unwrap();
    let pruned = calibrate(&dataset, CalibrationKind::EmptyChamber, true).unwrap();
    assert!(pruned.is_empty());
}

#[test]
fn test_unresolvable_references() {
    let missing = Dataset::from_parts(
        vec![record(1, "A2F1", Some(99))],
        vec![filled(c(1.0, 0.0))],
    )
    .unwrap();
    match calibrate(&missing, CalibrationKind::EmptyChamber, false) {
        Err(DatasetError::ReferenceResolution {
            record_id,
            reference_id,
            matches,
        }) => {
            assert_eq!(record_id, Some(1));
            assert_eq!(reference_id, 99);
            assert_eq!(matches, 0);
        }
        other => panic!("expected ReferenceResolution, got {:?}", other),
    }

    let ambiguous = Dataset::from_parts(
        vec![record(5, "", None), record(5, "", None), record(6, "A2F1", Some(5))],
        vec![filled(c(0.0, 0.0)); 3],
    )
    .unwrap();
    assert!(matches!(
        calibrate(&ambiguous, CalibrationKind::EmptyChamber, false),
        Err(DatasetError::ReferenceResolution { matches: 2, .. })
    ));
}

#[test]
fn test_reference_index() {
    let records = vec![record(7, "", None), ScanRecord::default(), record(8, "", None)];
    let index = ReferenceIndex::new(&records);
    assert_eq!(index.resolve(0, &records[0], 8).unwrap(), 2);
    assert!(index.resolve(0, &records[0], 9).is_err());
    // A scan is never its own reference
    assert!(matches!(
        index.resolve(0, &records[0], 7),
        Err(DatasetError::ReferenceResolution { matches: 0, .. })
    ));
}

#[test]
fn test_self_reference_is_rejected() {
    let dataset = Dataset::from_parts(
        vec![record(1, "A2F1", Some(1))],
        vec![filled(c(1.0, 1.0))],
    )
    .unwrap();

    for prune in [true, false] {
        match calibrate(&dataset, CalibrationKind::EmptyChamber, prune) {
            Err(DatasetError::ReferenceResolution { record_id, reference_id, matches }) => {
                assert_eq!(record_id, Some(1));
                assert_eq!(reference_id, 1);
                assert_eq!(matches, 0);
            }
            other => panic!("expected ReferenceResolution, got {:?}", other),
        }
    }

    // Another scan sharing the id is still a valid reference
    let dataset = Dataset::from_parts(
        vec![record(1, "", None), record(1, "A2F1", Some(1))],
        vec![filled(c(0.5, 0.0)), filled(c(2.0, 1.0))],
    )
    .unwrap();
    let calibrated = calibrate(&dataset, CalibrationKind::EmptyChamber, true).unwrap();
    assert_eq!(calibrated.len(), 1);
    assert_eq!(calibrated.spectra()[0], filled(c(1.5, 1.0)));
}

#[test]
fn test_calibration_kind_names() {
    assert_eq!("emp".parse::<CalibrationKind>().unwrap(), CalibrationKind::EmptyChamber);
    assert_eq!("ADI".parse::<CalibrationKind>().unwrap(), CalibrationKind::AdiposeOnly);
    assert_eq!(
        "empty-chamber".parse::<CalibrationKind>().unwrap(),
        CalibrationKind::EmptyChamber
    );
    assert!("fib".parse::<CalibrationKind>().is_err());
    assert_eq!(CalibrationKind::AdiposeOnly.short_name(), "adi");
    assert_eq!(CalibrationKind::EmptyChamber.to_string(), "empty-chamber");
}

#[test]
fn test_dataset_stats() {
    let mut tumour = record(2, "A2F1", None);
    tumour.tumor_radius = Some(1.5);
    let dataset = Dataset::from_parts(
        vec![record(1, "A2F1", None), tumour],
        vec![filled(c(0.0, 0.0)); 2],
    )
    .unwrap();

    let stats = DatasetStats::from_dataset(&dataset);
    assert_eq!(stats.scans, 2);
    assert_eq!((stats.samples, stats.positions), (3, 2));
    assert_eq!((stats.positive, stats.negative), (1, 1));
    assert!(stats.to_string().contains("2 scans"));

    assert_eq!(DatasetStats::from_dataset(&Dataset::new()), DatasetStats::default());
}

#[test]
fn test_time_domain_conversions() {
    let dataset = Dataset::from_parts(
        vec![record(1, "A2F1", None), record(2, "A2F1", None)],
        vec![filled(c(1.0, 0.0)), filled(c(0.0, 2.0))],
    )
    .unwrap();

    let params = IcztParams::new(0.0, 6e-9, 16, 1e9, 8e9);
    let td = dataset.iczt(&params, true).unwrap();
    assert_eq!(td.len(), 2);
    assert_eq!(td.shape(), Some((16, 2)));
    assert_eq!(td.records(), dataset.records());

    // A constant spectrum is an impulse at t = 0 for the plain IDFT
    let idft = dataset.idft().unwrap();
    assert_eq!(idft.shape(), Some((3, 2)));
    assert!((idft.spectra()[0][[0, 0]] - c(1.0, 0.0)).norm() < 1e-12);
    assert!(idft.spectra()[0][[1, 0]].norm() < 1e-12);

    assert!(Dataset::new().iczt(&params, true).unwrap().is_empty());
    assert!(Dataset::new().idft().unwrap().is_empty());

    let bad = IcztParams::new(0.0, 6e-9, 1, 1e9, 8e9);
    assert!(matches!(
        dataset.iczt(&bad, true),
        Err(DatasetError::SigprocError(_))
    ));
}

#[test]
fn test_empty_dataset_still_checks_iczt_params() {
    let empty = Dataset::new();
    for bad in [
        IcztParams::new(0.0, 6e-9, 1, 1e9, 8e9),
        IcztParams::new(0.0, 6e-9, 8, 8e9, 1e9),
        IcztParams::new(0.0, f64::NAN, 8, 1e9, 8e9),
    ] {
        assert!(matches!(
            empty.iczt(&bad, true),
            Err(DatasetError::SigprocError(_))
        ));
        assert!(matches!(
            empty.iczt(&bad, false),
            Err(DatasetError::SigprocError(_))
        ));
    }
}

fn write_session(root: &Path, name: &str, metadata: &str, scans: &[(&str, &str)]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}-metadata.csv", name)), metadata).unwrap();
    for (file, body) in scans {
        fs::write(dir.join(file), body).unwrap();
    }
}

#[test]
fn test_from_raw_dir() {
    let tmp = tempfile::tempdir().unwrap();
    write_session(
        tmp.path(),
        "s2",
        "n_expt,id,phant_id,emp_ref_id\n1,3,A2F1,1\n",
        &[("d_expt01_Mono_.txt", "5 0 6 0\n7 0 8 0\n")],
    );
    write_session(
        tmp.path(),
        "s1",
        "n_expt,id,phant_id,emp_ref_id\n2,2,A2F1,1\n1,1,,\n",
        &[
            ("d_expt01_Mono_.txt", "1 0 1 0\n1 0 1 0\n"),
            ("d_expt02_Mono_(foC_.txt", "2 0 3 0\n2 0 3 0\n"),
        ],
    );

    let raw = Dataset::from_raw_dir(tmp.path(), SParam::S11).unwrap();
    let ids: Vec<_> = raw.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(2), Some(1), Some(3)]);
    // Counter-clockwise scan mirrored into clockwise order
    assert_eq!(raw.spectra()[0][[0, 0]], c(3.0, 0.0));

    let calibrated =
        Dataset::calibrated_from_raw_dir(tmp.path(), SParam::S11, CalibrationKind::EmptyChamber, true)
            .unwrap();
    assert_eq!(calibrated.len(), 2);
    assert_eq!(calibrated.spectra()[0][[0, 0]], c(2.0, 0.0));
    assert_eq!(calibrated.spectra()[1][[1, 1]], c(7.0, 0.0));

    assert!(matches!(
        Dataset::from_raw_dir(tmp.path(), SParam::S21),
        Err(DatasetError::LoaderError(_))
    ));
}
