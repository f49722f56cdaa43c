use super::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;

const SAMPLE_METADATA: &str = "\
n_expt,id,phant_id,tum_rad,tum_shape,tum_x,tum_y,tum_z,birads,adi_vol,fib_vol,adi_ref_id,emp_ref_id,date,n_session,ant_rad,ant_z
1,101,A2F1,,,,,,2,500.5,120.0,,,20190717,1,21.0,1.5
2,102,A2F1,1.5,sphere,2.0,-1.0,1.0,2,500.5,120.0,103,100,20190717,1,21.0,1.5
3,103,A2,,,,,,2,500.5,,,100,20190717,1,21.0,1.5";

fn parse(text: &str) -> Result<Vec<ScanRecord>, MetadataError> {
    parse_reader(Cursor::new(text), Path::new("test-metadata.csv"))
}

#[test]
fn test_metadata_parsing() {
    let records = parse(SAMPLE_METADATA).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].experiment_index, Some(1));
    assert_eq!(records[0].id, Some(101));
    assert_eq!(records[0].phantom_id, "A2F1");
    assert_eq!(records[0].tumor_radius, None);
    assert_eq!(records[0].tumor_shape, "");
    assert_eq!(records[0].adipose_volume, Some(500.5));

    assert_eq!(records[1].tumor_radius, Some(1.5));
    assert_eq!(records[1].tumor_shape, "sphere");
    assert_eq!(records[1].tumor_y, Some(-1.0));
    assert_eq!(records[1].adipose_ref_id, Some(103));
    assert_eq!(records[1].empty_ref_id, Some(100));
    assert_eq!(records[1].date, "20190717");
    assert_eq!(records[1].antenna_radius, Some(21.0));

    // Fields absent from the header stay missing
    assert_eq!(records[2].fibroglandular_volume, None);
    assert_eq!(records[2].fibroglandular_ref_id, None);
}

#[test]
fn test_unknown_field_is_rejected() {
    let text = "n_expt,id,colour\n1,2,red";
    match parse(text) {
        Err(MetadataError::UnknownField { field, .. }) => assert_eq!(field, "colour"),
        other => panic!("expected UnknownField, got {:?}", other),
    }
}

#[test]
fn test_duplicate_field_is_rejected() {
    let text = "n_expt,id,id\n1,2,3";
    assert!(matches!(
        parse(text),
        Err(MetadataError::DuplicateField { .. })
    ));
}

#[test]
fn test_type_coercion_error_names_field_and_file() {
    let text = "n_expt,id,tum_rad\n1,2,big";
    match parse(text) {
        Err(MetadataError::TypeCoercion {
            field,
            value,
            expected,
            path,
        }) => {
            assert_eq!(field, "tum_rad");
            assert_eq!(value, "big");
            assert_eq!(expected, "real");
            assert_eq!(path, Path::new("test-metadata.csv"));
        }
        other => panic!("expected TypeCoercion, got {:?}", other),
    }
}

#[test]
fn test_integer_fields_reject_decimals() {
    let text = "n_expt,id\n1,2.5";
    assert!(matches!(
        parse(text),
        Err(MetadataError::TypeCoercion { .. })
    ));
}

#[test]
fn test_cells_are_trimmed_and_nan_is_missing() {
    let text = "n_expt,id,tum_rad,phant_id\n 4 , 7 ,nan, A1F2 ";
    let records = parse(text).unwrap();
    assert_eq!(records[0].experiment_index, Some(4));
    assert_eq!(records[0].id, Some(7));
    assert_eq!(records[0].tumor_radius, None);
    assert_eq!(records[0].phantom_id, "A1F2");
}

#[test]
fn test_ragged_row_is_csv_error() {
    let text = "n_expt,id\n1,2,3";
    assert!(matches!(parse(text), Err(MetadataError::CsvError(_))));
}

#[test]
fn test_schema_is_valid() {
    validate_schema().unwrap();
    assert_eq!(ScanField::ALL.len(), 24);
    for field in ScanField::ALL {
        assert_eq!(ScanField::from_name(field.name()), Some(field));
    }
    assert_eq!(ScanField::from_name("nope"), None);
    assert_eq!(ScanField::Id.field_type(), FieldType::Integer);
    assert_eq!(ScanField::TumorRadius.field_type(), FieldType::Real);
    assert_eq!(ScanField::PhantomId.field_type(), FieldType::Text);
}

#[test]
fn test_value_lookup() {
    let records = parse(SAMPLE_METADATA).unwrap();
    let record = &records[1];

    assert_eq!(record.value(ScanField::Id), FieldValue::Integer(Some(102)));
    assert_eq!(record.value(ScanField::TumorRadius), FieldValue::Real(Some(1.5)));
    assert_eq!(
        record.value(ScanField::PhantomId),
        FieldValue::Text("A2F1".to_string())
    );
    assert!(records[0].value(ScanField::TumorRadius).is_missing());
    assert_eq!(record.value(ScanField::Birads).as_f64(), Some(2.0));

    let ids = field_values(&records, ScanField::Id);
    assert_eq!(
        ids,
        vec![
            FieldValue::Integer(Some(101)),
            FieldValue::Integer(Some(102)),
            FieldValue::Integer(Some(103)),
        ]
    );
}

#[test]
fn test_record_helpers() {
    let records = parse(SAMPLE_METADATA).unwrap();

    assert!(!records[0].has_tumor());
    assert_eq!(records[0].class_label(), 0);
    assert!(records[1].has_tumor());
    assert_eq!(records[1].class_label(), 1);

    assert_eq!(records[0].adipose_shell_id(), "A2");
    assert!(records[0].has_fibroglandular());
    assert!(!records[2].has_fibroglandular());

    let adjusted = records[0].adjusted_antenna_radius().unwrap();
    assert!((adjusted - (0.97 * (21.0 - 0.106) + 0.148)).abs() < 1e-12);

    let short = ScanRecord {
        phantom_id: "A".to_string(),
        ..Default::default()
    };
    assert_eq!(short.adipose_shell_id(), "A");
}

#[test]
fn test_summary_counts() {
    let records = parse(SAMPLE_METADATA).unwrap();
    let summary = MetadataSummary::from_records(&records);

    assert_eq!(summary.overall.total, 3);
    assert_eq!(summary.positive.total, 1);
    assert_eq!(summary.negative.total, 2);
    assert_eq!(summary.overall.birads, [0, 3, 0, 0]);
    assert_eq!(summary.overall.adipose_shells.get("A2"), Some(&3));
    assert_eq!(summary.tumor_sizes.get("1.5"), Some(&1));

    let text = summary.to_string();
    assert!(text.contains("Samples: 3"));
    assert!(text.contains("Positive samples:"));
}

#[test]
fn test_record_json_uses_column_names() {
    let records = parse(SAMPLE_METADATA).unwrap();
    let json = serde_json::to_string(&records[1]).unwrap();
    assert!(json.contains("\"phant_id\":\"A2F1\""));
    assert!(json.contains("\"emp_ref_id\":100"));

    let restored: ScanRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, records[1]);
}

#[test]
fn test_catalog_visits_sessions_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    for (session, id) in [("s2", 20), ("s1", 10)] {
        let session_dir = dir.path().join(session);
        fs::create_dir(&session_dir).unwrap();
        fs::write(
            session_dir.join(format!("{}-metadata.csv", session)),
            format!("n_expt,id\n1,{}\n2,{}\n", id, id + 1),
        )
        .unwrap();
    }
    // Stray files at the root are ignored
    fs::write(dir.path().join("README"), "not a session").unwrap();

    let records = load_catalog(dir.path()).unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(10), Some(11), Some(20), Some(21)]);
}

#[test]
fn test_missing_metadata_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("empty-session")).unwrap();

    assert!(matches!(
        load_catalog(dir.path()),
        Err(MetadataError::MissingMetadataFile(_))
    ));
}
