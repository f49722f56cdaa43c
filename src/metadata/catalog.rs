use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::schema::{validate_schema, ScanField};
use super::{MetadataError, ScanRecord};

/// Suffix of the per-session metadata file, `<session>-metadata.csv`
pub const METADATA_SUFFIX: &str = "-metadata.csv";

/// Path of the metadata file of a session directory
pub fn session_metadata_path(session_dir: &Path) -> PathBuf {
    let name = session_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    session_dir.join(format!("{}{}", name, METADATA_SUFFIX))
}

/// Session subdirectories of a raw data root, sorted by name.
///
/// Non-directory entries are skipped.
pub fn list_sessions<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, MetadataError> {
    let mut sessions = Vec::new();
    for entry in fs::read_dir(root.as_ref())? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            sessions.push(entry.path());
        }
    }
    sessions.sort();
    Ok(sessions)
}

/// Parse the metadata of every session under `root`.
///
/// Records are returned session by session (sessions in name order), rows
/// in file order within each session.
pub fn load_catalog<P: AsRef<Path>>(root: P) -> Result<Vec<ScanRecord>, MetadataError> {
    validate_schema()?;

    let root = root.as_ref();
    let mut records = Vec::new();
    for session in list_sessions(root)? {
        let session_records = load_session(&session)?;
        debug!(
            "Session {}: {} records",
            session.display(),
            session_records.len()
        );
        records.extend(session_records);
    }

    info!("Loaded {} metadata records from {}", records.len(), root.display());
    Ok(records)
}

/// Parse the metadata file of a single session directory
pub fn load_session<P: AsRef<Path>>(session_dir: P) -> Result<Vec<ScanRecord>, MetadataError> {
    let path = session_metadata_path(session_dir.as_ref());
    if !path.is_file() {
        return Err(MetadataError::MissingMetadataFile(path));
    }
    let file = File::open(&path)?;
    parse_reader(BufReader::new(file), &path)
}

/// Parse session metadata from a reader.
///
/// `source` labels errors; it does not need to exist on disk.
pub fn parse_reader<R: Read>(reader: R, source: &Path) -> Result<Vec<ScanRecord>, MetadataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(reader);

    let fields = parse_header(csv_reader.headers()?, source)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = ScanRecord::new();
        for (field, value) in fields.iter().zip(row.iter()) {
            record.set(*field, value, source)?;
        }
        records.push(record);
    }

    Ok(records)
}

fn parse_header(header: &csv::StringRecord, source: &Path) -> Result<Vec<ScanField>, MetadataError> {
    let mut seen = HashSet::new();
    header
        .iter()
        .map(|name| {
            let name = name.trim();
            let field = ScanField::from_name(name).ok_or_else(|| MetadataError::UnknownField {
                field: name.to_string(),
                path: source.to_path_buf(),
            })?;
            if !seen.insert(field) {
                return Err(MetadataError::DuplicateField {
                    field: name.to_string(),
                    path: source.to_path_buf(),
                });
            }
            Ok(field)
        })
        .collect()
}
