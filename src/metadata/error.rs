use std::path::PathBuf;

/// Errors that can occur during metadata processing
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// I/O error reading a metadata file or listing a directory
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error (including rows whose cell count differs from the header)
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// A header names a field that is not part of the scan schema
    #[error("Unknown metadata field '{field}' in {}", path.display())]
    UnknownField {
        /// The offending header name
        field: String,
        /// Metadata file containing the header
        path: PathBuf,
    },

    /// A header names the same field more than once
    #[error("Duplicate metadata field '{field}' in {}", path.display())]
    DuplicateField {
        /// The repeated header name
        field: String,
        /// Metadata file containing the header
        path: PathBuf,
    },

    /// A cell could not be coerced to its field's declared type
    #[error("Cannot parse '{value}' as {expected} for field '{field}' in {}", path.display())]
    TypeCoercion {
        /// Field whose cell failed to parse
        field: String,
        /// Raw cell text
        value: String,
        /// Declared type of the field
        expected: &'static str,
        /// Metadata file containing the cell
        path: PathBuf,
    },

    /// The session's metadata file is absent
    #[error("Missing metadata file: {}", .0.display())]
    MissingMetadataFile(PathBuf),

    /// The field schema itself is malformed
    #[error("Invalid field schema: {0}")]
    InvalidSchema(String),
}
