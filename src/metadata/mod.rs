//! # Metadata Catalog
//!
//! Parses the per-session metadata files of a raw UM-BMID directory tree into
//! typed [`ScanRecord`]s.
//!
//! ## Layout
//!
//! ```text
//! raw/
//! ├── 2019-07-17/
//! │   ├── 2019-07-17-metadata.csv
//! │   ├── 20190717_expt01_Mono_.txt
//! │   └── 20190717_expt02_Mono_(foC_.txt
//! └── 2019-07-18/
//!     └── ...
//! ```
//!
//! Every header of a metadata file must name one of the 24 [`ScanField`]s;
//! every cell is coerced to the field's [`FieldType`]. Empty cells become
//! `None` (numeric fields) or the empty string (text fields).

mod catalog;
mod error;
mod record;
mod schema;
mod summary;

#[cfg(test)]
mod tests;

pub use catalog::{
    list_sessions, load_catalog, load_session, parse_reader, session_metadata_path,
    METADATA_SUFFIX,
};
pub use error::MetadataError;
pub use record::ScanRecord;
pub use schema::{validate_schema, FieldType, FieldValue, ScanField};
pub use summary::{ClassBreakdown, MetadataSummary};

/// Values of one field across a list of records
pub fn field_values(records: &[ScanRecord], field: ScanField) -> Vec<FieldValue> {
    records.iter().map(|r| r.value(field)).collect()
}
