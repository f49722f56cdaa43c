//! # Raw Directory Validation
//!
//! Checks a raw UM-BMID directory tree before a dataset is assembled from
//! it, so that every problem is reported at once instead of one error at a
//! time.
//!
//! ## Validation Checklist
//!
//! 1. **Structure Check**: root directory, session directories, metadata files
//! 2. **Metadata Integrity**: every metadata file parses; BI-RADS range, ids
//! 3. **Scan Data**: every scan file matches one metadata row; shapes agree
//! 4. **References**: empty-chamber and adipose-only references resolve
//!
//! ## Usage
//!
//! ```rust,no_run
//! use umbmid::loader::SParam;
//! use umbmid::validator::validate_raw_dir;
//! use std::path::Path;
//!
//! match validate_raw_dir(Path::new("raw/"), SParam::S11) {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("Validation failed: {}", e),
//! }
//! ```

use std::path::Path;

use anyhow::Result;

use crate::loader::SParam;

pub use report::{CheckStatus, CheckTally, ValidationCheck, ValidationReport};

mod data;
mod metadata;
mod references;
mod report;
mod structure;

#[cfg(test)]
mod tests;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The directory tree cannot be validated at all
    #[error("Structure error: {0}")]
    StructureError(String),
}

/// Main validation entry point
pub fn validate_raw_dir(path: &Path, sparam: SParam) -> Result<ValidationReport> {
    let mut report = ValidationReport::new(path.display().to_string());

    // 1. Structure Check
    let sessions = structure::check_structure(path, &mut report)?;

    // 2. Metadata Integrity Check
    let catalog = metadata::check_metadata_integrity(&sessions, &mut report);

    // 3. Scan Data Check
    data::check_scan_data(&catalog, sparam, &mut report);

    // 4. Reference Check
    let records: Vec<_> = catalog.into_iter().flat_map(|s| s.records).collect();
    references::check_references(&records, &mut report);

    Ok(report)
}
