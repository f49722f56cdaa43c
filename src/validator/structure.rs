use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::metadata::{list_sessions, session_metadata_path};

use super::{ValidationCheck, ValidationError, ValidationReport};

/// Step 1: Structure validation.
///
/// Returns the session directories that carry a metadata file.
pub(crate) fn check_structure(root: &Path, report: &mut ValidationReport) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        report.add_check(ValidationCheck::failed(
            "Raw directory exists",
            format!("Not a directory: {}", root.display()),
        ));
        anyhow::bail!(ValidationError::StructureError(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    report.add_check(ValidationCheck::ok("Raw directory exists"));

    let sessions = list_sessions(root)?;
    if sessions.is_empty() {
        report.add_check(ValidationCheck::warning(
            "Session directories",
            "No session directories found",
        ));
        return Ok(sessions);
    }
    report.add_check(ValidationCheck::ok(format!(
        "Session directories ({} found)",
        sessions.len()
    )));

    let (with_metadata, without): (Vec<_>, Vec<_>) = sessions
        .into_iter()
        .partition(|s| session_metadata_path(s).is_file());
    for session in &without {
        report.add_check(ValidationCheck::failed(
            format!("Metadata file: {}", session_name(session)),
            format!("Missing {}", session_metadata_path(session).display()),
        ));
    }
    if without.is_empty() {
        report.add_check(ValidationCheck::ok("Metadata files present"));
    }

    Ok(with_metadata)
}

pub(crate) fn session_name(session: &Path) -> String {
    session
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| session.display().to_string())
}
