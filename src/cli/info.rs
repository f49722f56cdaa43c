use anyhow::{Context, Result};
use std::path::PathBuf;

use umbmid::metadata::{list_sessions, load_catalog, MetadataSummary};

/// Display a content summary of a raw directory tree
pub fn run(dir: PathBuf) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Raw data directory does not exist: {}", dir.display());
    }

    let sessions = list_sessions(&dir).context("Failed to list sessions")?;
    let records = load_catalog(&dir).context("Failed to load metadata")?;
    let summary = MetadataSummary::from_records(&records);

    println!("UM-BMID Dataset Information");
    println!("===========================");
    println!("Directory: {}", dir.display());
    println!("Sessions: {}", sessions.len());
    println!();
    println!("{}", summary);

    Ok(())
}
