use anyhow::Result;
use log::info;
use std::path::PathBuf;

use umbmid::loader::SParam;
use umbmid::validator::validate_raw_dir;

/// Validate a raw directory tree
pub fn run(dir: PathBuf, sparam: SParam) -> Result<()> {
    info!("UM-BMID Validator");
    info!("=================");
    info!("Directory: {}", dir.display());
    info!("S-parameter: {}", sparam);

    match validate_raw_dir(&dir, sparam) {
        Ok(report) => {
            println!("{}", report.format_colored());

            // Exit with error code if validation failed
            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    }
}
