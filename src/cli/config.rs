//! TOML configuration file for the `build` command.
//!
//! Instead of passing many CLI flags, settings can live in a config file:
//!
//! ```toml
//! # umbmid.toml
//! [dataset]
//! sparam = "s11"
//!
//! [calibration]
//! kind = "emp"
//! prune = true
//!
//! [iczt]
//! ini_t = 0.0
//! fin_t = 6e-9
//! n_time_pts = 1024
//! ini_f = 1e9
//! fin_f = 8e9
//! phase_compensation = true
//! ```
//!
//! Flags given on the command line take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use umbmid::dataset::CalibrationKind;
use umbmid::loader::SParam;

/// Root configuration structure for umbmid.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dataset assembly settings.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Calibration settings.
    #[serde(default)]
    pub calibration: CalibrationConfig,

    /// Time-domain conversion settings.
    #[serde(default)]
    pub iczt: IcztConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// S-parameter to load (`s11` or `s21`).
    pub sparam: Option<SParam>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationConfig {
    /// Reference scan kind (`emp` or `adi`).
    pub kind: Option<CalibrationKind>,

    /// Keep only calibrated scans of phantoms with a fibroglandular shell.
    pub prune: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IcztConfig {
    pub ini_t: Option<f64>,
    pub fin_t: Option<f64>,
    pub n_time_pts: Option<usize>,
    pub ini_f: Option<f64>,
    pub fin_f: Option<f64>,
    pub phase_compensation: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
