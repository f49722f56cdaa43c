use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use umbmid::dataset::{CalibrationKind, Dataset, DatasetStats};
use umbmid::loader::SParam;
use umbmid::metadata::{MetadataSummary, ScanRecord};
use umbmid::sigproc::IcztParams;

use super::config::Config;

const DEFAULT_INI_T: f64 = 0.0;
const DEFAULT_FIN_T: f64 = 6e-9;
const DEFAULT_N_TIME_PTS: usize = 1024;
const DEFAULT_INI_F: f64 = 1e9;
const DEFAULT_FIN_F: f64 = 8e9;

/// Domain of the spectra produced by `build`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Frequency,
    Iczt,
    Idft,
}

/// Command-line settings of `build`; `None` falls back to the config file,
/// then to the defaults.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub sparam: Option<SParam>,
    pub calibration: Option<CalibrationKind>,
    pub prune: Option<bool>,
    pub domain: Domain,
    pub ini_t: Option<f64>,
    pub fin_t: Option<f64>,
    pub n_time_pts: Option<usize>,
    pub ini_f: Option<f64>,
    pub fin_f: Option<f64>,
    pub phase_compensation: Option<bool>,
}

/// Settings after merging flags, config file and defaults
#[derive(Debug, Clone, Serialize)]
struct BuildSettings {
    sparam: SParam,
    calibration: CalibrationKind,
    prune: bool,
    domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    iczt: Option<IcztParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phase_compensation: Option<bool>,
}

impl BuildSettings {
    fn resolve(options: BuildOptions, config: Config) -> Self {
        let iczt = IcztParams::new(
            options.ini_t.or(config.iczt.ini_t).unwrap_or(DEFAULT_INI_T),
            options.fin_t.or(config.iczt.fin_t).unwrap_or(DEFAULT_FIN_T),
            options
                .n_time_pts
                .or(config.iczt.n_time_pts)
                .unwrap_or(DEFAULT_N_TIME_PTS),
            options.ini_f.or(config.iczt.ini_f).unwrap_or(DEFAULT_INI_F),
            options.fin_f.or(config.iczt.fin_f).unwrap_or(DEFAULT_FIN_F),
        );
        let phase_compensation = options
            .phase_compensation
            .or(config.iczt.phase_compensation)
            .unwrap_or(true);
        let is_iczt = options.domain == Domain::Iczt;

        Self {
            sparam: options.sparam.or(config.dataset.sparam).unwrap_or_default(),
            calibration: options
                .calibration
                .or(config.calibration.kind)
                .unwrap_or(CalibrationKind::EmptyChamber),
            prune: options.prune.or(config.calibration.prune).unwrap_or(true),
            domain: options.domain,
            iczt: is_iczt.then_some(iczt),
            phase_compensation: is_iczt.then_some(phase_compensation),
        }
    }
}

#[derive(Serialize)]
struct BuildSummary<'a> {
    settings: &'a BuildSettings,
    dataset: DatasetStats,
    metadata: MetadataSummary,
}

/// Assemble, calibrate and convert a dataset, then write its records,
/// spectra and summary.
///
/// `metadata.json` and `spectra.json` are index-aligned.
pub fn run(dir: PathBuf, output: PathBuf, config: Option<PathBuf>, options: BuildOptions) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Raw data directory does not exist: {}", dir.display());
    }

    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    let settings = BuildSettings::resolve(options, config);

    info!("UM-BMID Dataset Builder");
    info!("=======================");
    info!("Input:  {}", dir.display());
    info!("Output: {}", output.display());
    info!("S-parameter: {}", settings.sparam);
    info!("Calibration: {} (prune: {})", settings.calibration, settings.prune);

    let calibrated = Dataset::calibrated_from_raw_dir(&dir, settings.sparam, settings.calibration, settings.prune)
        .with_context(|| format!("Failed to build dataset from {}", dir.display()))?;

    let dataset = match (settings.domain, settings.iczt) {
        (Domain::Iczt, Some(params)) => calibrated
            .iczt(&params, settings.phase_compensation.unwrap_or(true))
            .context("ICZT conversion failed")?,
        (Domain::Idft, _) => calibrated.idft().context("IDFT conversion failed")?,
        _ => calibrated,
    };

    fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let records: &[ScanRecord] = dataset.records();
    write_json(&output.join("metadata.json"), &records)?;
    write_json(&output.join("spectra.json"), &dataset.spectra())?;

    let summary = BuildSummary {
        settings: &settings,
        dataset: DatasetStats::from_dataset(&dataset),
        metadata: MetadataSummary::from_records(records),
    };
    write_json(&output.join("summary.json"), &summary)?;

    println!("{}", summary.dataset);
    println!("Output: {}", output.display());
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
