use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use umbmid::dataset::CalibrationKind;
use umbmid::loader::SParam;

mod build;
mod config;
mod info;
mod validate;

pub use build::{BuildOptions, Domain};

/// umbmid - UM-BMID dataset assembly and time-domain reconstruction
#[derive(Parser)]
#[command(name = "umbmid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// S-parameter to load from each session.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SParamArg {
    /// Monostatic reflection (`Mono` files)
    S11,
    /// Multistatic transmission (`Multi` files)
    S21,
}

/// Reference scan subtracted during calibration.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CalibrationArg {
    /// Empty-chamber reference (`emp_ref_id`)
    Emp,
    /// Adipose-only reference (`adi_ref_id`)
    Adi,
}

/// Domain of the spectra written by `build`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DomainArg {
    /// Calibrated frequency-domain spectra
    Fd,
    /// Time domain via the inverse chirp z-transform
    Iczt,
    /// Time domain via a plain inverse DFT
    Idft,
}

impl From<SParamArg> for SParam {
    fn from(arg: SParamArg) -> Self {
        match arg {
            SParamArg::S11 => SParam::S11,
            SParamArg::S21 => SParam::S21,
        }
    }
}

impl From<CalibrationArg> for CalibrationKind {
    fn from(arg: CalibrationArg) -> Self {
        match arg {
            CalibrationArg::Emp => CalibrationKind::EmptyChamber,
            CalibrationArg::Adi => CalibrationKind::AdiposeOnly,
        }
    }
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Fd => Domain::Frequency,
            DomainArg::Iczt => Domain::Iczt,
            DomainArg::Idft => Domain::Idft,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the metadata of a raw directory tree
    Info {
        /// Raw data directory (one subdirectory per session)
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Validate a raw directory tree before building a dataset
    Validate {
        /// Raw data directory (one subdirectory per session)
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// S-parameter whose scan files are checked
        #[arg(short = 's', long, default_value = "s11", value_enum)]
        sparam: SParamArg,
    },

    /// Assemble and calibrate a dataset, optionally converting it to the time domain
    Build {
        /// Raw data directory (one subdirectory per session)
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Output directory for metadata.json, spectra.json and summary.json
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// S-parameter to load (default: s11)
        #[arg(short = 's', long, value_enum)]
        sparam: Option<SParamArg>,

        /// Reference scan to subtract (default: emp)
        #[arg(short = 'c', long, value_enum)]
        cal: Option<CalibrationArg>,

        /// Keep every scan instead of only calibrated fibroglandular-shell scans
        #[arg(long)]
        no_prune: bool,

        /// Output domain
        #[arg(short = 'd', long, default_value = "fd", value_enum)]
        domain: DomainArg,

        /// Start of the ICZT time window in seconds (default: 0)
        #[arg(long)]
        ini_t: Option<f64>,

        /// End of the ICZT time window in seconds (default: 6e-9)
        #[arg(long)]
        fin_t: Option<f64>,

        /// Number of ICZT time points (default: 1024)
        #[arg(long)]
        n_time_pts: Option<usize>,

        /// First scan frequency in Hz (default: 1e9)
        #[arg(long)]
        ini_f: Option<f64>,

        /// Last scan frequency in Hz (default: 8e9)
        #[arg(long)]
        fin_f: Option<f64>,

        /// Skip the ICZT phase compensation
        #[arg(long)]
        no_phase_compensation: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { dir } => info::run(dir),
        Commands::Validate { dir, sparam } => validate::run(dir, SParam::from(sparam)),
        Commands::Build {
            dir,
            output,
            config,
            sparam,
            cal,
            no_prune,
            domain,
            ini_t,
            fin_t,
            n_time_pts,
            ini_f,
            fin_f,
            no_phase_compensation,
        } => {
            let options = BuildOptions {
                sparam: sparam.map(SParam::from),
                calibration: cal.map(CalibrationKind::from),
                prune: no_prune.then_some(false),
                domain: Domain::from(domain),
                ini_t,
                fin_t,
                n_time_pts,
                ini_f,
                fin_f,
                phase_compensation: no_phase_compensation.then_some(false),
            };
            build::run(dir, output, config, options)
        }
    }
}
