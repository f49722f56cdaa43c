use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Token marking a counter-clockwise scan in a file name
pub const COUNTER_CLOCKWISE_MARKER: &str = "(foC";

/// Which scattering parameter a scan file holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SParam {
    /// Monostatic reflection, files marked `Mono`
    #[default]
    #[serde(rename = "s11")]
    S11,
    /// Multistatic transmission, files marked `Multi`
    #[serde(rename = "s21")]
    S21,
}

impl SParam {
    /// File name marker of this S-parameter
    pub fn marker(&self) -> &'static str {
        match self {
            SParam::S11 => "Mono",
            SParam::S21 => "Multi",
        }
    }
}

impl fmt::Display for SParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SParam::S11 => write!(f, "s11"),
            SParam::S21 => write!(f, "s21"),
        }
    }
}

impl FromStr for SParam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s11" => Ok(SParam::S11),
            "s21" => Ok(SParam::S21),
            other => Err(format!("unknown S-parameter '{}', expected s11 or s21", other)),
        }
    }
}

/// Rotation direction of the antenna during a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanDirection {
    /// Clockwise, the dataset's reference convention
    #[default]
    Clockwise,
    /// Counter-clockwise; the antenna axis must be mirrored
    CounterClockwise,
}

/// Information encoded in a raw scan file name.
///
/// Names look like `20190717_expt03_Mono_(foC_.txt`: the second
/// underscore-separated token is `expt` followed by the experiment index, a
/// `(foC` token marks a counter-clockwise scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanFileName {
    /// Experiment index, matched against the `n_expt` metadata column
    pub experiment_index: i64,
    /// Scan direction
    pub direction: ScanDirection,
}

impl ScanFileName {
    /// Parse a file name (with or without extension)
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let tokens: Vec<&str> = stem.split('_').collect();

        let expt = tokens.get(1)?.to_ascii_lowercase();
        let digits = expt.strip_prefix("expt")?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let experiment_index = digits.parse().ok()?;

        let direction = if tokens.contains(&COUNTER_CLOCKWISE_MARKER) {
            ScanDirection::CounterClockwise
        } else {
            ScanDirection::Clockwise
        };

        Some(Self {
            experiment_index,
            direction,
        })
    }
}

/// Direction of a scan file, judged from its name alone
pub fn direction_of(path: &Path) -> ScanDirection {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if stem.split('_').any(|t| t == COUNTER_CLOCKWISE_MARKER) {
        ScanDirection::CounterClockwise
    } else {
        ScanDirection::Clockwise
    }
}
