use serde::{Deserialize, Serialize};

use super::SigprocError;

/// Scan and output-window parameters of an ICZT
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IcztParams {
    /// Start of the time window (s)
    pub ini_t: f64,
    /// End of the time window (s)
    pub fin_t: f64,
    /// Number of output time points, at least 2
    pub n_time_pts: usize,
    /// Initial scan frequency (Hz)
    pub ini_f: f64,
    /// Final scan frequency (Hz)
    pub fin_f: f64,
}

impl IcztParams {
    /// Collect the five parameters
    pub fn new(ini_t: f64, fin_t: f64, n_time_pts: usize, ini_f: f64, fin_f: f64) -> Self {
        Self {
            ini_t,
            fin_t,
            n_time_pts,
            ini_f,
            fin_f,
        }
    }

    /// Check the parameters that do not depend on the spectrum
    pub fn validate(&self) -> Result<(), SigprocError> {
        if self.n_time_pts < 2 {
            return Err(SigprocError::InvalidParameter(format!(
                "n_time_pts must be at least 2, got {}",
                self.n_time_pts
            )));
        }
        for (name, value) in [
            ("ini_t", self.ini_t),
            ("fin_t", self.fin_t),
            ("ini_f", self.ini_f),
            ("fin_f", self.fin_f),
        ] {
            if !value.is_finite() {
                return Err(SigprocError::InvalidParameter(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.fin_f <= self.ini_f {
            return Err(SigprocError::InvalidParameter(format!(
                "fin_f ({}) must exceed ini_f ({})",
                self.fin_f, self.ini_f
            )));
        }
        Ok(())
    }
}
