use ndarray::Array1;

use super::SigprocError;

fn check_grid(ini_f: f64, fin_f: f64, n_freqs: usize) -> Result<(), SigprocError> {
    if n_freqs < 2 {
        return Err(SigprocError::InvalidParameter(format!(
            "at least 2 scan frequencies are required, got {}",
            n_freqs
        )));
    }
    if !ini_f.is_finite() || !fin_f.is_finite() || fin_f <= ini_f {
        return Err(SigprocError::InvalidParameter(format!(
            "scan frequencies must be finite with fin_f > ini_f, got ini_f = {}, fin_f = {}",
            ini_f, fin_f
        )));
    }
    Ok(())
}

/// Frequencies of the scan, `n_freqs` evenly spaced values from `ini_f` to `fin_f` (Hz)
pub fn scan_frequencies(ini_f: f64, fin_f: f64, n_freqs: usize) -> Result<Array1<f64>, SigprocError> {
    check_grid(ini_f, fin_f, n_freqs)?;
    Ok(Array1::linspace(ini_f, fin_f, n_freqs))
}

/// Spacing of the scan frequencies (Hz)
pub fn scan_freq_step(ini_f: f64, fin_f: f64, n_freqs: usize) -> Result<f64, SigprocError> {
    let freqs = scan_frequencies(ini_f, fin_f, n_freqs)?;
    Ok(freqs[1] - freqs[0])
}

/// Time points an inverse DFT of the scan would produce (s).
///
/// `n_freqs` values evenly spaced from 0 to `n_freqs · dt`, with
/// `dt = 1 / (n_freqs · df)`.
pub fn scan_times(ini_f: f64, fin_f: f64, n_freqs: usize) -> Result<Array1<f64>, SigprocError> {
    let time_step = 1.0 / (n_freqs as f64 * scan_freq_step(ini_f, fin_f, n_freqs)?);
    Ok(Array1::linspace(0.0, n_freqs as f64 * time_step, n_freqs))
}

/// Largest value of [`scan_times`]
pub fn max_scan_time(ini_f: f64, fin_f: f64, n_freqs: usize) -> Result<f64, SigprocError> {
    let times = scan_times(ini_f, fin_f, n_freqs)?;
    Ok(times.fold(f64::NEG_INFINITY, |acc, &t| acc.max(t)))
}
