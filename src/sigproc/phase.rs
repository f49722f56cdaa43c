use std::f64::consts::PI;

use ndarray::{Array1, ArrayD, ArrayViewD, Axis};
use num_complex::Complex64;

use super::{IcztParams, SigprocError};

/// Per-time-point phase correction `e^{i·2π·ini_f·t_k}`.
///
/// `t_k` runs evenly from `ini_t` to `fin_t` over `n_time_pts` points.
pub fn phase_factors(params: &IcztParams) -> Array1<Complex64> {
    Array1::linspace(params.ini_t, params.fin_t, params.n_time_pts)
        .mapv(|t| Complex64::from_polar(1.0, 2.0 * PI * params.ini_f * t))
}

/// Undo the phase offset of treating `ini_f` as baseband.
///
/// `td_data` is a 1-D (time) or 2-D (time × positions) signal whose first
/// axis has `params.n_time_pts` points. Only phases change; magnitudes are
/// preserved.
pub fn phase_compensate(
    td_data: ArrayViewD<'_, Complex64>,
    params: &IcztParams,
) -> Result<ArrayD<Complex64>, SigprocError> {
    params.validate()?;
    if !(1..=2).contains(&td_data.ndim()) {
        return Err(SigprocError::InvalidParameter(format!(
            "time-domain data must be 1-D or 2-D, got {}-D",
            td_data.ndim()
        )));
    }
    if td_data.shape()[0] != params.n_time_pts {
        return Err(SigprocError::InvalidParameter(format!(
            "time-domain data has {} time points, expected {}",
            td_data.shape()[0],
            params.n_time_pts
        )));
    }

    let factors = phase_factors(params);
    let mut compensated = td_data.to_owned();
    for (mut row, factor) in compensated.axis_iter_mut(Axis(0)).zip(factors.iter().copied()) {
        row.mapv_inplace(|v| v * factor);
    }
    Ok(compensated)
}
