use std::f64::consts::PI;

use ndarray::{Array1, Array2, ArrayD, ArrayView1, ArrayView2, ArrayViewD, Axis, Ix1, Ix2};
use num_complex::Complex64;

use super::phase::phase_factors;
use super::scan::max_scan_time;
use super::{IcztParams, SigprocError};

/// Inverse chirp z-transform for one scan geometry.
///
/// The (frequencies × time points) weight matrix depends only on the
/// parameters and the number of frequencies, so it is built once and shared
/// by every antenna position and every scan of a dataset.
///
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
/// use umbmid::sigproc::{IcztParams, IcztTransform};
///
/// let params = IcztParams::new(0.0, 6e-9, 1024, 1e9, 8e9);
/// let transform = IcztTransform::new(params, 1001)?;
///
/// let spectrum = Array2::<Complex64>::zeros((1001, 72));
/// let signal = transform.transform(spectrum.view())?;
/// assert_eq!(signal.dim(), (1024, 72));
/// # Ok::<(), umbmid::sigproc::SigprocError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IcztTransform {
    params: IcztParams,
    n_freqs: usize,
    weights: Array2<Complex64>,
    phase: Option<Array1<Complex64>>,
}

impl IcztTransform {
    /// Build the transform for spectra with `n_freqs` frequency bins.
    ///
    /// Phase compensation is enabled.
    pub fn new(params: IcztParams, n_freqs: usize) -> Result<Self, SigprocError> {
        params.validate()?;

        // Map time-of-response onto the unit circle: T_max <-> 2π
        let time_to_angle = 2.0 * PI / max_scan_time(params.ini_f, params.fin_f, n_freqs)?;
        let theta_naught = params.ini_t * time_to_angle;
        let phi_naught =
            (params.fin_t - params.ini_t) * time_to_angle / (params.n_time_pts - 1) as f64;

        // z_k = e^{-i(θ₀ + φ₀k)}, so z_k^{-n} = e^{i·n·(θ₀ + φ₀k)}
        let weights = Array2::from_shape_fn((n_freqs, params.n_time_pts), |(n, k)| {
            Complex64::from_polar(1.0, n as f64 * (theta_naught + phi_naught * k as f64))
        });

        Ok(Self {
            params,
            n_freqs,
            weights,
            phase: Some(phase_factors(&params)),
        })
    }

    /// Enable or disable phase compensation of the output
    pub fn with_phase_compensation(mut self, enabled: bool) -> Self {
        self.phase = enabled.then(|| phase_factors(&self.params));
        self
    }

    /// Whether outputs are phase compensated
    pub fn phase_compensation(&self) -> bool {
        self.phase.is_some()
    }

    /// Parameters the transform was built with
    pub fn params(&self) -> &IcztParams {
        &self.params
    }

    /// Number of frequency bins expected on input
    pub fn n_freqs(&self) -> usize {
        self.n_freqs
    }

    /// Weight matrix, `weights[[n, k]] = z_k^{-n}`
    pub fn weights(&self) -> &Array2<Complex64> {
        &self.weights
    }

    fn check_freqs(&self, found: usize) -> Result<(), SigprocError> {
        if found != self.n_freqs {
            return Err(SigprocError::InvalidParameter(format!(
                "spectrum has {} frequency bins, transform expects {}",
                found, self.n_freqs
            )));
        }
        Ok(())
    }

    /// Transform one antenna position, a 1-D spectrum of `n_freqs` bins
    pub fn transform_1d(&self, fd_data: ArrayView1<'_, Complex64>) -> Result<Array1<Complex64>, SigprocError> {
        self.check_freqs(fd_data.len())?;

        let n = self.n_freqs as f64;
        let mut td_data = self.weights.t().dot(&fd_data);
        td_data.mapv_inplace(|v| v / n);
        if let Some(phase) = &self.phase {
            td_data *= phase;
        }
        Ok(td_data)
    }

    /// Transform a (frequencies × positions) spectrum, column by column
    pub fn transform(&self, fd_data: ArrayView2<'_, Complex64>) -> Result<Array2<Complex64>, SigprocError> {
        self.check_freqs(fd_data.nrows())?;

        let mut td_data = Array2::zeros((self.params.n_time_pts, fd_data.ncols()));
        for (column, mut out) in fd_data
            .axis_iter(Axis(1))
            .zip(td_data.axis_iter_mut(Axis(1)))
        {
            out.assign(&self.transform_1d(column)?);
        }
        Ok(td_data)
    }

    /// Transform a 1-D or 2-D spectrum of dynamic rank
    pub fn transform_dyn(&self, fd_data: ArrayViewD<'_, Complex64>) -> Result<ArrayD<Complex64>, SigprocError> {
        match fd_data.ndim() {
            1 => Ok(self
                .transform_1d(fd_data.into_dimensionality::<Ix1>()?)?
                .into_dyn()),
            2 => Ok(self
                .transform(fd_data.into_dimensionality::<Ix2>()?)?
                .into_dyn()),
            rank => Err(SigprocError::InvalidParameter(format!(
                "spectrum must be 1-D or 2-D, got {}-D",
                rank
            ))),
        }
    }
}

/// Transform a 1-D or 2-D frequency-domain spectrum to the time domain.
///
/// The transform runs along axis 0 (frequency); for 2-D input each column
/// (antenna position) is transformed independently. Output has
/// `params.n_time_pts` rows and is phase compensated.
pub fn iczt(fd_data: ArrayViewD<'_, Complex64>, params: &IcztParams) -> Result<ArrayD<Complex64>, SigprocError> {
    if !(1..=2).contains(&fd_data.ndim()) {
        return Err(SigprocError::InvalidParameter(format!(
            "spectrum must be 1-D or 2-D, got {}-D",
            fd_data.ndim()
        )));
    }
    let transform = IcztTransform::new(*params, fd_data.shape()[0])?;
    transform.transform_dyn(fd_data)
}
