use std::sync::Arc;

use ndarray::{Array2, ArrayView2, Axis};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

use super::SigprocError;

/// Inverse DFT along the frequency axis, normalized by `1/n`.
///
/// The plan is built once per length and reused for every column.
#[derive(Clone)]
pub struct InverseDft {
    fft: Arc<dyn Fft<f64>>,
    len: usize,
}

impl std::fmt::Debug for InverseDft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InverseDft").field("len", &self.len).finish()
    }
}

impl InverseDft {
    /// Plan an inverse DFT of `len` points
    pub fn new(len: usize) -> Result<Self, SigprocError> {
        if len == 0 {
            return Err(SigprocError::InvalidParameter(
                "cannot plan an inverse DFT of length 0".to_string(),
            ));
        }
        let mut planner = FftPlanner::<f64>::new();
        Ok(Self {
            fft: planner.plan_fft_inverse(len),
            len,
        })
    }

    /// Transform each column of a (frequencies × positions) spectrum
    pub fn transform(&self, fd_data: ArrayView2<'_, Complex64>) -> Result<Array2<Complex64>, SigprocError> {
        if fd_data.nrows() != self.len {
            return Err(SigprocError::InvalidParameter(format!(
                "spectrum has {} frequency bins, inverse DFT expects {}",
                fd_data.nrows(),
                self.len
            )));
        }

        let scale = 1.0 / self.len as f64;
        let mut td_data = Array2::zeros(fd_data.dim());
        let mut buffer: Vec<Complex64> = Vec::with_capacity(self.len);
        for (column, mut out) in fd_data.axis_iter(Axis(1)).zip(td_data.axis_iter_mut(Axis(1))) {
            buffer.clear();
            buffer.extend(column.iter().copied());
            self.fft.process(&mut buffer);
            for (dst, src) in out.iter_mut().zip(&buffer) {
                *dst = *src * scale;
            }
        }
        Ok(td_data)
    }
}

/// Inverse DFT of a (frequencies × positions) spectrum, column by column
pub fn idft(fd_data: ArrayView2<'_, Complex64>) -> Result<Array2<Complex64>, SigprocError> {
    InverseDft::new(fd_data.nrows())?.transform(fd_data)
}
