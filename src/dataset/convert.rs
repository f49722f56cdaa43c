use log::info;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Dataset, DatasetError};
use crate::loader::Spectrum;
use crate::sigproc::{IcztParams, IcztTransform, InverseDft};

impl Dataset {
    /// Convert every spectrum to the time domain with the ICZT.
    ///
    /// The transform is built once from the shared spectrum shape. Records
    /// are carried over unchanged. `params` is checked even when the
    /// dataset is empty.
    pub fn iczt(&self, params: &IcztParams, phase_compensation: bool) -> Result<Dataset, DatasetError> {
        params.validate()?;
        let Some((n_freqs, _)) = self.shape() else {
            return Ok(Dataset::new());
        };
        let transform = IcztTransform::new(*params, n_freqs)?.with_phase_compensation(phase_compensation);

        info!(
            "ICZT of {} scans: {} frequencies -> {} time points over [{:e}, {:e}] s",
            self.len(),
            n_freqs,
            params.n_time_pts,
            params.ini_t,
            params.fin_t
        );

        #[cfg(feature = "parallel")]
        let converted: Vec<Spectrum> = self
            .spectra()
            .par_iter()
            .map(|fd| transform.transform(fd.view()))
            .collect::<Result<_, _>>()?;

        #[cfg(not(feature = "parallel"))]
        let converted: Vec<Spectrum> = self
            .spectra()
            .iter()
            .map(|fd| transform.transform(fd.view()))
            .collect::<Result<_, _>>()?;

        self.with_spectra(converted)
    }

    /// Convert every spectrum to the time domain with a plain inverse DFT
    pub fn idft(&self) -> Result<Dataset, DatasetError> {
        let Some((n_freqs, _)) = self.shape() else {
            return Ok(Dataset::new());
        };
        let inverse = InverseDft::new(n_freqs)?;

        info!("IDFT of {} scans: {} frequencies", self.len(), n_freqs);

        #[cfg(feature = "parallel")]
        let converted: Vec<Spectrum> = self
            .spectra()
            .par_iter()
            .map(|fd| inverse.transform(fd.view()))
            .collect::<Result<_, _>>()?;

        #[cfg(not(feature = "parallel"))]
        let converted: Vec<Spectrum> = self
            .spectra()
            .iter()
            .map(|fd| inverse.transform(fd.view()))
            .collect::<Result<_, _>>()?;

        self.with_spectra(converted)
    }
}
