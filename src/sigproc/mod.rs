//! # ICZT Transform Engine
//!
//! Frequency-domain to time-domain conversion of scan spectra.
//!
//! The inverse chirp z-transform evaluates the inverse z-transform of a
//! spectrum on an arbitrary arc of the unit circle, which gives an arbitrary
//! time window `[ini_t, fin_t]` sampled at `n_time_pts` points:
//!
//! 1. `T_max` is the last time point of the plain IDFT grid of the scan,
//!    and `ω = 2π / T_max` maps time to angle.
//! 2. `θ₀ = ini_t·ω`, `φ₀ = (fin_t − ini_t)·ω / (n_time_pts − 1)`.
//! 3. `z_k = e^{−iθ₀}·e^{−iφ₀k}` and `td[k] = (1/N)·Σₙ fd[n]·z_k^{−n}`.
//! 4. `td[k]` is multiplied by `e^{i·2π·ini_f·t_k}` to remove the phase
//!    offset of treating `ini_f` as baseband.
//!
//! With `ini_t = 0`, `fin_t = (N − 1)/(N·df)` and `n_time_pts = N` the
//! uncompensated transform reduces to the plain inverse DFT ([`idft`]).

mod error;
mod iczt;
mod idft;
mod params;
mod phase;
mod scan;


pub use error::SigprocError;
pub use iczt::{iczt, IcztTransform};
pub use idft::{idft, InverseDft};
pub use params::IcztParams;
pub use phase::{phase_compensate, phase_factors};
pub use scan::{max_scan_time, scan_freq_step, scan_frequencies, scan_times};
