//! Antenna geometry corrections.

/// Radius of the antenna trajectory accounting for the antenna phase delay.
///
/// The antennas of the pre-clinical scanner add a fixed phase delay, which is
/// modelled as an increase of the trajectory radius. `radius` is measured from
/// the SMA connection point, in the same length unit as the result. The
/// coefficients are the empirical fit of D. Rodriguez-Herrera (M.Sc. thesis,
/// University of Manitoba, 2016).
pub fn phase_delay_radius(radius: f64) -> f64 {
    0.97 * (radius - 0.106) + 0.148
}
