//! Spectrum reduction to per-bin magnitudes.

use super::Spectrum;
use crate::params::spectral_constants::NUM_POINTS;

/// Euclidean norm of every bin, in bin order
pub fn magnitudes(spectrum: &Spectrum) -> [f64; NUM_POINTS] {
    let mut out = [0.0; NUM_POINTS];
    for (mag, bin) in out.iter_mut().zip(spectrum.iter()) {
        *mag = (bin.re * bin.re + bin.im * bin.im).sqrt();
    }
    out
}

/// Indices of the `count` largest magnitudes, largest first
///
/// Equal magnitudes keep ascending bin order. NaN sorts last.
pub fn dominant_bins(magnitudes: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..magnitudes.len()).collect();
    order.sort_by(|&a, &b| {
        let (ma, mb) = (magnitudes[a], magnitudes[b]);
        match (ma.is_nan(), mb.is_nan()) {
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            _ => mb.total_cmp(&ma),
        }
    });
    order.truncate(count);
    order
}
