//! Two-tone signal synthesis and FFT magnitude analysis.
//!
//! One linear pipeline: synthesize a fixed-length complex signal, run a
//! forward DFT through a scoped `rustfft` plan, reduce each bin to its
//! magnitude and print the magnitudes in `%g` form.

mod demo;
mod format;
mod magnitude;
mod plan;
mod synthesis;

use rustfft::num_complex::Complex64;

use crate::params::spectral_constants::NUM_POINTS;

/// Time-domain samples, always exactly `NUM_POINTS` long
pub type Signal = [Complex64; NUM_POINTS];

/// Frequency-domain bins, always exactly `NUM_POINTS` long
pub type Spectrum = [Complex64; NUM_POINTS];

// Re-export public types
pub use demo::{
    run_spectral_demo, spectral_demo, spectral_demo_with, write_spectral_demo, DemoReport,
};
pub use format::{emit_magnitudes, format_general, format_significant};
pub use magnitude::{dominant_bins, magnitudes};
pub use plan::{forward_dft, inverse_dft, TransformPlan};
pub use synthesis::{synthesize, two_tone_signal};
