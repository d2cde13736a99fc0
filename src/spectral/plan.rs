//! Scoped FFT plan and the fixed-size transforms built on it.

use rustfft::num_complex::Complex64;
use rustfft::{Fft, FftDirection, FftPlanner};
use std::sync::Arc;
use tracing::{debug, trace};

use super::{Signal, Spectrum};
use crate::error::{Result, SpectralError};
use crate::params::spectral_constants::NUM_POINTS;

/// FFT plan of one size and direction, plus the scratch it runs in.
///
/// The plan is owned by whoever built it and released when dropped, so a
/// plan created inside a call never outlives that call, on success or error.
pub struct TransformPlan {
    fft: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex64>,
    size: usize,
    direction: FftDirection,
}

impl TransformPlan {
    /// Plan a transform of `size` points in `direction`
    pub fn new(size: usize, direction: FftDirection) -> Result<Self> {
        if size == 0 {
            return Err(SpectralError::EmptyTransform);
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft(size, direction);
        let scratch = vec![Complex64::new(0.0, 0.0); fft.get_inplace_scratch_len()];

        debug!(
            size,
            ?direction,
            scratch_len = scratch.len(),
            "transform plan created"
        );

        Ok(Self {
            fft,
            scratch,
            size,
            direction,
        })
    }

    /// Plan a forward (`e^{-2πi·k·n/N}`) transform
    pub fn forward(size: usize) -> Result<Self> {
        Self::new(size, FftDirection::Forward)
    }

    /// Plan an unnormalized inverse transform
    pub fn inverse(size: usize) -> Result<Self> {
        Self::new(size, FftDirection::Inverse)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn direction(&self) -> FftDirection {
        self.direction
    }

    /// Transform `buffer` in place
    pub fn process(&mut self, buffer: &mut [Complex64]) -> Result<()> {
        if buffer.len() != self.size {
            return Err(SpectralError::PlanLength {
                expected: self.size,
                actual: buffer.len(),
            });
        }

        self.fft.process_with_scratch(buffer, &mut self.scratch);
        Ok(())
    }
}

impl Drop for TransformPlan {
    fn drop(&mut self) {
        trace!(size = self.size, direction = ?self.direction, "transform plan released");
    }
}

/// Forward DFT of the signal (unnormalized)
pub fn forward_dft(signal: &Signal) -> Result<Spectrum> {
    let mut plan = TransformPlan::forward(NUM_POINTS)?;
    let mut spectrum = *signal;
    plan.process(&mut spectrum)?;
    Ok(spectrum)
}

/// Inverse DFT of the spectrum (unnormalized: divide by N to recover the signal)
pub fn inverse_dft(spectrum: &Spectrum) -> Result<Signal> {
    let mut plan = TransformPlan::inverse(NUM_POINTS)?;
    let mut signal = *spectrum;
    plan.process(&mut signal)?;
    Ok(signal)
}
