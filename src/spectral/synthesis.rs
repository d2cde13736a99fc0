//! Sampled signal synthesis.

use rustfft::num_complex::Complex64;
use std::f64::consts::PI;

use super::Signal;
use crate::params::{spectral_constants::NUM_POINTS, DemoConfig, Tone};

/// Sum of complex exponentials sampled at `theta = i / N * π`
///
/// Each tone contributes `amplitude * (cos(rate * theta) + j sin(rate * theta))`.
pub fn synthesize(tones: &[Tone]) -> Signal {
    let mut signal = [Complex64::new(0.0, 0.0); NUM_POINTS];

    for (i, sample) in signal.iter_mut().enumerate() {
        let theta = i as f64 / NUM_POINTS as f64 * PI;

        *sample = tones.iter().fold(Complex64::new(0.0, 0.0), |acc, tone| {
            let phase = tone.rate * theta;
            acc + Complex64::new(
                tone.amplitude * phase.cos(),
                tone.amplitude * phase.sin(),
            )
        });
    }

    signal
}

/// The demo signal: rate 10 at amplitude 1.0 plus rate 25 at amplitude 0.5
pub fn two_tone_signal() -> Signal {
    synthesize(&DemoConfig::default().tones)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_sums_amplitudes() {
        // theta = 0: every cosine is 1, every sine is 0
        let signal = two_tone_signal();
        assert!((signal[0].re - 1.5).abs() < 1e-12);
        assert!(signal[0].im.abs() < 1e-12);
    }

    #[test]
    fn test_matches_closed_form() {
        let signal = two_tone_signal();

        for (i, sample) in signal.iter().enumerate() {
            let theta = i as f64 / NUM_POINTS as f64 * PI;
            let re = 1.0 * (10.0 * theta).cos() + 0.5 * (25.0 * theta).cos();
            let im = 1.0 * (10.0 * theta).sin() + 0.5 * (25.0 * theta).sin();
            assert!((sample.re - re).abs() < 1e-12, "re mismatch at {}", i);
            assert!((sample.im - im).abs() < 1e-12, "im mismatch at {}", i);
        }
    }

    #[test]
    fn test_single_tone_has_constant_modulus() {
        let signal = synthesize(&[Tone::new(7.0, 2.0)]);
        for sample in signal.iter() {
            assert!((sample.norm() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_no_tones_is_silence() {
        let signal = synthesize(&[]);
        assert!(signal.iter().all(|s| s.re == 0.0 && s.im == 0.0));
    }
}
