//! Signal synthesis configuration and constants.

use crate::error::{Result, SpectralError};

/// A single complex exponential component of the synthesized signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Angular rate applied to theta (theta spans [0, π) over the signal)
    pub rate: f64,

    /// Linear amplitude (dimensionless)
    pub amplitude: f64,
}

impl Tone {
    pub const fn new(rate: f64, amplitude: f64) -> Self {
        Self { rate, amplitude }
    }

    /// Fractional DFT bin this tone lands on.
    ///
    /// Theta advances by π/N per sample, so a rate `r` completes `r / 2`
    /// cycles over the N samples.
    pub fn expected_bin(&self) -> f64 {
        self.rate / 2.0
    }
}

/// Tone set for the spectral demo
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Superposed components, summed sample by sample
    /// default: rate 10 @ 1.0, rate 25 @ 0.5
    pub tones: Vec<Tone>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tones: vec![Tone::new(10.0, 1.0), Tone::new(25.0, 0.5)],
        }
    }
}

impl DemoConfig {
    /// Validate configuration (at least one tone, all values finite)
    pub fn validate(&self) -> Result<()> {
        if self.tones.is_empty() {
            return Err(SpectralError::InvalidTone {
                index: 0,
                reason: "tone set is empty".to_string(),
            });
        }
        for (index, tone) in self.tones.iter().enumerate() {
            if !tone.rate.is_finite() {
                return Err(SpectralError::InvalidTone {
                    index,
                    reason: format!("rate must be finite, got {}", tone.rate),
                });
            }
            if !tone.amplitude.is_finite() {
                return Err(SpectralError::InvalidTone {
                    index,
                    reason: format!("amplitude must be finite, got {}", tone.amplitude),
                });
            }
        }
        Ok(())
    }
}

/// Spectral constants (compile-time)
pub mod spectral_constants {
    /// Number of samples in the signal and bins in the spectrum
    pub const NUM_POINTS: usize = 64;

    /// Significant digits used when printing magnitudes (`%g` default)
    pub const PRINT_PRECISION: usize = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_two_tone() {
        let config = DemoConfig::default();
        assert_eq!(config.tones.len(), 2);
        assert_eq!(config.tones[0], Tone::new(10.0, 1.0));
        assert_eq!(config.tones[1], Tone::new(25.0, 0.5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_expected_bin_halves_rate() {
        assert_eq!(Tone::new(10.0, 1.0).expected_bin(), 5.0);
        assert_eq!(Tone::new(25.0, 0.5).expected_bin(), 12.5);
    }

    #[test]
    fn test_validate_rejects_bad_tones() {
        let empty = DemoConfig { tones: vec![] };
        assert!(matches!(
            empty.validate(),
            Err(SpectralError::InvalidTone { index: 0, .. })
        ));

        let nan_rate = DemoConfig {
            tones: vec![Tone::new(1.0, 1.0), Tone::new(f64::NAN, 1.0)],
        };
        assert!(matches!(
            nan_rate.validate(),
            Err(SpectralError::InvalidTone { index: 1, .. })
        ));

        let inf_amp = DemoConfig {
            tones: vec![Tone::new(3.0, f64::INFINITY)],
        };
        assert!(inf_amp.validate().is_err());
    }
}
