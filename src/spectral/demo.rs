//! The spectral demo pipeline: generate, transform, reduce, emit.

use std::io::{self, Write};
use tracing::debug;

use super::format::emit_magnitudes;
use super::magnitude::{dominant_bins, magnitudes};
use super::plan::forward_dft;
use super::synthesis::synthesize;
use super::{Signal, Spectrum};
use crate::error::Result;
use crate::params::{spectral_constants::NUM_POINTS, DemoConfig};

/// Everything one run of the demo produced
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Synthesized time-domain samples
    pub signal: Signal,

    /// Forward DFT of `signal`
    pub spectrum: Spectrum,

    /// `|spectrum[k]|` for every bin
    pub magnitudes: [f64; NUM_POINTS],
}

impl DemoReport {
    /// Bins with the largest magnitudes, largest first
    pub fn dominant_bins(&self, count: usize) -> Vec<usize> {
        dominant_bins(&self.magnitudes, count)
    }
}

/// Run the default two-tone pipeline without printing
pub fn spectral_demo() -> Result<DemoReport> {
    spectral_demo_with(&DemoConfig::default())
}

/// Run the pipeline for an arbitrary tone set
pub fn spectral_demo_with(config: &DemoConfig) -> Result<DemoReport> {
    config.validate()?;

    let signal = synthesize(&config.tones);
    let spectrum = forward_dft(&signal)?;
    let magnitudes = magnitudes(&spectrum);

    debug!(
        tones = config.tones.len(),
        peaks = ?dominant_bins(&magnitudes, config.tones.len()),
        "spectrum computed"
    );

    Ok(DemoReport {
        signal,
        spectrum,
        magnitudes,
    })
}

/// Run the default pipeline and write its magnitudes to `out`
pub fn write_spectral_demo<W: Write>(out: &mut W) -> Result<()> {
    let report = spectral_demo()?;
    emit_magnitudes(out, &report.magnitudes)?;
    Ok(())
}

/// Print the default demo's `NUM_POINTS` magnitudes to stdout, one per line
///
/// Holds the stdout lock while printing so concurrent callers do not
/// interleave lines.
pub fn run_spectral_demo() -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_spectral_demo(&mut out)
}
