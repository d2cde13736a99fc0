//! Spectral demo library - integer addition and two-tone FFT magnitudes

pub mod arith;
pub mod cli;
pub mod error;
pub mod logging;
pub mod params;
pub mod spectral;

pub use arith::add;
pub use error::{Result, SpectralError};
pub use spectral::{run_spectral_demo, spectral_demo, DemoReport};
