//! Parameter definitions with documented semantics.
//!
//! All magic numbers of the demo are extracted here with:
//! - Units (radians per unit theta, linear amplitude)
//! - Documented ranges and meanings
//! - Type safety where possible

mod spectral;

// Re-export all types
pub use spectral::{spectral_constants, DemoConfig, Tone};
