#![warn(missing_docs)]

//! eqcoeffs designs the coefficients of parametric equalizer filters
//!
//! You can use it to:
//! - Turn a filter kind, frequency, gain and Q into biquad coefficients
//! - Design at any sample rate (48 kHz by default)
//! - Normalise coefficients for a Direct Form processor
//! - Evaluate the frequency response of a design
//!
//! The formulas are the ones from the Audio EQ Cookbook. Coefficients are
//! returned exactly as derived, without dividing through by `a0`.
//!
//! # Example
//!
//! ```rust
//! use eqcoeffs::{CoefficientEngine, EngineOptions, FilterKind};
//!
//! let engine = CoefficientEngine::new(EngineOptions::default().with_sample_rate(44_100.0)?);
//!
//! let coefficients = engine.compute_coefficients(FilterKind::Peaking, 1_000.0, 6.0, 1.0)?;
//! let normalized = coefficients.normalized()?;
//!
//! // Hand `normalized` to the audio processing stage
//! # Ok::<(), eqcoeffs::DesignError>(())
//! ```

mod biquad;
mod error;
mod utility;

pub use biquad::compute_coefficients;
pub use biquad::BiquadCoefficients;
pub use biquad::CoefficientEngine;
pub use biquad::EngineOptions;
pub use biquad::FilterKind;
pub use biquad::FilterParameters;
pub use biquad::HighpassRouting;
pub use biquad::NormalizedCoefficients;

pub use error::DesignError;
pub use error::Result;

pub use utility::Level;
pub use utility::SampleRate;
