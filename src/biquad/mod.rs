mod biquad_coefficients;
mod coefficient_engine;
mod engine_options;
mod filter_kind;
mod filter_parameters;

pub use biquad_coefficients::{BiquadCoefficients, NormalizedCoefficients};
pub use coefficient_engine::{compute_coefficients, CoefficientEngine};
pub use engine_options::{EngineOptions, HighpassRouting};
pub use filter_kind::FilterKind;
pub use filter_parameters::FilterParameters;
