use serde::{Deserialize, Serialize};

use crate::{Result, SampleRate};

/// Which formula a [`FilterKind::Highpass`](crate::FilterKind::Highpass) request uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighpassRouting {
    /// Use the cookbook highpass formula
    #[default]
    Cookbook,

    /// Use the constant skirt gain bandpass formula
    ///
    /// Earlier versions of the equalizer mapped `highpass` to this formula.
    /// Presets tuned against that behaviour reproduce bit for bit with this
    /// routing.
    LegacyBandpassSkirt,
}

/// Options for a [`CoefficientEngine`](crate::CoefficientEngine)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// The sample rate that coefficients are designed for
    #[serde(default)]
    pub sample_rate: SampleRate,

    /// How highpass requests are routed
    #[serde(default)]
    pub highpass_routing: HighpassRouting,
}

impl EngineOptions {
    /// Set the sample rate in Hz
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Result<Self> {
        self.sample_rate = SampleRate::from_hz(sample_rate)?;
        Ok(self)
    }

    /// Set how highpass requests are routed
    pub fn with_highpass_routing(mut self, highpass_routing: HighpassRouting) -> Self {
        self.highpass_routing = highpass_routing;
        self
    }
}
