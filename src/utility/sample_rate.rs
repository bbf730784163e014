use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{DesignError, Result};

/// The sample rate that coefficients are designed for
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SampleRate {
    hz: f64,
}

impl Default for SampleRate {
    fn default() -> Self {
        Self {
            hz: Self::DEFAULT_HZ,
        }
    }
}

impl SampleRate {
    /// The rate used when none is configured
    pub const DEFAULT_HZ: f64 = 48_000.0;

    /// Create a sample rate in Hz
    ///
    /// The rate must be finite and greater than zero.
    pub fn from_hz(hz: f64) -> Result<Self> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(DesignError::invalid(
                "sample_rate",
                hz,
                "must be finite and greater than zero",
            ));
        }

        Ok(Self { hz })
    }

    /// The rate in Hz
    pub fn as_hz(&self) -> f64 {
        self.hz
    }

    /// Half the sample rate
    pub fn nyquist(&self) -> f64 {
        self.hz / 2.0
    }

    /// Normalised angular frequency `w0 = 2π·f/fs` in radians per sample
    pub fn omega(&self, frequency: f64) -> f64 {
        2.0 * PI * frequency / self.hz
    }
}

impl TryFrom<f64> for SampleRate {
    type Error = DesignError;

    fn try_from(hz: f64) -> Result<Self> {
        Self::from_hz(hz)
    }
}

impl From<SampleRate> for f64 {
    fn from(sample_rate: SampleRate) -> Self {
        sample_rate.hz
    }
}
