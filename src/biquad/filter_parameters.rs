use serde::{Deserialize, Serialize};

use crate::{DesignError, Level, Result, SampleRate};

/// The musical parameters of a single filter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    /// The centre or cutoff frequency in Hz, depending on the kind
    #[serde(alias = "f0")]
    pub center_frequency: f64,

    /// The gain in dB (only used by peaking and shelf kinds)
    #[serde(alias = "db_gain", default)]
    pub gain_db: f64,

    /// The 'q' value of the filter
    pub q: f64,
}

impl FilterParameters {
    /// Create parameters for a filter
    pub fn new(center_frequency: f64, gain_db: f64, q: f64) -> Self {
        Self {
            center_frequency,
            gain_db,
            q,
        }
    }

    /// Create parameters for a kind that ignores gain
    pub fn without_gain(center_frequency: f64, q: f64) -> Self {
        Self::new(center_frequency, 0.0, q)
    }

    /// The gain as a level
    pub fn level(&self) -> Level {
        Level::from_db(self.gain_db)
    }

    /// Check the parameters can be designed at a sample rate
    ///
    /// `q` must be positive, the frequency must lie strictly between zero and
    /// Nyquist, and every value must be finite.
    pub fn validate(&self, sample_rate: SampleRate) -> Result<()> {
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(DesignError::invalid(
                "q",
                self.q,
                "must be finite and greater than zero",
            ));
        }

        if !self.center_frequency.is_finite()
            || self.center_frequency <= 0.0
            || self.center_frequency >= sample_rate.nyquist()
        {
            return Err(DesignError::invalid(
                "center_frequency",
                self.center_frequency,
                "must lie between zero and half the sample rate",
            ));
        }

        if !self.gain_db.is_finite() {
            return Err(DesignError::invalid(
                "gain_db",
                self.gain_db,
                "must be finite",
            ));
        }

        Ok(())
    }
}
