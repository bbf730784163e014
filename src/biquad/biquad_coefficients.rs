use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::{DesignError, Result, SampleRate};

/// The six coefficients of a biquad transfer function
///
/// ```text
///        b0 + b1·z^-1 + b2·z^-2
/// H(z) = ----------------------
///        a0 + a1·z^-1 + a2·z^-2
/// ```
///
/// These are kept exactly as derived, without dividing through by `a0`.
/// Use [`BiquadCoefficients::normalized`] to get the form a processor runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiquadCoefficients {
    /// `[b0, b1, b2]`
    pub feedforward: [f64; 3],

    /// `[a0, a1, a2]`
    pub feedback: [f64; 3],
}

impl BiquadCoefficients {
    /// Create a coefficient set from raw values
    ///
    /// This is how a hand-entered (custom IIR) filter is represented.
    pub fn from_raw(feedforward: [f64; 3], feedback: [f64; 3]) -> Self {
        Self {
            feedforward,
            feedback,
        }
    }

    /// The `b0` coefficient
    pub fn b0(&self) -> f64 {
        self.feedforward[0]
    }

    /// The `b1` coefficient
    pub fn b1(&self) -> f64 {
        self.feedforward[1]
    }

    /// The `b2` coefficient
    pub fn b2(&self) -> f64 {
        self.feedforward[2]
    }

    /// The `a0` coefficient
    pub fn a0(&self) -> f64 {
        self.feedback[0]
    }

    /// The `a1` coefficient
    pub fn a1(&self) -> f64 {
        self.feedback[1]
    }

    /// The `a2` coefficient
    pub fn a2(&self) -> f64 {
        self.feedback[2]
    }

    /// Check that all six coefficients are finite
    pub fn is_finite(&self) -> bool {
        self.feedforward
            .iter()
            .chain(self.feedback.iter())
            .all(|value| value.is_finite())
    }

    /// Divide every coefficient through by `a0`
    pub fn normalized(&self) -> Result<NormalizedCoefficients> {
        if let Some(value) = self
            .feedforward
            .iter()
            .chain(self.feedback.iter())
            .find(|value| !value.is_finite())
        {
            return Err(DesignError::invalid(
                "coefficients",
                *value,
                "must all be finite to normalise",
            ));
        }

        let a0 = self.a0();

        if a0 == 0.0 {
            return Err(DesignError::invalid("a0", a0, "must be non-zero to normalise"));
        }

        let scale = 1.0 / a0;

        Ok(NormalizedCoefficients {
            a1: self.a1() * scale,
            a2: self.a2() * scale,
            b0: self.b0() * scale,
            b1: self.b1() * scale,
            b2: self.b2() * scale,
        })
    }

    /// Evaluate the transfer function on the unit circle at `frequency`
    pub fn response_at(&self, frequency: f64, sample_rate: SampleRate) -> Complex64 {
        let z_inverse = Complex64::from_polar(1.0, -sample_rate.omega(frequency));
        let z_inverse_squared = z_inverse * z_inverse;

        let numerator = self.b0() + z_inverse * self.b1() + z_inverse_squared * self.b2();
        let denominator = self.a0() + z_inverse * self.a1() + z_inverse_squared * self.a2();

        numerator / denominator
    }

    /// Linear magnitude of the response at `frequency`
    pub fn magnitude_at(&self, frequency: f64, sample_rate: SampleRate) -> f64 {
        self.response_at(frequency, sample_rate).norm()
    }

    /// Magnitude of the response at `frequency`, in dB
    pub fn magnitude_db_at(&self, frequency: f64, sample_rate: SampleRate) -> f64 {
        20.0 * self.magnitude_at(frequency, sample_rate).log10()
    }
}

/// Coefficients divided through by `a0`, so that `a0` is implicitly one
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCoefficients {
    a1: f64,
    a2: f64,
    b0: f64,
    b1: f64,
    b2: f64,
}

impl NormalizedCoefficients {
    /// The `a1` coefficient
    pub fn a1(&self) -> f64 {
        self.a1
    }

    /// The `a2` coefficient
    pub fn a2(&self) -> f64 {
        self.a2
    }

    /// The `b0` coefficient
    pub fn b0(&self) -> f64 {
        self.b0
    }

    /// The `b1` coefficient
    pub fn b1(&self) -> f64 {
        self.b1
    }

    /// The `b2` coefficient
    pub fn b2(&self) -> f64 {
        self.b2
    }
}
