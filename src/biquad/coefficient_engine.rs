use tracing::{debug, trace};

use crate::{DesignError, Level, Result, SampleRate};

use super::{
    biquad_coefficients::BiquadCoefficients,
    engine_options::{EngineOptions, HighpassRouting},
    filter_kind::FilterKind,
    filter_parameters::FilterParameters,
};

/// Turns filter parameters into biquad coefficients
///
/// The engine holds no state beyond its options, so a single instance can be
/// shared between threads and every call is independent of the others.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoefficientEngine {
    options: EngineOptions,
}

impl CoefficientEngine {
    /// Create an engine with options
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// The options the engine was created with
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The sample rate coefficients are designed for
    pub fn sample_rate(&self) -> SampleRate {
        self.options.sample_rate
    }

    /// Compute the coefficients of one filter
    ///
    /// `gain_db` is ignored by every kind except peaking and the shelves.
    ///
    /// # Errors
    ///
    /// Fails with [`DesignError::InvalidParameter`](crate::DesignError::InvalidParameter)
    /// when `q <= 0`, when the frequency is not strictly between zero and
    /// Nyquist, when any value is not finite, or when the gain is so extreme
    /// that the coefficients overflow.
    pub fn compute_coefficients(
        &self,
        kind: FilterKind,
        center_frequency: f64,
        gain_db: f64,
        q: f64,
    ) -> Result<BiquadCoefficients> {
        self.compute(kind, &FilterParameters::new(center_frequency, gain_db, q))
    }

    /// Compute the coefficients of one filter from a parameter set
    pub fn compute(
        &self,
        kind: FilterKind,
        parameters: &FilterParameters,
    ) -> Result<BiquadCoefficients> {
        if let Err(error) = parameters.validate(self.sample_rate()) {
            debug!(%kind, %error, "rejected filter parameters");
            return Err(error);
        }

        let preamble = Preamble::new(self.sample_rate(), parameters.center_frequency, parameters.q);

        let coefficients = match kind {
            FilterKind::Lowpass => low_pass(&preamble),
            FilterKind::Highpass => match self.options.highpass_routing {
                HighpassRouting::Cookbook => high_pass(&preamble),
                HighpassRouting::LegacyBandpassSkirt => band_pass_skirt(&preamble),
            },
            FilterKind::BandpassSkirt => band_pass_skirt(&preamble),
            FilterKind::BandpassPeak => band_pass_peak(&preamble),
            FilterKind::Notch => notch(&preamble),
            FilterKind::Allpass => all_pass(&preamble),
            FilterKind::Peaking => peaking(&preamble, parameters.level()),
            FilterKind::LowShelf => low_shelf(&preamble, parameters.level()),
            FilterKind::HighShelf => high_shelf(&preamble, parameters.level()),
        };

        // Extreme gains push A = 10^(dB/40) past the range of f64
        if !coefficients.is_finite() {
            let error = DesignError::invalid(
                "gain_db",
                parameters.level().as_db(),
                "produces coefficients that are not finite",
            );
            debug!(%kind, %error, "rejected filter parameters");
            return Err(error);
        }

        trace!(
            %kind,
            center_frequency = parameters.center_frequency,
            gain_db = parameters.gain_db,
            q = parameters.q,
            feedforward = ?coefficients.feedforward,
            feedback = ?coefficients.feedback,
            "designed biquad"
        );

        Ok(coefficients)
    }

    /// Compute the coefficients of a filter named by its string tag
    ///
    /// # Errors
    ///
    /// Fails with [`DesignError::UnsupportedFilterKind`](crate::DesignError::UnsupportedFilterKind)
    /// when the tag names no kind, otherwise as [`Self::compute_coefficients`].
    pub fn compute_tagged(
        &self,
        tag: &str,
        center_frequency: f64,
        gain_db: f64,
        q: f64,
    ) -> Result<BiquadCoefficients> {
        let kind = tag.parse::<FilterKind>().inspect_err(|error| {
            debug!(%error, "rejected filter tag");
        })?;

        self.compute_coefficients(kind, center_frequency, gain_db, q)
    }
}

/// Compute the coefficients of one filter at 48 kHz with cookbook routing
pub fn compute_coefficients(
    kind: FilterKind,
    center_frequency: f64,
    gain_db: f64,
    q: f64,
) -> Result<BiquadCoefficients> {
    CoefficientEngine::default().compute_coefficients(kind, center_frequency, gain_db, q)
}

/// Terms shared by every formula
struct Preamble {
    cos_w0: f64,
    sin_w0: f64,
    alpha: f64,
}

impl Preamble {
    fn new(sample_rate: SampleRate, center_frequency: f64, q: f64) -> Self {
        let w0 = sample_rate.omega(center_frequency);
        let sin_w0 = w0.sin();

        Self {
            cos_w0: w0.cos(),
            sin_w0,
            alpha: sin_w0 / (2.0 * q),
        }
    }

    /// `[1 + alpha, -2cos(w0), 1 - alpha]`, shared by the kinds without gain
    fn resonant_feedback(&self) -> [f64; 3] {
        [1.0 + self.alpha, -2.0 * self.cos_w0, 1.0 - self.alpha]
    }
}

fn low_pass(p: &Preamble) -> BiquadCoefficients {
    let b0 = (1.0 - p.cos_w0) / 2.0;
    let b1 = 1.0 - p.cos_w0;
    let b2 = (1.0 - p.cos_w0) / 2.0;

    BiquadCoefficients::from_raw([b0, b1, b2], p.resonant_feedback())
}

fn high_pass(p: &Preamble) -> BiquadCoefficients {
    let b0 = (1.0 + p.cos_w0) / 2.0;
    let b1 = -(1.0 + p.cos_w0);
    let b2 = (1.0 + p.cos_w0) / 2.0;

    BiquadCoefficients::from_raw([b0, b1, b2], p.resonant_feedback())
}

fn band_pass_skirt(p: &Preamble) -> BiquadCoefficients {
    let b0 = p.sin_w0 / 2.0;
    let b1 = 0.0;
    let b2 = -p.sin_w0 / 2.0;

    BiquadCoefficients::from_raw([b0, b1, b2], p.resonant_feedback())
}

fn band_pass_peak(p: &Preamble) -> BiquadCoefficients {
    let b0 = p.alpha;
    let b1 = 0.0;
    let b2 = -p.alpha;

    BiquadCoefficients::from_raw([b0, b1, b2], p.resonant_feedback())
}

fn notch(p: &Preamble) -> BiquadCoefficients {
    let b0 = 1.0;
    let b1 = -2.0 * p.cos_w0;
    let b2 = 1.0;

    BiquadCoefficients::from_raw([b0, b1, b2], p.resonant_feedback())
}

fn all_pass(p: &Preamble) -> BiquadCoefficients {
    let b0 = 1.0 - p.alpha;
    let b1 = -2.0 * p.cos_w0;
    let b2 = 1.0 + p.alpha;

    BiquadCoefficients::from_raw([b0, b1, b2], p.resonant_feedback())
}

fn peaking(p: &Preamble, level: Level) -> BiquadCoefficients {
    let a = level.amplitude();

    let b0 = 1.0 + p.alpha * a;
    let b1 = -2.0 * p.cos_w0;
    let b2 = 1.0 - p.alpha * a;

    let a0 = 1.0 + p.alpha / a;
    let a1 = -2.0 * p.cos_w0;
    let a2 = 1.0 - p.alpha / a;

    BiquadCoefficients::from_raw([b0, b1, b2], [a0, a1, a2])
}

fn low_shelf(p: &Preamble, level: Level) -> BiquadCoefficients {
    let a = level.amplitude();
    let two_sqrt_a_alpha = 2.0 * a.sqrt() * p.alpha;
    let cos_w0 = p.cos_w0;

    let b0 = a * ((a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha);
    let b1 = 2.0 * a * ((a - 1.0) - (a + 1.0) * cos_w0);
    let b2 = a * ((a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha);

    let a0 = (a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha;
    let a1 = -2.0 * ((a - 1.0) + (a + 1.0) * cos_w0);
    let a2 = (a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha;

    BiquadCoefficients::from_raw([b0, b1, b2], [a0, a1, a2])
}

fn high_shelf(p: &Preamble, level: Level) -> BiquadCoefficients {
    let a = level.amplitude();
    let two_sqrt_a_alpha = 2.0 * a.sqrt() * p.alpha;
    let cos_w0 = p.cos_w0;

    let b0 = a * ((a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha);
    let b1 = -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_w0);
    let b2 = a * ((a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha);

    let a0 = (a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha;
    let a1 = 2.0 * ((a - 1.0) - (a + 1.0) * cos_w0);
    let a2 = (a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha;

    BiquadCoefficients::from_raw([b0, b1, b2], [a0, a1, a2])
}
