use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::DesignError;

/// The response shape of a biquad filter
///
/// This will determine which formula turns the parameters into coefficients
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FilterKind {
    /// Low pass filter
    ///
    /// This removes high frequencies above the cutoff frequency
    Lowpass,

    /// High pass filter
    ///
    /// This removes low frequencies below the cutoff frequency
    Highpass,

    /// Band pass filter with a constant skirt gain
    ///
    /// The peak gain is equal to Q
    BandpassSkirt,

    /// Band pass filter with a constant 0 dB peak gain
    BandpassPeak,

    /// Notch filter
    ///
    /// This removes a band around the centre frequency
    Notch,

    /// All pass filter
    ///
    /// This leaves the magnitude untouched and only shifts the phase
    Allpass,

    /// Peaking (bell) filter
    ///
    /// This boosts or cuts a band around the centre frequency
    Peaking,

    /// Low shelf
    ///
    /// This applies a fixed gain to frequencies below the corner frequency
    LowShelf,

    /// High shelf
    ///
    /// This applies a fixed gain to frequencies above the corner frequency
    HighShelf,
}

impl FilterKind {
    /// Every supported kind
    pub const ALL: [FilterKind; 9] = [
        FilterKind::Lowpass,
        FilterKind::Highpass,
        FilterKind::BandpassSkirt,
        FilterKind::BandpassPeak,
        FilterKind::Notch,
        FilterKind::Allpass,
        FilterKind::Peaking,
        FilterKind::LowShelf,
        FilterKind::HighShelf,
    ];

    /// The tag used for this kind at string boundaries
    pub fn tag(&self) -> &'static str {
        match self {
            FilterKind::Lowpass => "lowpass",
            FilterKind::Highpass => "highpass",
            FilterKind::BandpassSkirt => "bandpass_skirt",
            FilterKind::BandpassPeak => "bandpass_peak",
            FilterKind::Notch => "notch",
            FilterKind::Allpass => "allpass",
            FilterKind::Peaking => "peaking",
            FilterKind::LowShelf => "lowshelf",
            FilterKind::HighShelf => "highshelf",
        }
    }

    /// Whether the gain parameter affects this kind
    pub fn uses_gain(&self) -> bool {
        matches!(
            self,
            FilterKind::Peaking | FilterKind::LowShelf | FilterKind::HighShelf
        )
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FilterKind {
    type Err = DesignError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        // "bandpass" on its own has always meant the constant peak variant
        if tag == "bandpass" {
            return Ok(FilterKind::BandpassPeak);
        }

        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| DesignError::UnsupportedFilterKind(tag.to_owned()))
    }
}

impl TryFrom<String> for FilterKind {
    type Error = DesignError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<FilterKind> for &'static str {
    fn from(kind: FilterKind) -> Self {
        kind.tag()
    }
}
