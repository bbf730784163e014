/// A gain level, stored in decibels
///
/// Filter gains are entered in dB, so the decibel value is kept exactly as
/// given and the cookbook amplitude is derived from it on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Level {
    db: f64,
}

impl Level {
    /// Create a level from dB
    pub fn from_db(level_in_db: f64) -> Self {
        Self { db: level_in_db }
    }

    /// Convert to dB
    pub fn as_db(&self) -> f64 {
        self.db
    }

    /// The cookbook amplitude `A = 10^(dB/40)`
    ///
    /// This is the square root of the linear gain, used by the peaking and
    /// shelving designs. It is never clamped to zero.
    pub fn amplitude(&self) -> f64 {
        10.0_f64.powf(self.db / 40.0)
    }
}
