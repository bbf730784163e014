use approx::assert_relative_eq;
use eqcoeffs::{CoefficientEngine, FilterKind, SampleRate};

struct Fixture {
    engine: CoefficientEngine,
    frequency: f64,
    q: f64,
}

impl Fixture {
    fn magnitude_db(&self, kind: FilterKind, gain_db: f64, at_frequency: f64) -> f64 {
        self.engine
            .compute_coefficients(kind, self.frequency, gain_db, self.q)
            .unwrap()
            .magnitude_db_at(at_frequency, self.sample_rate())
    }

    fn magnitude(&self, kind: FilterKind, at_frequency: f64) -> f64 {
        self.engine
            .compute_coefficients(kind, self.frequency, 0.0, self.q)
            .unwrap()
            .magnitude_at(at_frequency, self.sample_rate())
    }

    fn sample_rate(&self) -> SampleRate {
        self.engine.sample_rate()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            engine: CoefficientEngine::default(),
            frequency: 1_000.0,
            q: 0.707,
        }
    }
}

#[test]
fn lowpass_passes_low_frequencies() {
    let fixture = Fixture::default();
    assert_relative_eq!(fixture.magnitude_db(FilterKind::Lowpass, 0.0, 1.0), 0.0, epsilon = 1e-6);
    assert_relative_eq!(
        fixture.magnitude_db(FilterKind::Lowpass, 0.0, 1_000.0),
        -3.01,
        epsilon = 0.01
    );
    assert!(fixture.magnitude_db(FilterKind::Lowpass, 0.0, 23_000.0) < -90.0);
}

#[test]
fn highpass_passes_high_frequencies() {
    let fixture = Fixture::default();
    assert_relative_eq!(
        fixture.magnitude_db(FilterKind::Highpass, 0.0, 23_000.0),
        0.0,
        epsilon = 1e-3
    );
    assert!(fixture.magnitude_db(FilterKind::Highpass, 0.0, 10.0) < -70.0);
}

#[test]
fn bandpass_peak_gains() {
    let fixture = Fixture {
        q: 4.0,
        ..Default::default()
    };

    assert_relative_eq!(fixture.magnitude(FilterKind::BandpassPeak, 1_000.0), 1.0, epsilon = 1e-9);
    assert_relative_eq!(fixture.magnitude(FilterKind::BandpassSkirt, 1_000.0), 4.0, epsilon = 1e-9);
}

#[test]
fn notch_removes_the_centre_frequency() {
    let fixture = Fixture::default();
    assert!(fixture.magnitude(FilterKind::Notch, 1_000.0) < 1e-9);
    assert_relative_eq!(fixture.magnitude(FilterKind::Notch, 10.0), 1.0, epsilon = 1e-3);
}

#[test]
fn allpass_keeps_the_magnitude() {
    let fixture = Fixture::default();

    for frequency in [10.0, 500.0, 1_000.0, 5_000.0, 20_000.0] {
        assert_relative_eq!(
            fixture.magnitude(FilterKind::Allpass, frequency),
            1.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn peaking_reaches_its_gain_at_the_centre() {
    let fixture = Fixture {
        q: 1.0,
        ..Default::default()
    };

    for gain_db in [-12.0, -3.0, 6.0, 15.0] {
        assert_relative_eq!(
            fixture.magnitude_db(FilterKind::Peaking, gain_db, 1_000.0),
            gain_db,
            epsilon = 1e-9
        );
    }
}

#[test]
fn low_shelf_levels() {
    let fixture = Fixture::default();
    assert_relative_eq!(fixture.magnitude_db(FilterKind::LowShelf, 6.0, 10.0), 6.0, epsilon = 1e-3);
    assert_relative_eq!(
        fixture.magnitude_db(FilterKind::LowShelf, 6.0, 1_000.0),
        3.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        fixture.magnitude_db(FilterKind::LowShelf, 6.0, 20_000.0),
        0.0,
        epsilon = 1e-3
    );
}

#[test]
fn high_shelf_levels() {
    let fixture = Fixture::default();
    assert_relative_eq!(
        fixture.magnitude_db(FilterKind::HighShelf, -9.0, 10.0),
        0.0,
        epsilon = 1e-3
    );
    assert_relative_eq!(
        fixture.magnitude_db(FilterKind::HighShelf, -9.0, 1_000.0),
        -4.5,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        fixture.magnitude_db(FilterKind::HighShelf, -9.0, 20_000.0),
        -9.0,
        epsilon = 1e-3
    );
}

#[test]
fn zero_gain_kinds_are_flat() {
    let fixture = Fixture::default();

    for kind in [FilterKind::Peaking, FilterKind::LowShelf, FilterKind::HighShelf] {
        for frequency in [20.0, 1_000.0, 12_000.0, 23_000.0] {
            assert_relative_eq!(fixture.magnitude(kind, frequency), 1.0, epsilon = 1e-12);
        }
    }
}
