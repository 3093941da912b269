//! Simulated GPS error for demos and tests.
//!
//! Every observation displaces the true position by a random bearing and a
//! random distance of at most `max_error_fraction` of the *reported* accuracy,
//! so a receiver standing on a waypoint always passes the proximity gate.
//! Reported accuracy itself jitters ±20% around the nominal value.
//!
//! Seeded with `SmallRng::seed_from_u64`, so a given seed replays the same
//! walk exactly.

use pm_core::{GeoPoint, LocalOffset};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::LocationFix;

pub struct GpsNoise {
    rng:                SmallRng,
    accuracy_m:         f64,
    max_error_fraction: f64,
}

impl GpsNoise {
    pub fn new(seed: u64, accuracy_m: f64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            accuracy_m: accuracy_m.max(0.0),
            max_error_fraction: 0.6,
        }
    }

    /// Nominal accuracy radius in metres.
    #[inline]
    pub fn accuracy_m(&self) -> f64 {
        self.accuracy_m
    }

    /// A noisy fix of `truth`.
    pub fn observe(&mut self, truth: GeoPoint) -> LocationFix {
        let reported = self.accuracy_m * self.rng.gen_range(0.8..=1.2);
        let error = reported * self.rng.gen_range(0.0..=self.max_error_fraction);
        let angle = self.rng.gen_range(0.0..std::f64::consts::TAU);
        let displaced = truth.from_offset(LocalOffset::new(error * angle.cos(), error * angle.sin()));
        LocationFix::at(displaced, reported)
    }
}
