//! The proximity gate: may the current waypoint be marked from here?
//!
//! Marking is permitted iff `distance < max(floor, accuracy)`.  The required
//! closeness relaxes as reported GPS accuracy degrades, but never drops below
//! the floor.  Evaluated afresh for every fix.

use pm_core::GeoPoint;

use crate::LocationFix;

/// Outcome of one gate evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateReading {
    pub distance_m:  f64,
    pub threshold_m: f64,
    pub permitted:   bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityGate {
    floor_m: f64,
}

impl Default for ProximityGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FLOOR_M)
    }
}

impl ProximityGate {
    pub const DEFAULT_FLOOR_M: f64 = 2.0;

    pub fn new(floor_m: f64) -> Self {
        Self { floor_m }
    }

    #[inline]
    pub fn floor_m(&self) -> f64 {
        self.floor_m
    }

    /// Marking radius for a fix of the given accuracy.
    #[inline]
    pub fn threshold(&self, accuracy_m: f64) -> f64 {
        self.floor_m.max(accuracy_m)
    }

    pub fn reading(&self, distance_m: f64, accuracy_m: f64) -> GateReading {
        let threshold_m = self.threshold(accuracy_m);
        GateReading { distance_m, threshold_m, permitted: distance_m < threshold_m }
    }

    /// Evaluate `fix` against `target`.
    pub fn evaluate(&self, fix: &LocationFix, target: GeoPoint) -> GateReading {
        self.reading(fix.point().distance_m(target), fix.accuracy)
    }
}
