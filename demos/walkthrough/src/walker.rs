//! A simulated person walking from waypoint to waypoint.

use pm_core::GeoPoint;

pub struct Walker {
    position: GeoPoint,
    step_m:   f64,
}

impl Walker {
    pub fn new(start: GeoPoint, step_m: f64) -> Self {
        Self { position: start, step_m }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Take one step towards `target`, stopping on it.  Returns the heading
    /// walked, or `None` if already there.
    pub fn step_towards(&mut self, target: GeoPoint) -> Option<f64> {
        let offset = self.position.to_offset(target);
        let remaining = offset.length();
        if remaining < 1e-6 {
            return None;
        }
        let heading = self.position.bearing_deg(target);
        self.position = if remaining <= self.step_m {
            target
        } else {
            self.position.from_offset(offset.scaled(self.step_m / remaining))
        };
        Some(heading)
    }
}
