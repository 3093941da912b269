//! What to tell the person walking: how far, which way, and whether they may
//! mark yet.

use pm_core::geo::normalize_degrees;
use pm_pitch::Waypoint;

use crate::{FixQuality, GateReading, LocationFix, NavConfig, ProximityGate};

#[derive(Clone, Debug, PartialEq)]
pub struct Guidance {
    pub target:      String,
    pub distance_m:  f64,
    /// Initial bearing to the target, degrees clockwise from north.
    pub bearing_deg: f64,
    /// Bearing relative to the device heading (north when no heading).
    pub relative_bearing_deg: f64,
    pub gate:        GateReading,
    pub fix_quality: FixQuality,
}

impl Guidance {
    pub fn compute(
        target: &Waypoint,
        fix: &LocationFix,
        gate: &ProximityGate,
        config: &NavConfig,
    ) -> Guidance {
        let here = fix.point();
        let bearing_deg = here.bearing_deg(target.point());
        let heading = fix.heading.filter(|h| h.is_finite()).unwrap_or(0.0);
        Guidance {
            target: target.name.clone(),
            distance_m: here.distance_m(target.point()),
            bearing_deg,
            relative_bearing_deg: normalize_degrees(bearing_deg - heading),
            gate: gate.evaluate(fix, target.point()),
            fix_quality: config.classify(fix.accuracy),
        }
    }

    #[inline]
    pub fn can_mark(&self) -> bool {
        self.gate.permitted
    }

    /// Eight-point compass direction of the absolute bearing.
    pub fn compass(&self) -> &'static str {
        const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        let sector = ((normalize_degrees(self.bearing_deg) + 22.5) / 45.0) as usize % 8;
        POINTS[sector]
    }

    /// One line for the UI.
    pub fn instruction(&self) -> String {
        if self.can_mark() {
            "You're close enough! Mark this point.".to_owned()
        } else {
            format!(
                "Walk towards the arrow until distance is less than {:.1}m",
                self.gate.threshold_m
            )
        }
    }

    /// Distance, compass direction and target, for logs and text UIs.
    pub fn heading_line(&self) -> String {
        format!(
            "{:.1}m {} ({:.0}°) to {}",
            self.distance_m,
            self.compass(),
            self.bearing_deg,
            self.target
        )
    }
}
