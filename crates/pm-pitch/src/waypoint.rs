//! Waypoint generation.
//!
//! Turns [`PitchCorners`] into the ordered list of named points a person walks
//! to.  The output is a pure function of its inputs; names are the identity
//! that marked points join on, so they must never change for the same pitch.

use std::fmt;

use pm_core::{GeoPoint, Rotation};

use crate::geometry::{BoxCorners, PitchCorners, box_corners};
use crate::PitchConfig;

/// What part of the pitch a waypoint belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WaypointKind {
    Corner,
    Halfway,
    Penalty,
    Goal,
}

impl WaypointKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WaypointKind::Corner  => "corner",
            WaypointKind::Halfway => "halfway",
            WaypointKind::Penalty => "penalty",
            WaypointKind::Goal    => "goal",
        }
    }
}

impl fmt::Display for WaypointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named target point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: WaypointKind,
    pub lat:  f64,
    pub lng:  f64,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, kind: WaypointKind, point: GeoPoint) -> Self {
        Self { name: name.into(), kind, lat: point.lat, lng: point.lng }
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

fn push_box(points: &mut Vec<Waypoint>, area: &str, kind: WaypointKind, corners: BoxCorners) {
    points.push(Waypoint::new(format!("Left {area} Area (Bottom)"), kind, corners.left.bottom));
    points.push(Waypoint::new(format!("Left {area} Area (Top)"), kind, corners.left.top));
    points.push(Waypoint::new(format!("Right {area} Area (Bottom)"), kind, corners.right.bottom));
    points.push(Waypoint::new(format!("Right {area} Area (Top)"), kind, corners.right.top));
}

/// Generate the marking waypoints for a pitch.
///
/// Order: the four corners, the two halfway-line ends, the four penalty-area
/// corners, then (only when the size has a goal area) the four goal-area
/// corners.  That is 10 or 14 waypoints.
pub fn generate_waypoints(
    corners:  &PitchCorners,
    config:   &PitchConfig,
    rotation: Rotation,
) -> Vec<Waypoint> {
    let mut points = Vec::with_capacity(config.waypoint_count());
    let [bl, br, tr, tl] = *corners.as_array();

    points.push(Waypoint::new("Corner 1 (Bottom-Left)", WaypointKind::Corner, bl));
    points.push(Waypoint::new("Corner 2 (Bottom-Right)", WaypointKind::Corner, br));
    points.push(Waypoint::new("Corner 3 (Top-Right)", WaypointKind::Corner, tr));
    points.push(Waypoint::new("Corner 4 (Top-Left)", WaypointKind::Corner, tl));

    points.push(Waypoint::new("Halfway Line (Bottom)", WaypointKind::Halfway, corners.halfway_bottom()));
    points.push(Waypoint::new("Halfway Line (Top)", WaypointKind::Halfway, corners.halfway_top()));

    let penalty = box_corners(corners, config.penalty_area_length, config.penalty_area_width, rotation);
    push_box(&mut points, "Penalty", WaypointKind::Penalty, penalty);

    if config.has_goal_area() {
        let goal = box_corners(corners, config.goal_area_length, config.goal_area_width, rotation);
        push_box(&mut points, "Goal", WaypointKind::Goal, goal);
    }

    points
}
