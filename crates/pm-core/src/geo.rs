//! Geographic coordinate type and great-circle utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Pitch marking needs
//! sub-metre fidelity, which single precision cannot give at typical
//! latitudes.  No datum correction is performed; inputs are treated as
//! WGS-84-like degrees.

use std::fmt;

/// Mean Earth radius in metres, used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Returns exactly `0.0` for coincident points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial great-circle bearing from `self` towards `other`, in degrees
    /// within `[0, 360)` where 0 is north and 90 is east.
    ///
    /// For coincident points the result is `0.0` (`atan2(0, 0)`); callers
    /// should treat it as meaningless rather than as "due north".
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let y = d_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

        normalize_degrees(y.atan2(x).to_degrees())
    }

    /// Arithmetic midpoint in degree space.  Adequate for the pitch-sized
    /// distances this crate deals with; not a great-circle midpoint.
    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: (self.lat + other.lat) * 0.5,
            lng: (self.lng + other.lng) * 0.5,
        }
    }

    /// Component-wise comparison within `eps_deg` degrees.
    #[inline]
    pub fn approx_eq(self, other: GeoPoint, eps_deg: f64) -> bool {
        (self.lat - other.lat).abs() <= eps_deg && (self.lng - other.lng).abs() <= eps_deg
    }
}

/// Map any finite angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs due to rounding.
    if d >= 360.0 { 0.0 } else { d }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
