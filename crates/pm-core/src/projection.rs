//! Local tangent-plane projection.
//!
//! An equirectangular flat-earth approximation around a reference point:
//!
//!   lat' = lat + dy / 111 320
//!   lng' = lng + dx / (111 320 · cos(lat))
//!
//! `dx` is metres east, `dy` metres north.  Accurate to centimetres over the
//! ~200 m a pitch spans; it must not be used for long-range navigation (use
//! [`GeoPoint::distance_m`] for that).  Undefined at the poles.

use crate::GeoPoint;

/// Approximate metres per degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// A planar offset in metres relative to some origin.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalOffset {
    /// Metres east of the origin.
    pub dx: f64,
    /// Metres north of the origin.
    pub dy: f64,
}

impl LocalOffset {
    #[inline]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Rotate by `radians` counter-clockwise using the standard 2D rotation
    /// matrix.
    #[inline]
    pub fn rotated(self, radians: f64) -> LocalOffset {
        let (sin, cos) = radians.sin_cos();
        LocalOffset {
            dx: self.dx * cos - self.dy * sin,
            dy: self.dx * sin + self.dy * cos,
        }
    }

    #[inline]
    pub fn scaled(self, factor: f64) -> LocalOffset {
        LocalOffset { dx: self.dx * factor, dy: self.dy * factor }
    }

    /// Euclidean length in metres.
    #[inline]
    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

impl std::ops::Add for LocalOffset {
    type Output = LocalOffset;
    #[inline]
    fn add(self, rhs: LocalOffset) -> LocalOffset {
        LocalOffset { dx: self.dx + rhs.dx, dy: self.dy + rhs.dy }
    }
}

impl std::ops::Neg for LocalOffset {
    type Output = LocalOffset;
    #[inline]
    fn neg(self) -> LocalOffset {
        LocalOffset { dx: -self.dx, dy: -self.dy }
    }
}

impl GeoPoint {
    /// Project a metre offset from `self` to a new geodetic point.
    pub fn from_offset(self, offset: LocalOffset) -> GeoPoint {
        GeoPoint {
            lat: self.lat + offset.dy / METERS_PER_DEGREE_LAT,
            lng: self.lng + offset.dx / (METERS_PER_DEGREE_LAT * self.lat.to_radians().cos()),
        }
    }

    /// Inverse of [`from_offset`](Self::from_offset): the planar offset of
    /// `point` relative to `self`.
    pub fn to_offset(self, point: GeoPoint) -> LocalOffset {
        LocalOffset {
            dx: (point.lng - self.lng) * METERS_PER_DEGREE_LAT * self.lat.to_radians().cos(),
            dy: (point.lat - self.lat) * METERS_PER_DEGREE_LAT,
        }
    }
}
