//! The pitch geometry engine.
//!
//! # Frame
//!
//! Geometry is built in a local planar frame centred on the pitch: `x` runs
//! along the length (goal line to goal line), `y` along the width.  At
//! rotation 0 the length axis points east.  A rotation of `r` degrees turns
//! the frame with the standard 2D rotation matrix, and the rotated offsets are
//! projected to geodetic points with [`GeoPoint::from_offset`].
//!
//! Corner order is fixed (bottom-left, bottom-right, top-right, top-left)
//! and every downstream midpoint and box computation indexes into it.

use std::fmt;
use std::str::FromStr;

use pm_core::{GeoPoint, LocalOffset, Rotation, Yards};

use crate::{PitchConfig, PitchError, PitchResult};

// ── CornerRole ────────────────────────────────────────────────────────────────

/// Which of the four pitch corners a point represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CornerRole {
    #[default]
    BottomLeft,
    BottomRight,
    TopRight,
    TopLeft,
}

impl CornerRole {
    /// In [`PitchCorners`] order.
    pub const ALL: [CornerRole; 4] = [
        CornerRole::BottomLeft,
        CornerRole::BottomRight,
        CornerRole::TopRight,
        CornerRole::TopLeft,
    ];

    /// Position of this corner in [`PitchCorners`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            CornerRole::BottomLeft  => 0,
            CornerRole::BottomRight => 1,
            CornerRole::TopRight    => 2,
            CornerRole::TopLeft     => 3,
        }
    }

    /// `(length_mult, width_mult)` taking this corner to the pitch centre.
    ///
    /// The corner itself sits at the negated multipliers from the centre.
    #[inline]
    pub fn center_multipliers(self) -> (f64, f64) {
        match self {
            CornerRole::BottomLeft  => ( 0.5,  0.5),
            CornerRole::BottomRight => (-0.5,  0.5),
            CornerRole::TopRight    => (-0.5, -0.5),
            CornerRole::TopLeft     => ( 0.5, -0.5),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CornerRole::BottomLeft  => "bottom-left",
            CornerRole::BottomRight => "bottom-right",
            CornerRole::TopRight    => "top-right",
            CornerRole::TopLeft     => "top-left",
        }
    }
}

impl FromStr for CornerRole {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CornerRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| PitchError::UnknownCorner(s.to_owned()))
    }
}

impl fmt::Display for CornerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PitchCorners ──────────────────────────────────────────────────────────────

/// The four pitch corners in `[bottom-left, bottom-right, top-right, top-left]`
/// order.
///
/// Values built by [`pitch_corners`] satisfy the ordering by construction.
/// [`PitchCorners::from_points`] re-checks it for corners that arrive from
/// outside (e.g. a stored polygon).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchCorners([GeoPoint; 4]);

impl PitchCorners {
    /// Wrap externally supplied corners.
    ///
    /// # Errors
    ///
    /// [`PitchError::CornerOrder`] if any point is non-finite or the polygon
    /// does not wind counter-clockwise (the winding every rotation of the
    /// canonical order has).
    pub fn from_points(points: [GeoPoint; 4]) -> PitchResult<Self> {
        if points.iter().any(|p| !p.lat.is_finite() || !p.lng.is_finite()) {
            return Err(PitchError::CornerOrder);
        }
        let origin = points[0];
        let local: Vec<LocalOffset> = points.iter().map(|&p| origin.to_offset(p)).collect();
        let twice_area: f64 = (0..4)
            .map(|i| {
                let a = local[i];
                let b = local[(i + 1) % 4];
                a.dx * b.dy - b.dx * a.dy
            })
            .sum();
        if twice_area <= 0.0 {
            return Err(PitchError::CornerOrder);
        }
        Ok(PitchCorners(points))
    }

    #[inline]
    pub fn get(&self, role: CornerRole) -> GeoPoint {
        self.0[role.index()]
    }

    #[inline]
    pub fn as_array(&self) -> &[GeoPoint; 4] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.0.iter().copied()
    }

    /// Midpoint of the left goal line (bottom-left → top-left).
    #[inline]
    pub fn left_goal_center(&self) -> GeoPoint {
        self.0[0].midpoint(self.0[3])
    }

    /// Midpoint of the right goal line (bottom-right → top-right).
    #[inline]
    pub fn right_goal_center(&self) -> GeoPoint {
        self.0[1].midpoint(self.0[2])
    }

    /// Halfway-line end on the bottom touchline.
    #[inline]
    pub fn halfway_bottom(&self) -> GeoPoint {
        self.0[0].midpoint(self.0[1])
    }

    /// Halfway-line end on the top touchline.
    #[inline]
    pub fn halfway_top(&self) -> GeoPoint {
        self.0[2].midpoint(self.0[3])
    }

    /// Centre spot: the mean of all four corners.
    pub fn center(&self) -> GeoPoint {
        self.halfway_bottom().midpoint(self.halfway_top())
    }
}

// ── Corners ───────────────────────────────────────────────────────────────────

/// Unit vector along the rotated length axis (towards the right goal).
#[inline]
fn length_axis(rotation: Rotation) -> LocalOffset {
    LocalOffset::new(1.0, 0.0).rotated(rotation.radians())
}

/// Unit vector along the rotated width axis (towards the top touchline).
#[inline]
fn width_axis(rotation: Rotation) -> LocalOffset {
    LocalOffset::new(0.0, 1.0).rotated(rotation.radians())
}

/// Compute the four corners of `config`'s pitch centred on `center`.
///
/// The result is an `length × width` rectangle for every rotation and
/// centre, up to the flat-earth projection error.
pub fn pitch_corners(center: GeoPoint, config: &PitchConfig, rotation: Rotation) -> PitchCorners {
    let length_m = config.length.to_meters();
    let width_m = config.width.to_meters();
    let radians = rotation.radians();

    // (±length/2, ±width/2): each corner is the negated corner→centre offset.
    let points = CornerRole::ALL.map(|role| {
        let (l_mult, w_mult) = role.center_multipliers();
        let offset = LocalOffset::new(-l_mult * length_m, -w_mult * width_m);
        center.from_offset(offset.rotated(radians))
    });
    PitchCorners(points)
}

/// Inverse of [`pitch_corners`] for one corner: the centre of a pitch whose
/// `role` corner lies at `corner`.
pub fn center_from_corner(
    corner:   GeoPoint,
    config:   &PitchConfig,
    rotation: Rotation,
    role:     CornerRole,
) -> GeoPoint {
    let (l_mult, w_mult) = role.center_multipliers();
    let offset = LocalOffset::new(
        config.length.to_meters() * l_mult,
        config.width.to_meters() * w_mult,
    );
    corner.from_offset(offset.rotated(rotation.radians()))
}

// ── Inset boxes ───────────────────────────────────────────────────────────────

/// The two goal-line-side corners of one inset box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxSide {
    /// Corner offset `+width/2` along the width axis (towards corners 2/3).
    pub bottom: GeoPoint,
    /// Corner offset `-width/2` along the width axis (towards corners 0/1).
    pub top: GeoPoint,
}

/// Inner corners of a penalty or goal area at each end of the pitch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxCorners {
    pub left: BoxSide,
    pub right: BoxSide,
}

/// Corners of a box `depth` deep from each goal line and `width` wide, centred
/// on the goal line.
///
/// From each goal-line midpoint the box's inner edge is `depth` along the
/// length axis towards the pitch interior; its ends are `±width/2` along the
/// width axis.  The `bottom`/`top` labels are stored site data and keep the
/// established convention: `bottom` is the `+width` end at both goals.
pub fn box_corners(
    corners:  &PitchCorners,
    depth:    Yards,
    width:    Yards,
    rotation: Rotation,
) -> BoxCorners {
    let inward = length_axis(rotation).scaled(depth.to_meters());
    let across = width_axis(rotation).scaled(width.to_meters() / 2.0);

    let side = |goal_center: GeoPoint, inward: LocalOffset| BoxSide {
        bottom: goal_center.from_offset(inward + across),
        top:    goal_center.from_offset(inward + -across),
    };

    BoxCorners {
        left:  side(corners.left_goal_center(), inward),
        right: side(corners.right_goal_center(), -inward),
    }
}

/// Left and right penalty spots, `penalty_spot_distance` in from each goal
/// line.  Used by diagram renderers.
pub fn penalty_spots(
    corners:  &PitchCorners,
    config:   &PitchConfig,
    rotation: Rotation,
) -> (GeoPoint, GeoPoint) {
    let inward = length_axis(rotation).scaled(config.penalty_spot_distance.to_meters());
    (
        corners.left_goal_center().from_offset(inward),
        corners.right_goal_center().from_offset(-inward),
    )
}
