//! Pitch size configurations.
//!
//! All linear dimensions are [`Yards`].  Conversion to metres happens inside
//! the geometry engine only; a `PitchConfig` never stores metres.

use std::fmt;
use std::str::FromStr;

use pm_core::Yards;

use crate::{PitchError, PitchResult};

// ── PitchConfig ───────────────────────────────────────────────────────────────

/// Dimensions of one pitch size.
///
/// A goal area with either dimension `0` does not exist for that size (5-a-side
/// and 7-a-side rules); no goal-area waypoints are generated for it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchConfig {
    /// Human-readable label, e.g. "9v9 Youth".
    pub name: String,
    /// Goal line to goal line.
    pub length: Yards,
    /// Touchline to touchline.
    pub width: Yards,
    /// Depth of the penalty area measured from the goal line.
    pub penalty_area_length: Yards,
    /// Extent of the penalty area along the goal line.
    pub penalty_area_width: Yards,
    pub goal_area_length: Yards,
    pub goal_area_width: Yards,
    pub penalty_spot_distance: Yards,
    pub center_circle_radius: Yards,
}

impl PitchConfig {
    /// `true` when both goal-area dimensions are non-zero.
    #[inline]
    pub fn has_goal_area(&self) -> bool {
        self.goal_area_length.is_positive() && self.goal_area_width.is_positive()
    }

    /// Number of waypoints [`generate_waypoints`](crate::generate_waypoints)
    /// produces for this size: 10, or 14 with a goal area.
    #[inline]
    pub fn waypoint_count(&self) -> usize {
        if self.has_goal_area() { 14 } else { 10 }
    }

    /// Check the dimensional invariants.
    ///
    /// # Errors
    ///
    /// [`PitchError::InvalidConfig`] naming the first violated rule.
    pub fn validate(&self) -> PitchResult<()> {
        let fail = |reason: &str| {
            Err(PitchError::InvalidConfig { name: self.name.clone(), reason: reason.to_owned() })
        };

        let all = [
            self.length,
            self.width,
            self.penalty_area_length,
            self.penalty_area_width,
            self.goal_area_length,
            self.goal_area_width,
            self.penalty_spot_distance,
            self.center_circle_radius,
        ];
        if all.iter().any(|y| !y.0.is_finite() || y.0 < 0.0) {
            return fail("dimensions must be finite and non-negative");
        }
        if self.length.0 <= 0.0 || self.width.0 <= 0.0 {
            return fail("length and width must be positive");
        }
        if self.penalty_area_length.0 * 2.0 > self.length.0 {
            return fail("penalty areas overlap at the halfway line");
        }
        if self.penalty_area_width > self.width {
            return fail("penalty area is wider than the pitch");
        }
        if self.has_goal_area() {
            if self.goal_area_length > self.penalty_area_length {
                return fail("goal area is deeper than the penalty area");
            }
            if self.goal_area_width > self.penalty_area_width {
                return fail("goal area is wider than the penalty area");
            }
        }
        Ok(())
    }
}

// ── PitchSize ─────────────────────────────────────────────────────────────────

/// The built-in pitch sizes, keyed the way sites store them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchSize {
    #[cfg_attr(feature = "serde", serde(rename = "5v5"))]
    FiveASide,
    #[cfg_attr(feature = "serde", serde(rename = "7v7"))]
    SevenASide,
    #[cfg_attr(feature = "serde", serde(rename = "9v9"))]
    NineASide,
    #[cfg_attr(feature = "serde", serde(rename = "11v11-u13"))]
    ElevenU13,
    #[cfg_attr(feature = "serde", serde(rename = "11v11-u15"))]
    ElevenU15,
    #[cfg_attr(feature = "serde", serde(rename = "11v11-senior"))]
    ElevenSenior,
}

impl PitchSize {
    pub const ALL: [PitchSize; 6] = [
        PitchSize::FiveASide,
        PitchSize::SevenASide,
        PitchSize::NineASide,
        PitchSize::ElevenU13,
        PitchSize::ElevenU15,
        PitchSize::ElevenSenior,
    ];

    /// Storage key, e.g. `"11v11-u15"`.
    pub fn key(self) -> &'static str {
        match self {
            PitchSize::FiveASide    => "5v5",
            PitchSize::SevenASide   => "7v7",
            PitchSize::NineASide    => "9v9",
            PitchSize::ElevenU13    => "11v11-u13",
            PitchSize::ElevenU15    => "11v11-u15",
            PitchSize::ElevenSenior => "11v11-senior",
        }
    }

    /// The fixed dimensions for this size.
    pub fn config(self) -> PitchConfig {
        // (name, L, W, PAL, PAW, GAL, GAW, spot, circle)
        let (name, l, w, pal, paw, gal, gaw, spot, circle) = match self {
            PitchSize::FiveASide    => ("5v5 Mini Soccer", 40.0, 30.0,  9.0, 16.0, 0.0,  0.0, 6.5,  3.0),
            PitchSize::SevenASide   => ("7v7 Mini Soccer", 60.0, 40.0, 10.0, 18.0, 0.0,  0.0, 8.0,  6.0),
            PitchSize::NineASide    => ("9v9 Youth",       80.0, 50.0, 13.0, 32.0, 4.0, 14.0, 9.0,  8.0),
            PitchSize::ElevenU13    => ("11v11 U13-U14",   90.0, 55.0, 14.0, 35.0, 5.0, 16.0, 12.0, 10.0),
            PitchSize::ElevenU15    => ("11v11 U15-U16",  100.0, 60.0, 18.0, 44.0, 6.0, 20.0, 12.0, 10.0),
            PitchSize::ElevenSenior => ("11v11 Senior",   110.0, 70.0, 18.0, 44.0, 6.0, 20.0, 12.0, 10.0),
        };
        PitchConfig {
            name:                  name.to_owned(),
            length:                Yards(l),
            width:                 Yards(w),
            penalty_area_length:   Yards(pal),
            penalty_area_width:    Yards(paw),
            goal_area_length:      Yards(gal),
            goal_area_width:       Yards(gaw),
            penalty_spot_distance: Yards(spot),
            center_circle_radius:  Yards(circle),
        }
    }
}

impl FromStr for PitchSize {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        PitchSize::ALL
            .into_iter()
            .find(|size| size.key() == key)
            .ok_or_else(|| PitchError::UnknownSize(key.to_owned()))
    }
}

impl fmt::Display for PitchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
