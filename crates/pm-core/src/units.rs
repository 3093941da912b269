//! Length units.
//!
//! Pitch dimensions are configured in yards and only become metres inside the
//! geometry engine.  Keeping the yard value in its own type means the
//! conversion can only happen through [`Yards::to_meters`].

use std::fmt;

/// Exact international yard in metres.
pub const YARDS_TO_METERS: f64 = 0.9144;

/// A length in yards.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Yards(pub f64);

impl Yards {
    pub const ZERO: Yards = Yards(0.0);

    #[inline]
    pub fn to_meters(self) -> f64 {
        self.0 * YARDS_TO_METERS
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for Yards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} yd", self.0)
    }
}
