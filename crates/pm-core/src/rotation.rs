//! Pitch rotation in whole degrees.
//!
//! Every constructor clamps into `[0, 359]`; out-of-range manual input is
//! pinned to the nearest bound rather than rejected or wrapped.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Rotation of the pitch's length axis, integer degrees in `[0, 360)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "u16"))]
pub struct Rotation(u16);

impl Rotation {
    pub const ZERO: Rotation = Rotation(0);
    pub const MAX_DEGREES: u16 = 359;

    /// Clamp `degrees` into `[0, 359]`.
    pub fn new(degrees: i64) -> Self {
        Rotation(degrees.clamp(0, Self::MAX_DEGREES as i64) as u16)
    }

    /// Round and clamp a fractional value, e.g. from a slider.  `NaN` maps to 0.
    pub fn from_f64(degrees: f64) -> Self {
        if degrees.is_nan() {
            return Rotation::ZERO;
        }
        Rotation(degrees.round().clamp(0.0, Self::MAX_DEGREES as f64) as u16)
    }

    /// Parse free-text input, clamping the result.
    pub fn parse_clamped(text: &str) -> CoreResult<Self> {
        text.trim()
            .parse::<f64>()
            .map(Self::from_f64)
            .map_err(|e| CoreError::Parse(format!("rotation {text:?}: {e}")))
    }

    #[inline]
    pub fn degrees(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        (self.0 as f64).to_radians()
    }
}

impl From<i64> for Rotation {
    fn from(degrees: i64) -> Self {
        Rotation::new(degrees)
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> u16 {
        r.0
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
