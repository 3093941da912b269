//! Navigation tuning.
//!
//! Typically left at [`NavConfig::default`]; the application crate may load
//! it from a JSON file (see the `serde` feature).

use crate::fix::FixQuality;
use crate::gate::ProximityGate;
use crate::{NavError, NavResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Minimum marking radius in metres, however good the fix.  Default: 2.
    pub gate_floor_m: f64,

    /// Reported accuracy below this is "excellent".  Default: 5.
    pub excellent_accuracy_m: f64,

    /// Reported accuracy below this (and not excellent) is "good"; anything
    /// worse is "fair".  Default: 10.
    pub good_accuracy_m: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            gate_floor_m:         ProximityGate::DEFAULT_FLOOR_M,
            excellent_accuracy_m: 5.0,
            good_accuracy_m:      10.0,
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> NavResult<()> {
        if !(self.gate_floor_m.is_finite() && self.gate_floor_m > 0.0) {
            return Err(NavError::Config(format!(
                "gate_floor_m must be positive, got {}",
                self.gate_floor_m
            )));
        }
        if !(self.excellent_accuracy_m > 0.0 && self.excellent_accuracy_m <= self.good_accuracy_m) {
            return Err(NavError::Config(format!(
                "expected 0 < excellent_accuracy_m ({}) <= good_accuracy_m ({})",
                self.excellent_accuracy_m, self.good_accuracy_m
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn gate(&self) -> ProximityGate {
        ProximityGate::new(self.gate_floor_m)
    }

    /// Classify a reported accuracy radius.
    pub fn classify(&self, accuracy_m: f64) -> FixQuality {
        if accuracy_m < self.excellent_accuracy_m {
            FixQuality::Excellent
        } else if accuracy_m < self.good_accuracy_m {
            FixQuality::Good
        } else {
            FixQuality::Fair
        }
    }
}
