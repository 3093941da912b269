//! Location fixes and the per-event reducer.
//!
//! Fixes arrive from a location provider as a stream of [`LocationEvent`]s.
//! [`FixState::apply`] folds one event into the current state; the latest
//! event always supersedes the previous one and nothing is queued or
//! smoothed.  A provider error, or a fix with unusable numbers, leaves the
//! state with no current fix.

use std::fmt;

use pm_core::GeoPoint;

use crate::NavConfig;

// ── LocationFix ───────────────────────────────────────────────────────────────

/// One position report.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationFix {
    pub lat: f64,
    pub lng: f64,
    /// 1-sigma horizontal accuracy radius in metres.
    pub accuracy: f64,
    /// Device heading in degrees clockwise from north, when moving.
    pub heading: Option<f64>,
}

impl LocationFix {
    pub fn new(lat: f64, lng: f64, accuracy: f64) -> Self {
        Self { lat, lng, accuracy, heading: None }
    }

    pub fn at(point: GeoPoint, accuracy: f64) -> Self {
        Self::new(point.lat, point.lng, accuracy)
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Finite coordinates and a finite, non-negative accuracy.
    pub fn is_usable(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.accuracy.is_finite()
            && self.accuracy >= 0.0
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Why a provider could not produce a fix.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationError {
    PermissionDenied,
    Timeout,
    Unavailable(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => f.write_str("location permission denied"),
            LocationError::Timeout          => f.write_str("location request timed out"),
            LocationError::Unavailable(why) => write!(f, "location unavailable: {why}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LocationEvent {
    Fix(LocationFix),
    Error(LocationError),
}

// ── Quality / status ──────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixQuality {
    Excellent,
    Good,
    Fair,
}

impl FixQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            FixQuality::Excellent => "excellent",
            FixQuality::Good      => "good",
            FixQuality::Fair      => "fair",
        }
    }
}

impl fmt::Display for FixQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the UI should show for the GPS indicator.
#[derive(Clone, Debug, PartialEq)]
pub enum FixStatus {
    /// Nothing received yet (or the last fix was unusable).
    NoFix,
    /// The provider reported an error; no fix is available.
    Unavailable(LocationError),
    Fix { quality: FixQuality, accuracy: f64 },
}

impl fmt::Display for FixStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixStatus::NoFix => f.write_str("GPS: no fix"),
            FixStatus::Unavailable(e) => write!(f, "GPS error: {e}"),
            FixStatus::Fix { quality, accuracy } => write!(f, "GPS: {quality} (±{accuracy:.1}m)"),
        }
    }
}

// ── FixState ──────────────────────────────────────────────────────────────────

/// The "current location" value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixState {
    latest:     Option<LocationFix>,
    last_error: Option<LocationError>,
}

impl FixState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state.
    #[must_use]
    pub fn apply(self, event: LocationEvent) -> FixState {
        match event {
            LocationEvent::Fix(fix) if fix.is_usable() => FixState { latest: Some(fix), last_error: None },
            LocationEvent::Fix(_) => FixState { latest: None, last_error: None },
            LocationEvent::Error(e) => FixState { latest: None, last_error: Some(e) },
        }
    }

    #[inline]
    pub fn current(&self) -> Option<&LocationFix> {
        self.latest.as_ref()
    }

    pub fn status(&self, config: &NavConfig) -> FixStatus {
        match (&self.latest, &self.last_error) {
            (Some(fix), _) => FixStatus::Fix {
                quality:  config.classify(fix.accuracy),
                accuracy: fix.accuracy,
            },
            (None, Some(e)) => FixStatus::Unavailable(e.clone()),
            (None, None) => FixStatus::NoFix,
        }
    }
}
