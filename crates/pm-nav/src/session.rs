//! The navigation session: an ordered waypoint list, the points marked so
//! far, and which waypoint is current.
//!
//! # States
//!
//! ```text
//!   begin ──► Active ──(last unmarked point marked)──► Completed ──finish──► Finished
//!               ▲                                         │
//!               └──────────── rebase (new unmarked) ◄─────┘
//! ```
//!
//! Marked points are joined to waypoints **by name**.  After [`rebase`]
//! replaces the waypoint list, marked points whose names no longer exist are
//! kept as *orphans*: they still appear in the summary but do not count
//! towards completion.
//!
//! [`rebase`]: NavigationSession::rebase

use std::fmt;

use pm_core::{Rotation, UnixMillis};
use pm_pitch::Waypoint;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use crate::{GateReading, LocationFix, NavError, NavResult, ProximityGate};

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    Active,
    Completed,
    Finished,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionState::Active    => "active",
            SessionState::Completed => "completed",
            SessionState::Finished  => "finished",
        })
    }
}

/// Where the user actually stood when a waypoint was marked.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActualLocation {
    pub lat:      f64,
    pub lng:      f64,
    pub accuracy: f64,
}

impl From<&LocationFix> for ActualLocation {
    fn from(fix: &LocationFix) -> Self {
        Self { lat: fix.lat, lng: fix.lng, accuracy: fix.accuracy }
    }
}

/// A waypoint together with the fix it was marked from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkedPoint {
    pub waypoint:        Waypoint,
    pub actual_location: ActualLocation,
    pub timestamp:       UnixMillis,
}

impl MarkedPoint {
    /// Distance from the intended waypoint to where it was marked.
    pub fn offset_m(&self) -> f64 {
        let actual = pm_core::GeoPoint::new(self.actual_location.lat, self.actual_location.lng);
        self.waypoint.point().distance_m(actual)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum WaypointStatus {
    Completed,
    Current,
    Incomplete,
}

/// Result of a mark attempt.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    /// Waypoint `marked` recorded; `next` is now current.
    Advanced { marked: usize, next: usize },
    /// Waypoint `marked` recorded and every waypoint is now marked.
    Completed { marked: usize },
    /// The gate refused; nothing changed.
    TooFar(GateReading),
    /// No usable fix is available; nothing changed.
    NoFix,
    /// The session is not active; nothing changed.
    Inactive,
}

impl MarkOutcome {
    #[inline]
    pub fn is_recorded(&self) -> bool {
        matches!(self, MarkOutcome::Advanced { .. } | MarkOutcome::Completed { .. })
    }
}

/// Handed to the caller when a completed session is finished.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkingSummary {
    pub pitch_name:    String,
    pub rotation:      Rotation,
    pub marked_points: Vec<MarkedPoint>,
    pub completed_at:  UnixMillis,
}

impl MarkingSummary {
    /// Mean reported accuracy over all marked points.
    pub fn average_accuracy(&self) -> Option<f64> {
        if self.marked_points.is_empty() {
            return None;
        }
        let total: f64 = self.marked_points.iter().map(|p| p.actual_location.accuracy).sum();
        Some(total / self.marked_points.len() as f64)
    }
}

// ── NavigationSession ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct NavigationSession {
    waypoints: Vec<Waypoint>,
    marked:    Vec<MarkedPoint>,
    /// Index into `waypoints`; equals `waypoints.len()` once completed.
    current:   usize,
    state:     SessionState,
}

fn check_waypoints(waypoints: &[Waypoint]) -> NavResult<()> {
    if waypoints.is_empty() {
        return Err(NavError::NoWaypoints);
    }
    let mut seen = FxHashSet::default();
    for wp in waypoints {
        if !seen.insert(wp.name.as_str()) {
            return Err(NavError::DuplicateWaypoint(wp.name.clone()));
        }
    }
    Ok(())
}

impl NavigationSession {
    /// Start a session at waypoint 0 with nothing marked.
    pub fn begin(waypoints: Vec<Waypoint>) -> NavResult<Self> {
        check_waypoints(&waypoints)?;
        info!(waypoints = waypoints.len(), "navigation session started");
        Ok(Self { waypoints, marked: Vec::new(), current: 0, state: SessionState::Active })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[inline]
    pub fn marked_points(&self) -> &[MarkedPoint] {
        &self.marked
    }

    /// Index of the current waypoint, or `None` once every waypoint is marked.
    pub fn current_index(&self) -> Option<usize> {
        (self.current < self.waypoints.len()).then_some(self.current)
    }

    pub fn current_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.get(self.current)
    }

    fn marked_names(&self) -> FxHashSet<&str> {
        self.marked.iter().map(|p| p.waypoint.name.as_str()).collect()
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.waypoints
            .get(index)
            .is_some_and(|wp| self.marked.iter().any(|p| p.waypoint.name == wp.name))
    }

    /// Waypoints in the current list that have a marked point.
    pub fn completed_count(&self) -> usize {
        let marked = self.marked_names();
        self.waypoints.iter().filter(|wp| marked.contains(wp.name.as_str())).count()
    }

    /// Marked points whose waypoint is no longer in the list.
    pub fn orphaned_points(&self) -> impl Iterator<Item = &MarkedPoint> {
        let names: FxHashSet<&str> = self.waypoints.iter().map(|wp| wp.name.as_str()).collect();
        self.marked.iter().filter(move |p| !names.contains(p.waypoint.name.as_str()))
    }

    /// One status per waypoint, in list order.
    pub fn statuses(&self) -> Vec<WaypointStatus> {
        let marked = self.marked_names();
        self.waypoints
            .iter()
            .enumerate()
            .map(|(i, wp)| {
                if marked.contains(wp.name.as_str()) {
                    WaypointStatus::Completed
                } else if i == self.current {
                    WaypointStatus::Current
                } else {
                    WaypointStatus::Incomplete
                }
            })
            .collect()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Make waypoint `index` current.  Ignored (returns `false`) unless the
    /// session is active and that waypoint is unmarked.
    pub fn navigate_to(&mut self, index: usize) -> bool {
        if self.state != SessionState::Active || index >= self.waypoints.len() || self.is_marked(index) {
            return false;
        }
        debug!(index, name = %self.waypoints[index].name, "navigate to waypoint");
        self.current = index;
        true
    }

    /// Gate reading for the current waypoint, if there is one.
    pub fn evaluate(&self, fix: &LocationFix, gate: &ProximityGate) -> Option<GateReading> {
        self.current_waypoint().map(|wp| gate.evaluate(fix, wp.point()))
    }

    /// Record the current waypoint as marked from `fix`, if the gate permits.
    ///
    /// On success the next unmarked waypoint after the current one becomes
    /// current; if there is none further along, the lowest-indexed unmarked
    /// waypoint is chosen.  When none remain the session completes.
    pub fn mark_current(
        &mut self,
        fix: &LocationFix,
        gate: &ProximityGate,
        timestamp: UnixMillis,
    ) -> MarkOutcome {
        if self.state != SessionState::Active {
            return MarkOutcome::Inactive;
        }
        if !fix.is_usable() {
            return MarkOutcome::NoFix;
        }
        let Some(reading) = self.evaluate(fix, gate) else {
            return MarkOutcome::Inactive;
        };
        if !reading.permitted {
            debug!(distance = reading.distance_m, threshold = reading.threshold_m, "mark refused");
            return MarkOutcome::TooFar(reading);
        }

        let marked = self.current;
        let waypoint = self.waypoints[marked].clone();
        info!(index = marked, name = %waypoint.name, accuracy = fix.accuracy, "waypoint marked");
        self.marked.push(MarkedPoint { waypoint, actual_location: fix.into(), timestamp });

        match self.next_unmarked(marked + 1) {
            Some(next) => {
                self.current = next;
                MarkOutcome::Advanced { marked, next }
            }
            None => {
                self.current = self.waypoints.len();
                self.state = SessionState::Completed;
                info!(points = self.marked.len(), "all waypoints marked");
                MarkOutcome::Completed { marked }
            }
        }
    }

    /// First unmarked index at or after `from`, else the first unmarked index.
    fn next_unmarked(&self, from: usize) -> Option<usize> {
        let marked = self.marked_names();
        let unmarked = |i: &usize| !marked.contains(self.waypoints[*i].name.as_str());
        (from..self.waypoints.len())
            .find(unmarked)
            .or_else(|| (0..self.waypoints.len()).find(unmarked))
    }

    /// Replace the waypoint list (the pitch was moved or resized) while
    /// keeping every marked point.  Returns the number of orphaned points.
    ///
    /// The current waypoint keeps its place if its name survives and it is
    /// still unmarked; otherwise the first unmarked waypoint becomes current.
    pub fn rebase(&mut self, waypoints: Vec<Waypoint>) -> NavResult<usize> {
        if self.state == SessionState::Finished {
            return Err(NavError::InvalidState {
                expected: SessionState::Active,
                actual:   SessionState::Finished,
            });
        }
        check_waypoints(&waypoints)?;

        let current_name = self.current_waypoint().map(|wp| wp.name.clone());
        self.waypoints = waypoints;

        let kept = current_name
            .and_then(|name| self.waypoints.iter().position(|wp| wp.name == name))
            .filter(|&i| !self.is_marked(i));
        match kept.or_else(|| self.next_unmarked(0)) {
            Some(i) => {
                self.current = i;
                self.state = SessionState::Active;
            }
            None => {
                self.current = self.waypoints.len();
                self.state = SessionState::Completed;
            }
        }

        let orphans = self.orphaned_points().count();
        if orphans > 0 {
            warn!(orphans, "marked points no longer match any waypoint");
        }
        Ok(orphans)
    }

    /// Close a completed session and produce its summary.
    pub fn finish(
        &mut self,
        pitch_name: impl Into<String>,
        rotation: Rotation,
        completed_at: UnixMillis,
    ) -> NavResult<MarkingSummary> {
        if self.state != SessionState::Completed {
            return Err(NavError::InvalidState {
                expected: SessionState::Completed,
                actual:   self.state,
            });
        }
        self.state = SessionState::Finished;
        let summary = MarkingSummary {
            pitch_name: pitch_name.into(),
            rotation,
            marked_points: self.marked.clone(),
            completed_at,
        };
        info!(pitch = %summary.pitch_name, points = summary.marked_points.len(), "marking finished");
        Ok(summary)
    }
}
