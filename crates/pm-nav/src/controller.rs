//! The marking controller: one navigation session plus the location
//! subscription feeding it.
//!
//! The controller owns the lifecycle.  [`begin`] cancels any existing
//! subscription before opening a new one, and both [`exit`] and [`finish`]
//! tear the subscription down, so at most one stream is ever live and no fix
//! from an old session reaches a new one.
//!
//! Events are pulled with [`pump`], which folds them into the current
//! [`FixState`]; guidance and the mark gate are always evaluated against the
//! newest fix.
//!
//! [`begin`]: MarkingController::begin
//! [`exit`]: MarkingController::exit
//! [`finish`]: MarkingController::finish
//! [`pump`]: MarkingController::pump

use pm_core::{Rotation, UnixMillis};
use pm_pitch::{PitchPlacement, Waypoint};
use tracing::{debug, info, warn};

use crate::{
    FixState, FixStatus, Guidance, LocationEvent, LocationFix, LocationProvider,
    LocationSubscription, MarkOutcome, MarkingSummary, NavConfig, NavError, NavResult,
    NavigationSession, ProximityGate, WaypointStatus,
};

struct ActiveMarking<S> {
    pitch_name:   String,
    rotation:     Rotation,
    session:      NavigationSession,
    subscription: S,
}

pub struct MarkingController<P: LocationProvider> {
    provider: P,
    config:   NavConfig,
    gate:     ProximityGate,
    fix:      FixState,
    active:   Option<ActiveMarking<P::Subscription>>,
}

impl<P: LocationProvider> MarkingController<P> {
    pub fn new(provider: P, config: NavConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self {
            provider,
            gate: config.gate(),
            config,
            fix: FixState::new(),
            active: None,
        })
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start marking the placed pitch.  Any session in progress is discarded.
    pub fn begin(&mut self, placement: &PitchPlacement) -> NavResult<()> {
        let waypoints = placement.waypoints()?;
        let name = placement.config().map(|c| c.name.clone()).unwrap_or_default();
        self.begin_with(name, placement.rotation(), waypoints)
    }

    /// Start marking an explicit waypoint list.
    pub fn begin_with(
        &mut self,
        pitch_name: impl Into<String>,
        rotation: Rotation,
        waypoints: Vec<Waypoint>,
    ) -> NavResult<()> {
        let session = NavigationSession::begin(waypoints)?;
        self.teardown();
        let subscription = self.provider.subscribe();
        let pitch_name = pitch_name.into();
        info!(pitch = %pitch_name, rotation = rotation.degrees(), "marking started");
        self.active = Some(ActiveMarking { pitch_name, rotation, session, subscription });
        Ok(())
    }

    /// Switch to a different pitch mid-marking.  Marked points are discarded.
    pub fn switch_pitch(&mut self, placement: &PitchPlacement) -> NavResult<()> {
        if self.active.is_some() {
            info!("switching pitch; discarding current session");
        }
        self.begin(placement)
    }

    /// The placement was adjusted: regenerate waypoints but keep marked
    /// points.  Returns the number of orphaned points.
    pub fn rebase(&mut self, placement: &PitchPlacement) -> NavResult<usize> {
        let waypoints = placement.waypoints()?;
        let active = self.active.as_mut().ok_or(NavError::NoSession)?;
        active.rotation = placement.rotation();
        active.session.rebase(waypoints)
    }

    /// Abandon the session without a summary.
    pub fn exit(&mut self) {
        if self.active.is_some() {
            info!("marking abandoned");
        }
        self.teardown();
    }

    /// Finish a completed session, tear it down, and return its summary.
    pub fn finish(&mut self, completed_at: UnixMillis) -> NavResult<MarkingSummary> {
        let active = self.active.as_mut().ok_or(NavError::NoSession)?;
        let summary = active.session.finish(active.pitch_name.clone(), active.rotation, completed_at)?;
        self.teardown();
        Ok(summary)
    }

    fn teardown(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.subscription.cancel();
        }
        self.fix = FixState::new();
    }

    // ── Location updates ──────────────────────────────────────────────────

    /// Drain pending location events.  Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let event = match self.active.as_mut() {
                Some(active) => active.subscription.try_next(),
                None => None,
            };
            let Some(event) = event else { break };
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    fn handle_event(&mut self, event: LocationEvent) {
        match &event {
            LocationEvent::Fix(fix) => {
                debug!(lat = fix.lat, lng = fix.lng, accuracy = fix.accuracy, "location fix");
            }
            LocationEvent::Error(e) => warn!(error = %e, "location error"),
        }
        self.fix = std::mem::take(&mut self.fix).apply(event);
    }

    #[inline]
    pub fn current_fix(&self) -> Option<&LocationFix> {
        self.fix.current()
    }

    pub fn fix_status(&self) -> FixStatus {
        self.fix.status(&self.config)
    }

    // ── Session views ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Option<&NavigationSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    pub fn statuses(&self) -> Vec<WaypointStatus> {
        self.session().map(NavigationSession::statuses).unwrap_or_default()
    }

    /// Guidance to the current waypoint from the latest fix.
    pub fn guidance(&self) -> Option<Guidance> {
        let target = self.session()?.current_waypoint()?;
        let fix = self.fix.current()?;
        Some(Guidance::compute(target, fix, &self.gate, &self.config))
    }

    pub fn can_mark(&self) -> bool {
        self.guidance().is_some_and(|g| g.can_mark())
    }

    // ── Commands ──────────────────────────────────────────────────────────

    pub fn navigate_to(&mut self, index: usize) -> bool {
        self.active.as_mut().is_some_and(|a| a.session.navigate_to(index))
    }

    /// Mark the current waypoint from the latest fix.
    pub fn mark(&mut self, at: UnixMillis) -> MarkOutcome {
        let Some(active) = self.active.as_mut() else {
            return MarkOutcome::Inactive;
        };
        let Some(fix) = self.fix.current() else {
            return MarkOutcome::NoFix;
        };
        active.session.mark_current(fix, &self.gate, at)
    }
}

impl<P: LocationProvider> Drop for MarkingController<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}
