//! Pitch anchoring and the per-pitch placement context.
//!
//! A pitch is positioned either by its centre or by one locked corner.  The
//! two modes are a tagged union ([`Anchor`]) and converting between them is
//! total: switching mode captures whatever the current geometry implies, so
//! the rendered pitch does not move.
//!
//! [`PitchPlacement`] bundles the selected configuration, the anchor and the
//! rotation into one value.  Operations that need all three report
//! "not ready" until each has been supplied.

use pm_core::{CoreError, GeoPoint, Rotation};

use crate::geometry::{CornerRole, PitchCorners, center_from_corner, pitch_corners};
use crate::waypoint::{Waypoint, generate_waypoints};
use crate::{PitchConfig, PitchResult};

// ── Anchor ────────────────────────────────────────────────────────────────────

/// The fixed reference used to position a pitch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// The pitch's geometric centre.
    Center(GeoPoint),
    /// One designated corner (corner lock).
    Corner { point: GeoPoint, role: CornerRole },
}

impl Anchor {
    /// The pitch centre this anchor implies for `config` at `rotation`.
    pub fn center(&self, config: &PitchConfig, rotation: Rotation) -> GeoPoint {
        match *self {
            Anchor::Center(point) => point,
            Anchor::Corner { point, role } => center_from_corner(point, config, rotation, role),
        }
    }

    /// Equivalent centre anchor.
    pub fn to_center(&self, config: &PitchConfig, rotation: Rotation) -> Anchor {
        Anchor::Center(self.center(config, rotation))
    }

    /// Equivalent corner anchor for `role`.
    pub fn to_corner(&self, role: CornerRole, config: &PitchConfig, rotation: Rotation) -> Anchor {
        if let Anchor::Corner { point, role: current } = *self
            && current == role
        {
            return Anchor::Corner { point, role };
        }
        let corners = pitch_corners(self.center(config, rotation), config, rotation);
        Anchor::Corner { point: corners.get(role), role }
    }

    /// The locked corner role, if in corner mode.
    pub fn corner_role(&self) -> Option<CornerRole> {
        match *self {
            Anchor::Center(_) => None,
            Anchor::Corner { role, .. } => Some(role),
        }
    }
}

// ── PitchPlacement ────────────────────────────────────────────────────────────

/// Configuration, anchor and rotation for one pitch.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchPlacement {
    config:   Option<PitchConfig>,
    anchor:   Option<Anchor>,
    rotation: Rotation,
}

impl PitchPlacement {
    /// An empty placement: no configuration, no anchor, rotation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A centre-anchored placement with everything supplied.
    pub fn centered(config: PitchConfig, center: GeoPoint, rotation: Rotation) -> Self {
        Self { config: Some(config), anchor: Some(Anchor::Center(center)), rotation }
    }

    pub fn config(&self) -> Option<&PitchConfig> {
        self.config.as_ref()
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Select a pitch size.  The anchor is kept as-is: in corner mode the
    /// locked corner stays put and the centre follows the new dimensions.
    pub fn select_config(&mut self, config: PitchConfig) {
        self.config = Some(config);
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = Some(anchor);
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Set rotation from raw manual input, clamping into `[0, 359]`.
    pub fn set_rotation_degrees(&mut self, degrees: i64) {
        self.rotation = Rotation::new(degrees);
    }

    fn ready(&self) -> PitchResult<(&PitchConfig, Anchor)> {
        let config = self
            .config
            .as_ref()
            .ok_or(CoreError::NotReady("no pitch size selected"))?;
        let anchor = self.anchor.ok_or(CoreError::NotReady("no anchor set"))?;
        Ok((config, anchor))
    }

    /// The pitch centre implied by the current anchor.
    pub fn center(&self) -> PitchResult<GeoPoint> {
        let (config, anchor) = self.ready()?;
        Ok(anchor.center(config, self.rotation))
    }

    /// Current corners for overlay rendering.
    pub fn corners(&self) -> PitchResult<PitchCorners> {
        let (config, anchor) = self.ready()?;
        Ok(pitch_corners(anchor.center(config, self.rotation), config, self.rotation))
    }

    /// The ordered marking waypoints for the current placement.
    pub fn waypoints(&self) -> PitchResult<Vec<Waypoint>> {
        let corners = self.corners()?;
        let (config, _) = self.ready()?;
        Ok(generate_waypoints(&corners, config, self.rotation))
    }

    /// Switch to corner mode on `role`, capturing the corner implied by the
    /// current geometry.
    pub fn lock_corner(&mut self, role: CornerRole) -> PitchResult<()> {
        let (config, anchor) = self.ready()?;
        self.anchor = Some(anchor.to_corner(role, config, self.rotation));
        Ok(())
    }

    /// Switch back to centre mode, capturing the centre implied by the locked
    /// corner.
    pub fn unlock_corner(&mut self) -> PitchResult<()> {
        let (config, anchor) = self.ready()?;
        self.anchor = Some(anchor.to_center(config, self.rotation));
        Ok(())
    }

    /// In corner mode, move the locked corner to a new GPS fix.  Returns
    /// `false` (and changes nothing) in centre mode or with no anchor.
    pub fn track_corner(&mut self, fix: GeoPoint) -> bool {
        match self.anchor {
            Some(Anchor::Corner { role, .. }) => {
                self.anchor = Some(Anchor::Corner { point: fix, role });
                true
            }
            _ => false,
        }
    }

    /// In centre mode (or with no anchor yet), move the centre.  Returns
    /// `false` while a corner is locked.
    pub fn move_center(&mut self, center: GeoPoint) -> bool {
        match self.anchor {
            Some(Anchor::Corner { .. }) => false,
            _ => {
                self.anchor = Some(Anchor::Center(center));
                true
            }
        }
    }
}
