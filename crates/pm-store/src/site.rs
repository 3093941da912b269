//! Sites: a named location holding one or more placed pitches.
//!
//! A site is identified by `(name, created)`; two sites may share a name.
//! Renaming therefore changes the key, and [`JsonSiteStore::rename`] moves
//! the record rather than duplicating it.
//!
//! [`JsonSiteStore::rename`]: crate::JsonSiteStore::rename

use pm_core::{GeoPoint, Rotation, UnixMillis};
use pm_pitch::{PitchPlacement, PitchSize};
use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteLocation {
    pub lat:     f64,
    pub lng:     f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl SiteLocation {
    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// One pitch as saved on a site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SitePitch {
    pub size:     PitchSize,
    pub center:   GeoPoint,
    #[serde(default)]
    pub rotation: Rotation,
    pub added:    UnixMillis,
    pub modified: UnixMillis,
}

impl SitePitch {
    /// A centre-anchored placement ready for geometry or marking.
    pub fn placement(&self) -> PitchPlacement {
        PitchPlacement::centered(self.size.config(), self.center, self.rotation)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SiteKey {
    pub name:    String,
    pub created: UnixMillis,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name:     String,
    pub location: SiteLocation,
    #[serde(default)]
    pub pitches:  Vec<SitePitch>,
    pub created:  UnixMillis,
    pub modified: UnixMillis,
}

impl Site {
    /// A fresh site with a placeholder name derived from the address.
    pub fn new(location: SiteLocation, now: UnixMillis) -> Self {
        let name = format!(
            "Unsaved Site ({})",
            location.address.as_deref().unwrap_or("New Location")
        );
        Self { name, location, pitches: Vec::new(), created: now, modified: now }
    }

    pub fn key(&self) -> SiteKey {
        SiteKey { name: self.name.clone(), created: self.created }
    }

    pub fn matches(&self, key: &SiteKey) -> bool {
        self.name == key.name && self.created == key.created
    }

    pub fn rename(&mut self, name: &str, now: UnixMillis) -> StoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.name = name.to_owned();
        self.modified = now;
        Ok(())
    }

    /// Add a pitch at `center` (the site location if `None`), unrotated.
    /// Returns its index.
    pub fn add_pitch(&mut self, size: PitchSize, center: Option<GeoPoint>, now: UnixMillis) -> usize {
        self.pitches.push(SitePitch {
            size,
            center: center.unwrap_or_else(|| self.location.point()),
            rotation: Rotation::ZERO,
            added: now,
            modified: now,
        });
        self.modified = now;
        self.pitches.len() - 1
    }

    pub fn pitch(&self, index: usize) -> StoreResult<&SitePitch> {
        self.pitches
            .get(index)
            .ok_or(StoreError::PitchIndex { index, len: self.pitches.len() })
    }

    pub fn remove_pitch(&mut self, index: usize, now: UnixMillis) -> StoreResult<SitePitch> {
        self.pitch(index)?;
        self.modified = now;
        Ok(self.pitches.remove(index))
    }

    /// Save the adjusted position of pitch `index`.
    pub fn update_pitch(
        &mut self,
        index: usize,
        center: GeoPoint,
        rotation: Rotation,
        now: UnixMillis,
    ) -> StoreResult<()> {
        let len = self.pitches.len();
        let pitch = self.pitches.get_mut(index).ok_or(StoreError::PitchIndex { index, len })?;
        pitch.center = center;
        pitch.rotation = rotation;
        pitch.modified = now;
        self.modified = now;
        Ok(())
    }

    /// Copy centre and rotation back from an adjusted placement.
    pub fn save_placement(
        &mut self,
        index: usize,
        placement: &PitchPlacement,
        now: UnixMillis,
    ) -> StoreResult<()> {
        let center = placement.center()?;
        self.update_pitch(index, center, placement.rotation(), now)
    }
}
