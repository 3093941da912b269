//! JSON-file site store.
//!
//! All sites live in one file as a JSON array.  Every mutation reads the
//! file, applies the change, and rewrites it through a sibling temporary
//! file so a crash never leaves a half-written store.  A missing file is an
//! empty store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pm_core::UnixMillis;
use tracing::{debug, info};

use crate::{Site, SiteKey, StoreError, StoreResult};

pub struct JsonSiteStore {
    path: PathBuf,
}

impl JsonSiteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every saved site, in save order.
    pub fn list(&self) -> StoreResult<Vec<Site>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub fn load(&self, key: &SiteKey) -> StoreResult<Site> {
        self.list()?
            .into_iter()
            .find(|s| s.matches(key))
            .ok_or_else(|| unknown(key))
    }

    /// Insert or replace `site`, stamping its modified time.
    pub fn save(&self, site: &mut Site, now: UnixMillis) -> StoreResult<()> {
        site.modified = now;
        let mut sites = self.list()?;
        let key = site.key();
        match sites.iter_mut().find(|s| s.matches(&key)) {
            Some(existing) => *existing = site.clone(),
            None => sites.push(site.clone()),
        }
        self.write_all(&sites)?;
        info!(site = %site.name, pitches = site.pitches.len(), "site saved");
        Ok(())
    }

    /// Remove a site.  Returns `false` if it was not stored.
    pub fn delete(&self, key: &SiteKey) -> StoreResult<bool> {
        let mut sites = self.list()?;
        let before = sites.len();
        sites.retain(|s| !s.matches(key));
        if sites.len() == before {
            return Ok(false);
        }
        self.write_all(&sites)?;
        info!(site = %key.name, "site deleted");
        Ok(true)
    }

    /// Rename a stored site in place and return its new key.
    pub fn rename(&self, key: &SiteKey, name: &str, now: UnixMillis) -> StoreResult<SiteKey> {
        let mut sites = self.list()?;
        let site = sites.iter_mut().find(|s| s.matches(key)).ok_or_else(|| unknown(key))?;
        site.rename(name, now)?;
        let new_key = site.key();
        self.write_all(&sites)?;
        info!(from = %key.name, to = %new_key.name, "site renamed");
        Ok(new_key)
    }

    fn write_all(&self, sites: &[Site]) -> StoreResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(sites)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), sites = sites.len(), "site store written");
        Ok(())
    }
}

fn unknown(key: &SiteKey) -> StoreError {
    StoreError::UnknownSite { name: key.name.clone(), created: key.created.0 }
}
