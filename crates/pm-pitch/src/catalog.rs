//! The pitch configuration store: a read-only map from size key to
//! [`PitchConfig`].
//!
//! [`PitchCatalog::builtin`] holds the six standard sizes.  Clubs with
//! non-standard pitches can load extra sizes from CSV:
//!
//! ```csv
//! key,name,length,width,penalty_area_length,penalty_area_width,goal_area_length,goal_area_width,penalty_spot_distance,center_circle_radius
//! 6v6,6v6 Small Sided,50,35,9,18,0,0,7,5
//! ```
//!
//! Every row is validated on load; one bad row rejects the whole file.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use pm_core::{CoreError, Yards};

use crate::{PitchConfig, PitchError, PitchResult, PitchSize};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    key:                   String,
    name:                  String,
    length:                f64,
    width:                 f64,
    penalty_area_length:   f64,
    penalty_area_width:    f64,
    goal_area_length:      f64,
    goal_area_width:       f64,
    penalty_spot_distance: f64,
    center_circle_radius:  f64,
}

impl From<CatalogRecord> for PitchConfig {
    fn from(r: CatalogRecord) -> Self {
        PitchConfig {
            name:                  r.name,
            length:                Yards(r.length),
            width:                 Yards(r.width),
            penalty_area_length:   Yards(r.penalty_area_length),
            penalty_area_width:    Yards(r.penalty_area_width),
            goal_area_length:      Yards(r.goal_area_length),
            goal_area_width:       Yards(r.goal_area_width),
            penalty_spot_distance: Yards(r.penalty_spot_distance),
            center_circle_radius:  Yards(r.center_circle_radius),
        }
    }
}

// ── PitchCatalog ──────────────────────────────────────────────────────────────

/// Size key → configuration.  Iterates in key order.
#[derive(Clone, Debug, Default)]
pub struct PitchCatalog {
    entries: BTreeMap<String, PitchConfig>,
}

impl PitchCatalog {
    /// An empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The six standard sizes from [`PitchSize::ALL`].
    pub fn builtin() -> Self {
        let entries = PitchSize::ALL
            .into_iter()
            .map(|size| (size.key().to_owned(), size.config()))
            .collect();
        Self { entries }
    }

    /// Add or replace one entry after validating it.
    pub fn insert(&mut self, key: impl Into<String>, config: PitchConfig) -> PitchResult<()> {
        config.validate()?;
        self.entries.insert(key.into(), config);
        Ok(())
    }

    /// Look up a size key.
    ///
    /// # Errors
    ///
    /// [`PitchError::UnknownSize`] if the key is not present.
    pub fn get(&self, key: &str) -> PitchResult<&PitchConfig> {
        self.entries
            .get(key)
            .ok_or_else(|| PitchError::UnknownSize(key.to_owned()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PitchConfig)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge every row of a CSV file into this catalogue.
    pub fn load_csv(&mut self, path: &Path) -> PitchResult<usize> {
        let file = std::fs::File::open(path).map_err(CoreError::Io)?;
        self.load_reader(file)
    }

    /// Like [`load_csv`](Self::load_csv) but accepts any `Read` source.
    ///
    /// Returns the number of entries added or replaced.  Nothing is merged if
    /// any row fails to parse or validate.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> PitchResult<usize> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut staged = Vec::new();

        for result in csv_reader.deserialize::<CatalogRecord>() {
            let row = result?;
            let key = row.key.trim().to_owned();
            let config = PitchConfig::from(row);
            config.validate()?;
            staged.push((key, config));
        }

        let count = staged.len();
        for (key, config) in staged {
            debug!(%key, name = %config.name, "catalogue entry loaded");
            self.entries.insert(key, config);
        }
        Ok(count)
    }
}
