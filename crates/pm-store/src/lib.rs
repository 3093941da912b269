//! `pm-store`: persistence for the pitch_marker workspace.
//!
//! Sites are saved as one JSON file.  Finished marking sessions are written
//! by a [`SummaryWriter`] backend:
//!
//! | Feature   | Backend     | Files created                                    |
//! |-----------|-------------|--------------------------------------------------|
//! | *(none)*  | CSV         | `marking_summaries.csv`, `marked_points.csv`     |
//! | `sqlite`  | SQLite      | `markings.db`                                    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pm_store::{CsvSummaryWriter, SummaryWriter};
//!
//! let mut writer = CsvSummaryWriter::new(Path::new("./output"))?;
//! writer.write_summary(&controller.finish(UnixMillis::now())?)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod site;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::CsvSummaryWriter;
pub use error::{StoreError, StoreResult};
pub use json::JsonSiteStore;
pub use site::{Site, SiteKey, SiteLocation, SitePitch};
pub use writer::SummaryWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSummaryWriter;
