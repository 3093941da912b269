//! Error types for pm-store.

use pm_pitch::PitchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Pitch(#[from] PitchError),

    #[error("no saved site {name:?} created at {created}")]
    UnknownSite { name: String, created: i64 },

    #[error("pitch index {index} out of range (site has {len})")]
    PitchIndex { index: usize, len: usize },

    #[error("site name must not be empty")]
    EmptyName,
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
