//! Pitch-subsystem error type.

use thiserror::Error;

use pm_core::CoreError;

/// Errors produced by `pm-pitch`.
#[derive(Debug, Error)]
pub enum PitchError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("invalid pitch configuration {name:?}: {reason}")]
    InvalidConfig { name: String, reason: String },

    #[error("unknown pitch size {0:?}")]
    UnknownSize(String),

    #[error("unknown corner role {0:?}")]
    UnknownCorner(String),

    #[error("corner points are not in bottom-left, bottom-right, top-right, top-left order")]
    CornerOrder,

    #[error("catalogue parse error: {0}")]
    Csv(#[from] csv::Error),
}

pub type PitchResult<T> = Result<T, PitchError>;
