use pm_pitch::PitchError;
use thiserror::Error;

use crate::SessionState;

#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    Pitch(#[from] PitchError),

    #[error("no waypoints to mark")]
    NoWaypoints,

    #[error("duplicate waypoint name {0:?}")]
    DuplicateWaypoint(String),

    #[error("session is {actual}, expected {expected}")]
    InvalidState {
        expected: SessionState,
        actual:   SessionState,
    },

    #[error("no marking session is active")]
    NoSession,

    #[error("invalid navigation config: {0}")]
    Config(String),
}

pub type NavResult<T> = Result<T, NavError>;
