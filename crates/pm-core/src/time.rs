//! Wall-clock timestamps.
//!
//! Stored as integer milliseconds since the Unix epoch, which keeps them
//! `Copy`, ordered, and trivially serialisable without a datetime library.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnixMillis(pub i64);

impl UnixMillis {
    /// Current system time.  Clocks set before 1970 read as the epoch.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        UnixMillis(millis)
    }

    #[inline]
    pub fn as_secs(self) -> i64 {
        self.0.div_euclid(1_000)
    }
}

impl fmt::Display for UnixMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
