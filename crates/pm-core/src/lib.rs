//! `pm-core`: foundational types for the `pitch_marker` workspace.
//!
//! This crate is a dependency of every other `pm-*` crate.  It has no `pm-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, initial bearing       |
//! | [`projection`]  | `LocalOffset`, flat-earth `from_offset`/`to_offset`   |
//! | [`units`]       | `Yards`, the yard → metre constant                    |
//! | [`rotation`]    | `Rotation`, clamped integer degrees                  |
//! | [`time`]        | `UnixMillis` timestamps                               |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod projection;
pub mod rotation;
pub mod time;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint};
pub use projection::{LocalOffset, METERS_PER_DEGREE_LAT};
pub use rotation::Rotation;
pub use time::UnixMillis;
pub use units::{YARDS_TO_METERS, Yards};
