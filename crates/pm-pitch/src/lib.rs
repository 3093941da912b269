//! `pm-pitch`: pitch sizes, geometry, anchoring and waypoint generation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`config`]    | `PitchConfig`, the built-in `PitchSize`s                        |
//! | [`catalog`]   | `PitchCatalog`: size key → config, CSV loading                 |
//! | [`geometry`]  | `pitch_corners`, `center_from_corner`, `box_corners`            |
//! | [`anchor`]    | `Anchor` (centre / corner lock), `PitchPlacement`               |
//! | [`waypoint`]  | `Waypoint`, `generate_waypoints`                                |
//! | [`error`]     | `PitchError`, `PitchResult<T>`                                  |
//!
//! # Pipeline
//!
//! 1. Look up a [`PitchConfig`] (yards) in a [`PitchCatalog`].
//! 2. Resolve the [`Anchor`] to a centre with the current [`Rotation`][pm_core::Rotation].
//! 3. [`pitch_corners`] builds the rotated rectangle in metres and projects it.
//! 4. [`generate_waypoints`] names the 10 or 14 points to walk to.

pub mod anchor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod waypoint;

#[cfg(test)]
mod tests;

pub use anchor::{Anchor, PitchPlacement};
pub use catalog::PitchCatalog;
pub use config::{PitchConfig, PitchSize};
pub use error::{PitchError, PitchResult};
pub use geometry::{
    BoxCorners, BoxSide, CornerRole, PitchCorners, box_corners, center_from_corner,
    penalty_spots, pitch_corners,
};
pub use waypoint::{Waypoint, WaypointKind, generate_waypoints};
