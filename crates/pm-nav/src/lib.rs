//! `pm-nav`: location fixes, the proximity gate, and the waypoint
//! navigation state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`fix`]        | `LocationFix`, `LocationEvent`, `FixState` reducer, quality    |
//! | [`gate`]       | `ProximityGate`, `GateReading`                                 |
//! | [`session`]    | `NavigationSession`, `MarkedPoint`, `MarkingSummary`           |
//! | [`guidance`]   | `Guidance`: distance, bearing, instruction text                |
//! | [`provider`]   | `LocationProvider`/`LocationSubscription`, `ChannelProvider`   |
//! | [`controller`] | `MarkingController`: session plus subscription lifecycle       |
//! | [`noise`]      | `GpsNoise`: seeded simulated GPS error                         |
//! | [`config`]     | `NavConfig`                                                    |
//! | [`error`]      | `NavError`, `NavResult<T>`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Serialize/Deserialize on fixes, marked points and summaries |

pub mod config;
pub mod controller;
pub mod error;
pub mod fix;
pub mod gate;
pub mod guidance;
pub mod noise;
pub mod provider;
pub mod session;


pub use config::NavConfig;
pub use controller::MarkingController;
pub use error::{NavError, NavResult};
pub use fix::{FixQuality, FixState, FixStatus, LocationError, LocationEvent, LocationFix};
pub use gate::{GateReading, ProximityGate};
pub use guidance::Guidance;
pub use noise::GpsNoise;
pub use provider::{
    ChannelProvider, ChannelSubscription, LocationFeed, LocationProvider, LocationSubscription,
};
pub use session::{
    ActualLocation, MarkOutcome, MarkedPoint, MarkingSummary, NavigationSession, SessionState,
    WaypointStatus,
};
