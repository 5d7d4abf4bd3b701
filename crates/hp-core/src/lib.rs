//! `hp-core`: foundational types for the `hallpass` tracker.
//!
//! This crate is a dependency of every other `hp-*` crate.  It has no `hp-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `LocationId`, `PathId`, `StudentId`                       |
//! | [`geo`]     | `Point`: floor-plan coordinates, distance, lerp           |
//! | [`time`]    | `Timestamp`, `Tick`, `TickClock`, `TrackerConfig`         |
//! | [`error`]   | `HpError`, `HpResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HpError, HpResult};
pub use geo::Point;
pub use ids::{IdAllocator, LocationId, PathId, StudentId};
pub use time::{Tick, TickClock, Timestamp, TrackerConfig};
