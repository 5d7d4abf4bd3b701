//! `hp-tracker`: state owner and polling scheduler for the hallpass tracker.
//!
//! # Tick loop
//!
//! ```text
//! every tick_interval_ms (default 100):
//!   ① now      = clock.now()
//!   ② classify: status of every active pass; changes are reported
//!   ③ simulate: position of every active pass whose path resolves
//!   ④ swap:     the new position map replaces the old one whole
//! ```
//!
//! Pass issuance, return, removal, and map edits happen between ticks
//! through `&mut HallPassTracker`; the next tick picks them up without any
//! special casing.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hp_core::{Timestamp, TrackerConfig};
//! use hp_tracker::{NoopObserver, TrackerBuilder};
//!
//! let mut tracker = TrackerBuilder::new(TrackerConfig::default())
//!     .floor_plan(plan)
//!     .build()?;
//! let ada = tracker.issue_pass("Ada", room_101, restroom, Timestamp::EPOCH)?;
//! tracker.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod roster;
pub mod tracker;


pub use builder::TrackerBuilder;
pub use error::{TrackerError, TrackerResult};
pub use observer::{NoopObserver, TrackerObserver};
pub use roster::{RosterFilter, RosterQuery};
pub use tracker::{HallPassTracker, PositionMap, StatusChange, TickReport};
