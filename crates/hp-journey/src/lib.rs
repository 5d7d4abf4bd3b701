//! `hp-journey`: pass timing, journey animation, and urgency status.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`pass`]    | `HallPass` record, `expected_return_time` budget                |
//! | [`journey`] | `simulate`, `StudentPosition`, `JourneyPhase`, `journey_fraction` |
//! | [`status`]  | `PassStatus`, `classify`, `format_time_remaining`               |
//!
//! # Journey model
//!
//! A pass's time budget (`start_time .. expected_return_time`) is split into
//! three phases:
//!
//! ```text
//!   0.0 ─── outbound ─── 0.3 ─── dwell ─── 0.7 ─── return ─── 1.0
//! ```
//!
//! During the outbound leg the student walks the path forward, during the
//! dwell they sit at the destination, and on the return leg they walk the
//! path backward.  The emitted `progress` runs `0 → 1` outbound, holds at
//! `1` while dwelling, and climbs `1 → 2` on the way back so renderers can
//! tell the direction by comparing against `1`.
//!
//! Everything here is a pure function of its inputs; the caller supplies
//! `now`.

pub mod journey;
pub mod pass;
pub mod status;

#[cfg(test)]
mod tests;

pub use journey::{JourneyPhase, StudentPosition, journey_fraction, simulate};
pub use pass::{BASE_PASS_MS, HallPass, expected_return_time};
pub use status::{PassStatus, WARNING_WINDOW_MS, classify, format_time_remaining};
