//! Time model.
//!
//! # Design
//!
//! Pass timing is recorded as wall-clock [`Timestamp`]s (milliseconds since
//! the Unix epoch).  The polling scheduler advances a [`Tick`] counter whose
//! mapping to wall time is held in [`TickClock`]:
//!
//!   now = start + tick * tick_interval_ms
//!
//! The default interval is 100 ms, enough for smooth marker animation.  All
//! durations are signed milliseconds (`i64`) so that skewed or malformed
//! records produce negative values instead of wrapping.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{HpError, HpResult};

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// Milliseconds since the Unix epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Current wall-clock time.  Clamps to the epoch if the system clock is
    /// set before 1970.
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis().min(i64::MAX as u128) as i64)
            .unwrap_or(0);
        Timestamp(ms)
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Signed milliseconds from `earlier` to `self` (negative if `earlier`
    /// is in the future).
    #[inline]
    pub fn millis_since(self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<i64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: i64) -> Timestamp {
        Timestamp(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub for Timestamp {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> i64 {
        self.millis_since(rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute scheduler tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Converts tick counts into wall-clock timestamps.
///
/// `TickClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// Timestamp of tick 0.
    pub start: Timestamp,
    /// Milliseconds between ticks.  Default: 100.
    pub tick_interval_ms: u32,
    /// The current tick, advanced by `TickClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl TickClock {
    pub fn new(start: Timestamp, tick_interval_ms: u32) -> Self {
        Self {
            start,
            tick_interval_ms,
            current_tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    /// Elapsed milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> i64 {
        (self.current_tick.0 as i64).saturating_mul(self.tick_interval_ms as i64)
    }

    /// Timestamp corresponding to `current_tick`.
    #[inline]
    pub fn now(&self) -> Timestamp {
        self.start + self.elapsed_ms()
    }

    /// How many ticks span `ms` milliseconds? (rounds up)
    #[inline]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.tick_interval_ms.max(1) as u64)
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed_ms().max(0) / 1_000;
        write!(f, "{} (+{}m {:02}s)", self.current_tick, secs / 60, secs % 60)
    }
}

// ── TrackerConfig ─────────────────────────────────────────────────────────────

/// Scheduler configuration for the tracker's polling loop.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerConfig {
    /// Timestamp of tick 0.
    pub start: Timestamp,

    /// Milliseconds between position recomputes.  Default: 100.
    pub tick_interval_ms: u32,

    /// Ticks `run` performs before returning.  At 100 ms per tick,
    /// 1_200 ticks cover a two-minute pass.
    pub total_ticks: u64,
}

impl TrackerConfig {
    pub const DEFAULT_TICK_INTERVAL_MS: u32 = 100;

    /// The tick at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject configurations the scheduler cannot drive.
    pub fn validate(&self) -> HpResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(HpError::Config("tick_interval_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.start, self.tick_interval_ms)
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            start:            Timestamp::EPOCH,
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
            total_ticks:      1_200,
        }
    }
}
