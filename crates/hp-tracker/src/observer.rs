//! Tracker observer trait for rendering and alerting.

use hp_core::{StudentId, Tick, Timestamp};
use hp_journey::PassStatus;

use crate::PositionMap;

/// Callbacks invoked by [`HallPassTracker::run`][crate::HallPassTracker::run]
/// at key points in the polling loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: overdue alert
///
/// ```rust,ignore
/// struct OverdueBell;
///
/// impl TrackerObserver for OverdueBell {
///     fn on_status_change(&mut self, student: StudentId, _from: Option<PassStatus>, to: PassStatus) {
///         if to == PassStatus::Overdue {
///             println!("{student} is overdue");
///         }
///     }
/// }
/// ```
pub trait TrackerObserver {
    /// Called at the very start of each tick, before positions are recomputed.
    fn on_tick_start(&mut self, _tick: Tick, _now: Timestamp) {}

    /// Called when an active pass's status differs from the last tick.
    ///
    /// `from` is `None` the first time a pass is classified.
    fn on_status_change(
        &mut self,
        _student: StudentId,
        _from:    Option<PassStatus>,
        _to:      PassStatus,
    ) {}

    /// Called with the freshly replaced position cache.
    fn on_positions(&mut self, _tick: Tick, _now: Timestamp, _positions: &PositionMap) {}

    /// Called at the end of each tick.  `positioned` is the number of
    /// students placed on the map this tick.
    fn on_tick_end(&mut self, _tick: Tick, _positioned: usize) {}

    /// Called once when `run` or `run_ticks` returns.
    fn on_run_end(&mut self, _final_tick: Tick) {}

    /// Polled before every tick.  Returning `true` stops the loop, which is
    /// how an owning context cancels the schedule when it is torn down.
    fn should_stop(&self) -> bool {
        false
    }
}

/// A [`TrackerObserver`] that does nothing.
pub struct NoopObserver;

impl TrackerObserver for NoopObserver {}
