//! The `HallPassTracker` struct and its polling loop.

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use hp_core::{IdAllocator, LocationId, PathId, Point, StudentId, Tick, TickClock, Timestamp, TrackerConfig};
use hp_geometry::{FloorPlan, LocationKind, LocationLookup};
use hp_journey::{HallPass, PassStatus, StudentPosition, classify, simulate};

use crate::roster::{self, RosterQuery};
use crate::{TrackerError, TrackerObserver, TrackerResult};

/// Per-tick position cache, keyed by student.
pub type PositionMap = FxHashMap<StudentId, StudentPosition>;

/// A pass whose status differs from the previous tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub student: StudentId,
    /// `None` the first time the pass is classified.
    pub from:    Option<PassStatus>,
    pub to:      PassStatus,
}

/// Outcome of one position recompute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Students placed on the map this tick.
    pub positioned: usize,
    pub changes:    Vec<StatusChange>,
}

// ── HallPassTracker ───────────────────────────────────────────────────────────

/// Owner of every mutable collection: floor plan, pass roster, and the
/// derived per-tick caches.
///
/// The tracker is the single writer.  Readers only ever get shared
/// references, and each tick builds a fresh position map and swaps it in
/// whole, so a renderer never sees a half-updated frame.
///
/// Positions are recomputed for every active student on every tick.  At
/// classroom scale this polling is far cheaper than per-student timers and
/// keeps all animation on one clock.
///
/// Create via [`TrackerBuilder`][crate::TrackerBuilder].
pub struct HallPassTracker {
    /// Scheduler configuration (start time, tick interval, run length).
    pub config: TrackerConfig,

    /// Drives `run`; maps ticks to timestamps.
    pub clock: TickClock,

    pub(crate) plan:        FloorPlan,
    pub(crate) students:    Vec<HallPass>,
    pub(crate) student_ids: IdAllocator,
    pub(crate) positions:   PositionMap,
    pub(crate) statuses:    FxHashMap<StudentId, PassStatus>,
}

impl HallPassTracker {
    // ── Scheduler ─────────────────────────────────────────────────────────

    /// Run the polling loop from the current tick to `config.end_tick()`.
    ///
    /// Stops early if `observer.should_stop()` returns `true`.  Returns the
    /// number of ticks processed.
    pub fn run<O: TrackerObserver>(&mut self, observer: &mut O) -> u64 {
        let mut done = 0;
        while self.clock.current_tick < self.config.end_tick() && !observer.should_stop() {
            self.step(observer);
            done += 1;
        }
        observer.on_run_end(self.clock.current_tick);
        done
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`),
    /// unless the observer asks to stop.
    pub fn run_ticks<O: TrackerObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut done = 0;
        while done < n && !observer.should_stop() {
            self.step(observer);
            done += 1;
        }
        observer.on_run_end(self.clock.current_tick);
        done
    }

    fn step<O: TrackerObserver>(&mut self, observer: &mut O) {
        let tick = self.clock.current_tick;
        let now  = self.clock.now();

        observer.on_tick_start(tick, now);
        let report = self.tick_at(now);
        for change in &report.changes {
            observer.on_status_change(change.student, change.from, change.to);
        }
        observer.on_positions(tick, now, &self.positions);
        observer.on_tick_end(tick, report.positioned);

        self.clock.advance();
    }

    /// Recompute every active student's position and status at `now`.
    ///
    /// Students whose path no longer resolves are left out of the cache for
    /// this tick.  Callers driving their own clock use this directly instead
    /// of `run`.
    pub fn tick_at(&mut self, now: Timestamp) -> TickReport {
        let mut positions = PositionMap::default();
        let mut statuses  = FxHashMap::default();
        let mut changes   = Vec::new();

        for pass in self.students.iter().filter(|p| !p.returned()) {
            let status = classify(pass.expected_return_time(), now);
            let from   = self.statuses.get(&pass.id()).copied();
            if from != Some(status) {
                if status == PassStatus::Overdue {
                    warn!(student = %pass.id(), name = pass.name(), "pass_overdue");
                }
                changes.push(StatusChange { student: pass.id(), from, to: status });
            }
            statuses.insert(pass.id(), status);

            let Some(path) = self.plan.path(pass.path()) else {
                debug!(student = %pass.id(), path = %pass.path(), "path_missing_skipped");
                continue;
            };
            positions.insert(pass.id(), simulate(pass, path, &self.plan, now));
        }

        let positioned = positions.len();
        self.positions = positions;
        self.statuses  = statuses;
        TickReport { positioned, changes }
    }

    // ── Passes ────────────────────────────────────────────────────────────

    /// Issue a hall pass from `start` to `destination` at `now`.
    ///
    /// The return deadline is budgeted from the destination's kind.  Fails if
    /// the trimmed name is empty, either location is unknown, or no authored
    /// path leads from `start` to `destination`.
    pub fn issue_pass(
        &mut self,
        name:        &str,
        start:       LocationId,
        destination: LocationId,
        now:         Timestamp,
    ) -> TrackerResult<StudentId> {
        let result = self.try_issue(name.trim(), start, destination, now);
        if let Err(err) = &result {
            warn!(name, %start, %destination, error = %err, "pass_rejected");
        }
        result
    }

    fn try_issue(
        &mut self,
        name:        &str,
        start:       LocationId,
        destination: LocationId,
        now:         Timestamp,
    ) -> TrackerResult<StudentId> {
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        if self.plan.location(start).is_none() {
            return Err(TrackerError::UnknownLocation(start));
        }
        let kind = self
            .plan
            .location(destination)
            .map(|l| l.kind)
            .ok_or(TrackerError::UnknownLocation(destination))?;
        let path = self
            .plan
            .path_between(start, destination)
            .map(|p| p.id)
            .ok_or(TrackerError::NoPathBetween { start, destination })?;

        let id = self
            .student_ids
            .next_student()
            .ok_or(TrackerError::StudentIdsExhausted)?;
        let pass = HallPass::issue(id, name, start, destination, kind, path, now);
        info!(
            student = %id,
            name,
            %path,
            expected_return_ms = pass.expected_return_time().as_millis(),
            "pass_issued"
        );
        self.students.push(pass);
        Ok(id)
    }

    /// Mark a student as back.  Returns `false` if they already were.
    pub fn mark_returned(&mut self, id: StudentId) -> TrackerResult<bool> {
        let pass = self
            .students
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(TrackerError::StudentNotFound(id))?;
        let changed = pass.mark_returned();
        if changed {
            self.positions.remove(&id);
            self.statuses.remove(&id);
            info!(student = %id, "pass_returned");
        }
        Ok(changed)
    }

    /// Drop a returned student from the roster.
    pub fn remove_student(&mut self, id: StudentId) -> TrackerResult<HallPass> {
        let idx = self
            .students
            .iter()
            .position(|p| p.id() == id)
            .ok_or(TrackerError::StudentNotFound(id))?;
        if !self.students[idx].returned() {
            return Err(TrackerError::StillOut(id));
        }
        info!(student = %id, "pass_removed");
        Ok(self.students.remove(idx))
    }

    // ── Map editing ───────────────────────────────────────────────────────
    //
    // Edits only touch the floor plan; positions catch up on the next tick.

    pub fn add_location(&mut self, name: &str, kind: LocationKind, position: Point) -> LocationId {
        let id = self.plan.add_location(name, kind, position);
        debug!(location = %id, name, %kind, "location_added");
        id
    }

    pub fn update_location_position(&mut self, id: LocationId, position: Point) -> TrackerResult<()> {
        self.plan.update_location_position(id, position)?;
        debug!(location = %id, %position, "location_moved");
        Ok(())
    }

    pub fn add_path(
        &mut self,
        start:     LocationId,
        end:       LocationId,
        waypoints: Vec<Point>,
    ) -> TrackerResult<PathId> {
        let id = self.plan.add_path(start, end, waypoints)?;
        debug!(path = %id, %start, %end, "path_added");
        Ok(id)
    }

    pub fn update_path_waypoints(&mut self, id: PathId, waypoints: Vec<Point>) -> TrackerResult<()> {
        let count = waypoints.len();
        self.plan.update_path_waypoints(id, waypoints)?;
        debug!(path = %id, waypoints = count, "path_edited");
        Ok(())
    }

    // ── Views ─────────────────────────────────────────────────────────────

    pub fn floor_plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// Every pass, in issuance order.
    pub fn students(&self) -> &[HallPass] {
        &self.students
    }

    pub fn student(&self, id: StudentId) -> Option<&HallPass> {
        self.students.iter().find(|p| p.id() == id)
    }

    /// Positions computed by the most recent tick.
    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    pub fn position(&self, id: StudentId) -> Option<StudentPosition> {
        self.positions.get(&id).copied()
    }

    pub fn active_students(&self) -> impl Iterator<Item = &HallPass> + '_ {
        self.students.iter().filter(|p| !p.returned())
    }

    pub fn overdue_students(&self, now: Timestamp) -> impl Iterator<Item = &HallPass> + '_ {
        self.active_students()
            .filter(move |p| classify(p.expected_return_time(), now) == PassStatus::Overdue)
    }

    /// Status of an outstanding pass.  `None` for unknown or returned
    /// students.
    pub fn status_of(&self, id: StudentId, now: Timestamp) -> Option<PassStatus> {
        self.student(id)
            .filter(|p| !p.returned())
            .map(|p| classify(p.expected_return_time(), now))
    }

    /// Passes matching `query`, in roster order.
    pub fn roster(&self, query: &RosterQuery, now: Timestamp) -> Vec<&HallPass> {
        roster::roster(&self.students, query, now)
    }

    /// Outstanding passes, overdue first.
    pub fn active_by_urgency(&self, now: Timestamp) -> Vec<&HallPass> {
        roster::active_by_urgency(&self.students, now)
    }

    /// The tick the scheduler will process next.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }
}
