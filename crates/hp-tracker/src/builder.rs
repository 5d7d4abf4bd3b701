//! Fluent builder for constructing a [`HallPassTracker`].

use rustc_hash::{FxHashMap, FxHashSet};

use hp_core::{IdAllocator, TrackerConfig};
use hp_geometry::FloorPlan;
use hp_journey::HallPass;

use crate::{HallPassTracker, TrackerError, TrackerResult};

/// Fluent builder for [`HallPassTracker`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default               |
/// |--------------------|-----------------------|
/// | `.floor_plan(p)`   | `FloorPlan::new()`    |
/// | `.passes(v)`       | No passes             |
///
/// # Example
///
/// ```rust,ignore
/// let mut tracker = TrackerBuilder::new(TrackerConfig::default())
///     .floor_plan(plan)
///     .build()?;
/// tracker.run(&mut NoopObserver);
/// ```
pub struct TrackerBuilder {
    config: TrackerConfig,
    plan:   Option<FloorPlan>,
    passes: Option<Vec<HallPass>>,
}

impl TrackerBuilder {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            plan:   None,
            passes: None,
        }
    }

    /// Supply the authored locations and paths.
    pub fn floor_plan(mut self, plan: FloorPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Seed the roster with existing passes.
    ///
    /// Each pass must reference a path on the floor plan that leads from its
    /// start location to its destination.
    pub fn passes(mut self, passes: Vec<HallPass>) -> Self {
        self.passes = Some(passes);
        self
    }

    /// Validate inputs and return a tracker with an empty position cache.
    pub fn build(self) -> TrackerResult<HallPassTracker> {
        self.config.validate()?;

        let plan     = self.plan.unwrap_or_default();
        let students = self.passes.unwrap_or_default();

        // ── Referential integrity of seeded passes ────────────────────────
        let mut seen = FxHashSet::default();
        for pass in &students {
            if !pass.id().is_valid() {
                return Err(TrackerError::InvalidStudentId(pass.id()));
            }
            if !seen.insert(pass.id()) {
                return Err(TrackerError::DuplicateStudent(pass.id()));
            }
            let connects = plan
                .path(pass.path())
                .is_some_and(|p| p.connects(pass.start_location(), pass.destination()));
            if !connects {
                return Err(TrackerError::PathMismatch {
                    student: pass.id(),
                    path:    pass.path(),
                });
            }
        }

        let student_ids = match students.iter().map(|p| p.id().0).max() {
            Some(last) => IdAllocator::starting_after(last),
            None       => IdAllocator::new(),
        };

        Ok(HallPassTracker {
            clock:     self.config.make_clock(),
            config:    self.config,
            plan,
            students,
            student_ids,
            positions: FxHashMap::default(),
            statuses:  FxHashMap::default(),
        })
    }
}
