//! The hall-pass record and its time budget.

use hp_core::{LocationId, PathId, StudentId, Timestamp};
use hp_geometry::LocationKind;

/// Time allowed for a restroom trip, in milliseconds.  Other destinations
/// get three quarters of this.
pub const BASE_PASS_MS: i64 = 120_000;

const NON_RESTROOM_MULTIPLIER: f64 = 0.75;

/// When a student leaving at `start` is expected back.
///
/// Restroom trips get the full [`BASE_PASS_MS`]; any other destination gets
/// 75 % of it.
pub fn expected_return_time(start: Timestamp, destination: LocationKind) -> Timestamp {
    let multiplier = match destination {
        LocationKind::Restroom => 1.0,
        LocationKind::Classroom => NON_RESTROOM_MULTIPLIER,
    };
    start + (BASE_PASS_MS as f64 * multiplier).round() as i64
}

/// One student's hall pass.
///
/// Timing and location references are fixed at issuance.  The only state
/// change a pass ever sees is `returned` going from `false` to `true`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallPass {
    id:                   StudentId,
    name:                 String,
    start_time:           Timestamp,
    expected_return_time: Timestamp,
    start_location:       LocationId,
    destination:          LocationId,
    path:                 PathId,
    returned:             bool,
}

impl HallPass {
    /// Issue a pass at `start_time`, budgeting the return by the
    /// destination's kind.
    pub fn issue(
        id:               StudentId,
        name:             impl Into<String>,
        start_location:   LocationId,
        destination:      LocationId,
        destination_kind: LocationKind,
        path:             PathId,
        start_time:       Timestamp,
    ) -> Self {
        Self::with_times(
            id,
            name,
            start_location,
            destination,
            path,
            start_time,
            expected_return_time(start_time, destination_kind),
        )
    }

    /// Construct a pass with an explicit return deadline.
    pub fn with_times(
        id:                   StudentId,
        name:                 impl Into<String>,
        start_location:       LocationId,
        destination:          LocationId,
        path:                 PathId,
        start_time:           Timestamp,
        expected_return_time: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_time,
            expected_return_time,
            start_location,
            destination,
            path,
            returned: false,
        }
    }

    #[inline]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    #[inline]
    pub fn expected_return_time(&self) -> Timestamp {
        self.expected_return_time
    }

    #[inline]
    pub fn start_location(&self) -> LocationId {
        self.start_location
    }

    #[inline]
    pub fn destination(&self) -> LocationId {
        self.destination
    }

    #[inline]
    pub fn path(&self) -> PathId {
        self.path
    }

    #[inline]
    pub fn returned(&self) -> bool {
        self.returned
    }

    /// Total time budget in milliseconds.  Zero or negative for malformed
    /// records.
    #[inline]
    pub fn budget_ms(&self) -> i64 {
        self.expected_return_time - self.start_time
    }

    /// Milliseconds left before the pass is overdue (negative once late).
    #[inline]
    pub fn remaining_ms(&self, now: Timestamp) -> i64 {
        self.expected_return_time - now
    }

    /// Mark the student as back.  Returns `false` if they already were.
    pub fn mark_returned(&mut self) -> bool {
        let changed = !self.returned;
        self.returned = true;
        changed
    }
}
