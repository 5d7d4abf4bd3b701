//! Time → position mapping for a student on a pass.

use hp_core::{Point, Timestamp};
use hp_geometry::{LocationLookup, Path, resolve_position};

use crate::HallPass;

/// Fraction of the time budget at which the student reaches the destination.
const OUTBOUND_END: f64 = 0.3;
/// Fraction at which the student leaves the destination to walk back.
const DWELL_END: f64 = 0.7;
/// Length of each walking leg as a fraction of the budget.
const LEG: f64 = 0.3;

/// Where a student is drawn this tick.
///
/// `progress` runs from `0` to `1` on the outbound leg, is exactly `1` for the
/// whole dwell (both phase boundaries included), and lies in `(1, 2]` on the
/// return leg.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentPosition {
    pub position: Point,
    pub progress: f64,
}

impl StudentPosition {
    #[inline]
    pub fn is_returning(&self) -> bool {
        self.progress > 1.0
    }
}

/// Which part of the journey a budget fraction falls in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JourneyPhase {
    Outbound,
    Dwell,
    Return,
}

impl JourneyPhase {
    /// Phase for a clamped budget fraction.  Boundaries belong to the
    /// earlier phase: `0.3` is still outbound, `0.7` is still dwelling.
    pub fn of(fraction: f64) -> JourneyPhase {
        if fraction <= OUTBOUND_END {
            JourneyPhase::Outbound
        } else if fraction <= DWELL_END {
            JourneyPhase::Dwell
        } else {
            JourneyPhase::Return
        }
    }
}

/// Fraction of `pass`'s time budget used up at `now`, clamped to `[0, 1]`.
///
/// A zero or negative budget (clock skew, corrupt record) counts as fully
/// elapsed rather than producing a non-finite value.
pub fn journey_fraction(pass: &HallPass, now: Timestamp) -> f64 {
    let total = pass.budget_ms();
    if total <= 0 {
        return 1.0;
    }
    let elapsed = now - pass.start_time();
    let raw = elapsed as f64 / total as f64;
    if raw.is_finite() { raw.clamp(0.0, 1.0) } else { 1.0 }
}

/// Position and animation progress of `pass` on `path` at `now`.
///
/// Returned students are shown back at the path's start with progress `0`
/// no matter how much time passes.  Stateless; call once per tick.
pub fn simulate<L: LocationLookup + ?Sized>(
    pass:   &HallPass,
    path:   &Path,
    lookup: &L,
    now:    Timestamp,
) -> StudentPosition {
    if pass.returned() {
        return StudentPosition {
            position: lookup.position_of(path.start).unwrap_or(Point::ORIGIN),
            progress: 0.0,
        };
    }

    let fraction = journey_fraction(pass, now);
    match JourneyPhase::of(fraction) {
        JourneyPhase::Outbound => {
            let scaled = fraction / LEG;
            StudentPosition {
                position: resolve_position(path, scaled, lookup),
                progress: scaled,
            }
        }
        JourneyPhase::Dwell => StudentPosition {
            position: lookup.position_of(path.end).unwrap_or(Point::ORIGIN),
            progress: 1.0,
        },
        JourneyPhase::Return => {
            // Runs 1 → 0 as the student walks the path backward.
            let scaled = 1.0 - (fraction - DWELL_END) / LEG;
            StudentPosition {
                position: resolve_position(path, scaled, lookup),
                progress: 2.0 - scaled,
            }
        }
    }
}
