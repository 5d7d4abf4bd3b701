//! Unit tests for hp-journey.

use hp_core::{LocationId, PathId, Point, StudentId, Timestamp};
use hp_geometry::{FloorPlan, LocationKind};

use crate::HallPass;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Classroom at (0,0), restroom at (100,0), straight path between them.
fn corridor() -> (FloorPlan, PathId) {
    let mut plan = FloorPlan::new();
    let class = plan.add_location("Room 101", LocationKind::Classroom, Point::new(0.0, 0.0));
    let rest = plan.add_location("Restroom", LocationKind::Restroom, Point::new(100.0, 0.0));
    let path = plan.add_path(class, rest, vec![]).unwrap();
    (plan, path)
}

/// A pass with a 100-second budget starting at t = 0.
fn pass_100s(path: PathId) -> HallPass {
    HallPass::with_times(
        StudentId(0),
        "Ada",
        LocationId(0),
        LocationId(1),
        path,
        Timestamp(0),
        Timestamp(100_000),
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── simulate ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod simulate {
    use super::*;
    use crate::{JourneyPhase, simulate};

    #[test]
    fn starts_at_origin_location() {
        let (plan, id) = corridor();
        let path = plan.path(id).unwrap();
        let pos = simulate(&pass_100s(id), path, &plan, Timestamp(0));
        assert_eq!(pos.position, Point::new(0.0, 0.0));
        assert_eq!(pos.progress, 0.0);
    }

    #[test]
    fn outbound_halfway() {
        let (plan, id) = corridor();
        let path = plan.path(id).unwrap();
        let pos = simulate(&pass_100s(id), path, &plan, Timestamp(15_000));
        assert!(close(pos.progress, 0.5), "progress {}", pos.progress);
        assert!(close(pos.position.x, 50.0));
        assert!(!pos.is_returning());
    }

    #[test]
    fn phase_boundaries_read_as_arrived() {
        let (plan, id) = corridor();
        let path = plan.path(id).unwrap();
        let pass = pass_100s(id);

        for now in [30_000, 30_001, 50_000, 70_000] {
            let pos = simulate(&pass, path, &plan, Timestamp(now));
            assert_eq!(pos.progress, 1.0, "at {now}");
            assert_eq!(pos.position, Point::new(100.0, 0.0), "at {now}");
        }
    }

    #[test]
    fn return_leg_walks_backward() {
        let (plan, id) = corridor();
        let path = plan.path(id).unwrap();
        let pass = pass_100s(id);

        let just_left = simulate(&pass, path, &plan, Timestamp(70_001));
        assert!(just_left.is_returning());
        assert!(just_left.progress < 1.001);

        let halfway = simulate(&pass, path, &plan, Timestamp(85_000));
        assert!(close(halfway.progress, 1.5), "progress {}", halfway.progress);
        assert!(close(halfway.position.x, 50.0), "x {}", halfway.position.x);

        let back = simulate(&pass, path, &plan, Timestamp(100_000));
        assert!(close(back.progress, 2.0));
        assert_eq!(back.position, Point::new(0.0, 0.0));
    }

    #[test]
    fn overdue_student_stays_at_start() {
        let (plan, id) = corridor();
        let path = plan.path(id).unwrap();
        let pos = simulate(&pass_100s(id), path, &plan, Timestamp(500_000));
        assert_eq!(pos.position, Point::new(0.0, 0.0));
        assert!(close(pos.progress, 2.0));
    }

    #[test]
    fn before_start_is_clamped() {
        let (plan, id) = corridor();
        let path = plan.path(id).unwrap();
        let pos = simulate(&pass_100s(id), path, &plan, Timestamp(-5_000));
        assert_eq!(pos.progress, 0.0);
        assert_eq!(pos.position, Point::new(0.0, 0.0));
    }

    #[test]
    fn returned_student_never_drifts() {
        let (plan, id) = corridor();
        let path = plan.path(id).unwrap();
        let mut pass = pass_100s(id);
        pass.mark_returned();

        for now in [0, 15_000, 50_000, 85_000, 1_000_000_000] {
            let pos = simulate(&pass, path, &plan, Timestamp(now));
            assert_eq!(pos.position, Point::new(0.0, 0.0));
            assert_eq!(pos.progress, 0.0);
        }
    }

    #[test]
    fn zero_and_negative_budgets_are_fully_elapsed() {
        let (plan, id) = corridor();
        let path = plan.path(id).unwrap();
        for expected in [Timestamp(1_000), Timestamp(0)] {
            let pass = HallPass::with_times(
                StudentId(1), "Skew", LocationId(0), LocationId(1), id,
                Timestamp(1_000), expected,
            );
            let pos = simulate(&pass, path, &plan, Timestamp(1_000));
            assert!(pos.progress.is_finite());
            assert!(pos.position.is_finite());
            assert!(close(pos.progress, 2.0));
            assert_eq!(pos.position, Point::new(0.0, 0.0));
        }
    }

    #[test]
    fn missing_destination_degrades_to_origin() {
        let (plan, id) = corridor();
        let mut path = plan.path(id).unwrap().clone();
        path.end = LocationId(42);
        let pos = simulate(&pass_100s(id), &path, &plan, Timestamp(50_000));
        assert_eq!(pos.position, Point::ORIGIN);
        assert_eq!(pos.progress, 1.0);
    }

    #[test]
    fn phase_of_fraction() {
        assert_eq!(JourneyPhase::of(0.0), JourneyPhase::Outbound);
        assert_eq!(JourneyPhase::of(0.3), JourneyPhase::Outbound);
        assert_eq!(JourneyPhase::of(0.31), JourneyPhase::Dwell);
        assert_eq!(JourneyPhase::of(0.7), JourneyPhase::Dwell);
        assert_eq!(JourneyPhase::of(0.71), JourneyPhase::Return);
        assert_eq!(JourneyPhase::of(1.0), JourneyPhase::Return);
    }
}

// ── journey_fraction ──────────────────────────────────────────────────────────

#[cfg(test)]
mod fraction {
    use super::*;
    use crate::journey_fraction;

    #[test]
    fn clamped_to_unit_interval() {
        let pass = pass_100s(PathId(0));
        assert_eq!(journey_fraction(&pass, Timestamp(-1)), 0.0);
        assert_eq!(journey_fraction(&pass, Timestamp(25_000)), 0.25);
        assert_eq!(journey_fraction(&pass, Timestamp(250_000)), 1.0);
    }
}

// ── HallPass & budgets ────────────────────────────────────────────────────────

#[cfg(test)]
mod pass {
    use super::*;
    use crate::{BASE_PASS_MS, expected_return_time};

    #[test]
    fn restroom_gets_full_budget() {
        let t = Timestamp(1_700_000_000_000);
        assert_eq!(expected_return_time(t, LocationKind::Restroom), t + 120_000);
        assert_eq!(BASE_PASS_MS, 120_000);
    }

    #[test]
    fn classroom_gets_three_quarters() {
        let t = Timestamp(1_700_000_000_000);
        assert_eq!(expected_return_time(t, LocationKind::Classroom), t + 90_000);
    }

    #[test]
    fn issue_budgets_by_destination_kind() {
        let pass = HallPass::issue(
            StudentId(3), "Grace", LocationId(0), LocationId(1),
            LocationKind::Restroom, PathId(0), Timestamp(5_000),
        );
        assert_eq!(pass.expected_return_time(), Timestamp(125_000));
        assert_eq!(pass.budget_ms(), 120_000);
        assert_eq!(pass.remaining_ms(Timestamp(100_000)), 25_000);
        assert!(!pass.returned());
    }

    #[test]
    fn mark_returned_is_one_way() {
        let mut pass = pass_100s(PathId(0));
        assert!(pass.mark_returned());
        assert!(pass.returned());
        assert!(!pass.mark_returned());
        assert!(pass.returned());
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;
    use crate::{PassStatus, classify, format_time_remaining};

    #[test]
    fn thresholds() {
        let now = Timestamp(1_000_000);
        assert_eq!(classify(now + 0, now), PassStatus::Overdue);
        assert_eq!(classify(now + -1, now), PassStatus::Overdue);
        assert_eq!(classify(now + 1, now), PassStatus::Warning);
        assert_eq!(classify(now + 29_999, now), PassStatus::Warning);
        assert_eq!(classify(now + 30_000, now), PassStatus::OnTime);
    }

    #[test]
    fn urgency_ordering() {
        let mut v = vec![PassStatus::OnTime, PassStatus::Overdue, PassStatus::Warning];
        v.sort();
        assert_eq!(v, vec![PassStatus::Overdue, PassStatus::Warning, PassStatus::OnTime]);
    }

    #[test]
    fn display() {
        assert_eq!(PassStatus::OnTime.to_string(), "on-time");
        assert_eq!(PassStatus::Warning.to_string(), "warning");
        assert_eq!(PassStatus::Overdue.to_string(), "overdue");
    }

    #[test]
    fn countdown_text() {
        assert_eq!(format_time_remaining(0), "Overdue");
        assert_eq!(format_time_remaining(-4_000), "Overdue");
        assert_eq!(format_time_remaining(999), "0s");
        assert_eq!(format_time_remaining(42_500), "42s");
        assert_eq!(format_time_remaining(65_000), "1m 5s");
        assert_eq!(format_time_remaining(120_000), "2m 0s");
    }
}
