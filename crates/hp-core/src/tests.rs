//! Unit tests for hp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IdAllocator, LocationId, PathId, StudentId};

    #[test]
    fn index_matches_inner() {
        assert_eq!(LocationId(42).index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(StudentId(0) < StudentId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(LocationId::INVALID.0, u32::MAX);
        assert_eq!(PathId::default(), PathId::INVALID);
        assert!(!StudentId::INVALID.is_valid());
        assert!(StudentId(3).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(StudentId(7).to_string(), "StudentId(7)");
    }

    #[test]
    fn allocator_is_sequential() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_student(), Some(StudentId(0)));
        assert_eq!(ids.next_student(), Some(StudentId(1)));
        assert_eq!(ids.next_raw(), Some(2));
    }

    #[test]
    fn allocator_resumes_after_seed() {
        let mut ids = IdAllocator::starting_after(9);
        assert_eq!(ids.next_student(), Some(StudentId(10)));
    }

    #[test]
    fn allocator_never_yields_invalid_or_repeats() {
        let mut ids = IdAllocator::starting_after(IdAllocator::MAX_RAW - 1);
        assert_eq!(ids.next_student(), Some(StudentId(u32::MAX - 1)));
        assert_eq!(ids.next_student(), None);
        assert_eq!(ids.next_student(), None);

        let mut seeded_at_max = IdAllocator::starting_after(IdAllocator::MAX_RAW);
        assert_eq!(seeded_at_max.next_student(), None);
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(30.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(20.0, 10.0));
    }

    #[test]
    fn finiteness() {
        assert!(Point::ORIGIN.is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}

#[cfg(test)]
mod time {
    use crate::{HpError, Tick, TickClock, Timestamp, TrackerConfig};

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp(1_000);
        assert_eq!(t + 500, Timestamp(1_500));
        assert_eq!(Timestamp(1_500) - t, 500);
        assert_eq!(t - Timestamp(1_500), -500);
    }

    #[test]
    fn clock_now_advances_by_interval() {
        let mut clock = TickClock::new(Timestamp(10_000), 100);
        assert_eq!(clock.now(), Timestamp(10_000));
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.now(), Timestamp(10_200));
    }

    #[test]
    fn ticks_for_duration_rounds_up() {
        let clock = TickClock::new(Timestamp::EPOCH, 100);
        assert_eq!(clock.ticks_for_ms(120_000), 1_200);
        assert_eq!(clock.ticks_for_ms(1), 1);
    }

    #[test]
    fn clock_display() {
        let mut clock = TickClock::new(Timestamp::EPOCH, 1_000);
        for _ in 0..65 {
            clock.advance();
        }
        assert_eq!(clock.to_string(), "T65 (+1m 05s)");
    }

    #[test]
    fn default_config_uses_100ms_ticks() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.tick_interval_ms, 100);
        assert_eq!(cfg.end_tick(), Tick(1_200));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = TrackerConfig { tick_interval_ms: 0, ..TrackerConfig::default() };
        assert!(matches!(cfg.validate(), Err(HpError::Config(_))));
    }
}
