//! Unit tests for pn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CityId, EdgeId, ParcelKey, RiderId};

    #[test]
    fn index_roundtrip() {
        let id = CityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CityId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(ParcelKey::INVALID.0, u32::MAX);
        assert_eq!(RiderId::INVALID.0, u8::MAX);
    }

    #[test]
    fn rider_id_rejects_large_index() {
        assert!(RiderId::try_from(300usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CityId(7).to_string(), "CityId(7)");
    }
}

#[cfg(test)]
mod parcel {
    use crate::parcel::check_weight;
    use crate::{CoreError, Priority, WeightClass, MAX_WEIGHT_KG};

    #[test]
    fn priority_from_tier() {
        assert_eq!(Priority::from_tier(1).unwrap(), Priority::Standard);
        assert_eq!(Priority::from_tier(3).unwrap(), Priority::Overnight);
        assert_eq!(Priority::from_tier(0), Err(CoreError::InvalidPriority(0)));
        assert_eq!(Priority::from_tier(4), Err(CoreError::InvalidPriority(4)));
    }

    #[test]
    fn score_is_tier_thousands_plus_floor_weight() {
        assert_eq!(Priority::Standard.score(4.9), 1004);
        assert_eq!(Priority::Express.score(19.99), 2019);
        assert_eq!(Priority::Overnight.score(0.5), 3000);
        // Pure: same inputs, same score.
        assert_eq!(Priority::Express.score(7.3), Priority::Express.score(7.3));
    }

    #[test]
    fn weight_class_thresholds() {
        assert_eq!(WeightClass::from_weight(4.99), WeightClass::Light);
        assert_eq!(WeightClass::from_weight(5.0), WeightClass::Medium);
        assert_eq!(WeightClass::from_weight(19.99), WeightClass::Medium);
        assert_eq!(WeightClass::from_weight(20.0), WeightClass::Heavy);
    }

    #[test]
    fn weight_validation() {
        assert!(check_weight(2.5).is_ok());
        assert!(check_weight(0.0).is_err());
        assert!(check_weight(-1.0).is_err());
        assert!(check_weight(f64::NAN).is_err());
        assert!(check_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn huge_weight_is_rejected() {
        assert_eq!(check_weight(MAX_WEIGHT_KG), Ok(MAX_WEIGHT_KG));
        assert_eq!(check_weight(5.0e9), Err(CoreError::InvalidWeight(5.0e9)));
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        assert_eq!(Priority::Overnight.score(5.0e9), u32::MAX);
        assert_eq!(Priority::Standard.score(f64::MAX), u32::MAX);
        // Largest accepted weight keeps tier order intact.
        let heaviest = Priority::Overnight.score(MAX_WEIGHT_KG);
        assert_eq!(heaviest, 103_000);
        assert!(heaviest > Priority::Standard.score(1.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn multiples() {
        assert!(Tick(9).is_multiple_of(3));
        assert!(!Tick(10).is_multiple_of(3));
        assert!(!Tick(0).is_multiple_of(0));
    }

    #[test]
    fn clock_hms() {
        let mut clock = SimClock::new(0, 1);
        for _ in 0..3_725 {
            clock.advance();
        }
        assert_eq!(clock.elapsed_hms(), (1, 2, 5));
        assert_eq!(clock.unix_secs_at(Tick(10)), 10);
    }

    #[test]
    fn config_defaults_and_validation() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.tick_duration_secs, 1);
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
        assert!(cfg.validate().is_ok());

        let bad = SimConfig { tick_duration_secs: 0, ..SimConfig::default() };
        assert!(bad.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{DecisionSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.pick(25), r2.pick(25));
            assert_eq!(r1.chance(0.3), r2.chance(0.3));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
        assert!(rng.chance(7.0)); // clamped
    }

    #[test]
    fn between_in_bounds() {
        let mut rng = SimRng::new(9);
        for _ in 0..1000 {
            let v = rng.between(10, 30);
            assert!((10..=30).contains(&v));
        }
        assert_eq!(rng.between(5, 5), 5);
        assert_eq!(rng.between(8, 2), 8);
    }

    #[test]
    fn pick_in_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..1000 {
            assert!(rng.pick(4) < 4);
        }
    }
}
