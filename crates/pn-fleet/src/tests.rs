//! Unit tests for pn-fleet.

#[cfg(test)]
mod scoring {
    use pn_core::{Priority, RiderId};

    use crate::{AssignmentRequest, FleetConfig, RiderPool};

    fn pool() -> RiderPool {
        RiderPool::standard(FleetConfig::default())
    }

    #[test]
    fn light_parcel_goes_to_light_rider() {
        let mut p = pool();
        let req = AssignmentRequest::new(Priority::Standard, 2.0);
        assert_eq!(p.score(RiderId(0), &req), 180);
        assert_eq!(p.assign(&req), Some(RiderId(0)));
        assert_eq!(p.current_load[0], 2.0);
        assert_eq!(p.assigned[0], 1);
    }

    #[test]
    fn overnight_goes_to_priority_rider() {
        let mut p = pool();
        let req = AssignmentRequest::new(Priority::Overnight, 10.0);
        assert_eq!(p.score(RiderId(2), &req), 200);
        assert_eq!(p.assign(&req), Some(RiderId(2)));
    }

    #[test]
    fn heavy_parcel_goes_to_heavy_rider() {
        let mut p = pool();
        let req = AssignmentRequest::new(Priority::Express, 25.0);
        assert_eq!(p.assign(&req), Some(RiderId(1)));
        assert_eq!(p.current_load[1], 25.0);
    }

    #[test]
    fn ties_go_to_first_in_pool_order() {
        let mut p = pool();
        let req = AssignmentRequest::new(Priority::Standard, 10.0);
        assert_eq!(p.assign(&req), Some(RiderId(0)));
    }

    #[test]
    fn load_lowers_score() {
        let mut p = pool();
        p.current_load[3] = 75.0;
        let req = AssignmentRequest::new(Priority::Standard, 10.0);
        assert_eq!(p.score(RiderId(3), &req), 50);
    }

    #[test]
    fn load_grows_by_exact_weight() {
        let mut p = pool();
        let req = AssignmentRequest::new(Priority::Standard, 7.25);
        let r = p.assign(&req).unwrap();
        assert_eq!(p.current_load[r.index()], 7.25);
    }

    #[test]
    fn label_has_category_suffix() {
        let p = pool();
        assert_eq!(p.label(RiderId(1)).as_deref(), Some("Bilal Ahmed (Heavy)"));
        assert_eq!(p.label(RiderId(9)), None);
    }
}

#[cfg(test)]
mod availability {
    use pn_core::{Priority, RiderId};

    use crate::{AssignmentRequest, FleetConfig, FleetError, RiderCategory, RiderPool, RiderPoolBuilder};

    fn single(max: f64) -> RiderPool {
        RiderPoolBuilder::new(FleetConfig::default())
            .rider("Solo", RiderCategory::General, max)
            .build()
            .unwrap()
    }

    #[test]
    fn busy_rider_is_skipped() {
        let mut p = RiderPool::standard(FleetConfig::default());
        p.available[0] = false;
        let req = AssignmentRequest::new(Priority::Standard, 2.0);
        let r = p.assign(&req).unwrap();
        assert_ne!(r, RiderId(0));
        assert_eq!(p.current_load[0], 0.0);
    }

    #[test]
    fn reaching_busy_threshold_marks_unavailable() {
        let mut p = single(10.0);
        let req = AssignmentRequest::new(Priority::Standard, 9.0);
        assert_eq!(p.assign(&req), Some(RiderId(0)));
        assert!(!p.available[0]);
        assert_eq!(p.assign(&req), None);
        assert_eq!(p.assigned[0], 1);
    }

    #[test]
    fn release_floors_at_zero_and_restores() {
        let mut p = single(10.0);
        p.assign(&AssignmentRequest::new(Priority::Standard, 9.0));
        assert_eq!(p.release("Solo"), Ok(RiderId(0)));
        assert_eq!(p.current_load[0], 0.0);
        assert!(p.available[0]);
    }

    #[test]
    fn release_hysteresis() {
        let mut p = single(100.0);
        p.assign(&AssignmentRequest::new(Priority::Standard, 95.0));
        assert!(!p.available[0]);
        p.release("Solo").unwrap();
        assert_eq!(p.current_load[0], 85.0);
        assert!(!p.available[0]);
        p.release("Solo").unwrap();
        assert!(!p.available[0]);
        p.release("Solo").unwrap();
        assert_eq!(p.current_load[0], 65.0);
        assert!(p.available[0]);
    }

    #[test]
    fn release_accepts_label() {
        let mut p = RiderPool::standard(FleetConfig::default());
        p.current_load[1] = 30.0;
        assert_eq!(p.release("Bilal Ahmed (Heavy)"), Ok(RiderId(1)));
        assert_eq!(p.current_load[1], 20.0);
    }

    #[test]
    fn release_unknown_is_error() {
        let mut p = RiderPool::standard(FleetConfig::default());
        assert_eq!(
            p.release("Nobody (Light)"),
            Err(FleetError::RiderNotFound("Nobody (Light)".into()))
        );
    }

    #[test]
    fn random_sequences_never_pick_unavailable() {
        use pn_core::{DecisionSource, SimRng};
        let mut rng = SimRng::new(7);
        let mut p = RiderPool::standard(FleetConfig::default());
        for _ in 0..500 {
            if rng.chance(0.3) {
                let who = rng.pick(p.count);
                let name = p.name[who].clone();
                p.release(&name).unwrap();
                continue;
            }
            let before = p.available.clone();
            let weight = rng.between(1, 40) as f64;
            let tier = rng.between(1, 3) as u8;
            let req = AssignmentRequest::new(Priority::from_tier(tier).unwrap(), weight);
            if let Some(r) = p.assign(&req) {
                assert!(before[r.index()]);
            } else {
                assert!(before.iter().all(|a| !a));
            }
        }
    }
}

#[cfg(test)]
mod builder {
    use crate::{FleetConfig, FleetError, RiderCategory, RiderPoolBuilder};

    #[test]
    fn builds_in_append_order() {
        let p = RiderPoolBuilder::new(FleetConfig::default())
            .rider("A", RiderCategory::Heavy, 100.0)
            .rider("B", RiderCategory::Light, 20.0)
            .build()
            .unwrap();
        let views = p.views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[1].label(), "B (Light)");
        assert!(views.iter().all(|v| v.available && v.current_load == 0.0));
    }

    #[test]
    fn rejects_non_positive_max_load() {
        let err = RiderPoolBuilder::new(FleetConfig::default())
            .rider("Zero", RiderCategory::General, 0.0)
            .build()
            .err();
        assert_eq!(err, Some(FleetError::InvalidMaxLoad { name: "Zero".into() }));
    }
}
