//! Unit tests for pn-dispatch.

#[cfg(test)]
mod queue {
    use pn_core::{DecisionSource, ParcelKey, Priority, SimRng};

    use crate::DispatchQueue;

    #[test]
    fn empty_queue() {
        let mut q = DispatchQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.pop(), None);
        assert_eq!(q.peek(), None);
        assert_eq!(q.peek_score(), None);
    }

    #[test]
    fn highest_score_first() {
        let mut q = DispatchQueue::new();
        q.push(ParcelKey(0), Priority::Standard.score(3.0));
        q.push(ParcelKey(1), Priority::Overnight.score(1.0));
        q.push(ParcelKey(2), Priority::Express.score(40.0));
        assert_eq!(q.peek(), Some((ParcelKey(1), 3001)));
        assert_eq!(q.peek_score(), Some(3001));
        assert_eq!(q.pop(), Some(ParcelKey(1)));
        assert_eq!(q.pop(), Some(ParcelKey(2)));
        assert_eq!(q.pop(), Some(ParcelKey(0)));
        assert!(q.is_empty());
    }

    #[test]
    fn equal_scores_pop_in_insertion_order() {
        let mut q = DispatchQueue::new();
        for i in 0..6 {
            q.push(ParcelKey(i), 2005);
        }
        let order: Vec<u32> = std::iter::from_fn(|| q.pop()).map(|k| k.0).collect();
        assert_eq!(order, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn requeued_parcel_goes_behind_equal_scores() {
        let mut q = DispatchQueue::new();
        q.push(ParcelKey(0), 1000);
        q.push(ParcelKey(1), 1000);
        let first = q.pop().unwrap();
        q.push(first, 1000);
        assert_eq!(q.pop(), Some(ParcelKey(1)));
        assert_eq!(q.pop(), Some(ParcelKey(0)));
    }

    #[test]
    fn pop_sequence_is_non_increasing_for_any_insert_order() {
        for seed in 0..20 {
            let mut rng = SimRng::new(seed);
            let mut q = DispatchQueue::new();
            let mut scores = Vec::new();
            for i in 0..200 {
                let tier = Priority::from_tier(rng.between(1, 3) as u8).unwrap();
                let score = tier.score(rng.between(1, 60) as f64);
                scores.push(score);
                q.push(ParcelKey(i), score);
            }
            let mut last = u32::MAX;
            while let Some(key) = q.pop() {
                let score = scores[key.index()];
                assert!(score <= last, "seed {seed}: {score} after {last}");
                last = score;
            }
        }
    }

    #[test]
    fn pending_matches_pop_order() {
        let mut q = DispatchQueue::new();
        q.push(ParcelKey(0), 1002);
        q.push(ParcelKey(1), 3001);
        q.push(ParcelKey(2), 1002);
        let pending = q.pending();
        let popped: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(pending, popped);
    }
}

#[cfg(test)]
mod registry {
    use pn_core::ParcelKey;

    use crate::{DispatchError, ParcelRegistry, DEFAULT_REGISTRY_CAPACITY};

    #[test]
    fn insert_then_search() {
        let mut r = ParcelRegistry::new(8);
        let key = r.insert("P1", 11).unwrap();
        assert_eq!(key, ParcelKey(0));
        assert_eq!(r.search("P1"), Some(&11));
        assert_eq!(r.get(key), Some(&11));
        assert_eq!(r.id_of(key), Some("P1"));
        assert!(r.contains("P1"));
    }

    #[test]
    fn unknown_key_is_absent() {
        let mut r: ParcelRegistry<u8> = ParcelRegistry::new(4);
        assert_eq!(r.search("ghost"), None);
        r.insert("a", 1).unwrap();
        assert_eq!(r.search("ghost"), None);
        assert_eq!(r.key_of("ghost"), None);
        assert!(r.search_mut("ghost").is_none());
    }

    #[test]
    fn upsert_keeps_slot() {
        let mut r = ParcelRegistry::new(4);
        let k1 = r.insert("P1", "old").unwrap();
        r.insert("P2", "other").unwrap();
        let k2 = r.insert("P1", "new").unwrap();
        assert_eq!(k1, k2);
        assert_eq!(r.len(), 2);
        assert_eq!(r.search("P1"), Some(&"new"));
    }

    #[test]
    fn capacity_rejects_new_ids_only() {
        let mut r = ParcelRegistry::new(2);
        r.insert("a", 1).unwrap();
        r.insert("b", 2).unwrap();
        assert_eq!(r.insert("c", 3), Err(DispatchError::RegistryFull { capacity: 2 }));
        assert_eq!(r.len(), 2);
        assert!(!r.contains("c"));
        // Overwriting an existing id still works at capacity.
        assert!(r.insert("a", 10).is_ok());
        assert_eq!(r.search("a"), Some(&10));
    }

    #[test]
    fn iteration_in_insertion_order() {
        let mut r = ParcelRegistry::new(8);
        for id in ["z", "a", "m"] {
            r.insert(id, id.len()).unwrap();
        }
        let ids: Vec<_> = r.iter().map(|(k, _)| r.id_of(k).unwrap()).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn search_mut_updates_in_place() {
        let mut r = ParcelRegistry::new(4);
        r.insert("P1", 1).unwrap();
        *r.search_mut("P1").unwrap() += 41;
        assert_eq!(r.search("P1"), Some(&42));
    }

    #[test]
    fn default_capacity() {
        let r: ParcelRegistry<()> = ParcelRegistry::default();
        assert_eq!(r.capacity(), DEFAULT_REGISTRY_CAPACITY);
        assert!(r.is_empty());
    }
}
