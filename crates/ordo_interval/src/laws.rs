//! Property tests for the integer-domain laws.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::collections::HashSet;

use proptest::prelude::*;

use crate::{ByEnumeration, Interval};

fn small() -> impl Strategy<Value = i64> {
    -200_i64..200
}

proptest! {
    #[test]
    fn element_count_matches_bounds(a in small(), b in small(), exclusive in any::<bool>()) {
        let interval = Interval::new(a, b, exclusive).unwrap();
        let count = interval.iter().unwrap().count();
        let expected = if exclusive { b - a } else { b - a + 1 };
        prop_assert_eq!(count, usize::try_from(expected.max(0)).unwrap());
    }

    #[test]
    fn elements_ascend_by_one(a in small(), b in small(), exclusive in any::<bool>()) {
        let elements: Vec<i64> = Interval::new(a, b, exclusive).unwrap().iter().unwrap().collect();
        prop_assert!(elements.windows(2).all(|pair| pair[1] == pair[0] + 1));
        if let Some(first) = elements.first() {
            prop_assert_eq!(*first, a);
        }
    }

    #[test]
    fn membership_agrees_with_enumeration(
        a in small(),
        b in small(),
        x in small(),
        exclusive in any::<bool>(),
    ) {
        let interval = Interval::new(a, b, exclusive).unwrap();
        let enumerated = interval.iter().unwrap().any(|e| e == x);
        prop_assert_eq!(interval.member(&x), enumerated);
        prop_assert_eq!(interval.cover(&x), enumerated);
        prop_assert_eq!(interval.member_with(&x, &ByEnumeration).unwrap(), enumerated);
    }

    #[test]
    fn degenerate_intervals(x in any::<i64>()) {
        prop_assert!(Interval::inclusive(x, x).unwrap().member(&x));
        prop_assert!(!Interval::exclusive(x, x).unwrap().member(&x));
    }

    #[test]
    fn equality_is_consistent_with_hash(
        a in small(),
        b in small(),
        c in small(),
        d in small(),
        e1 in any::<bool>(),
        e2 in any::<bool>(),
    ) {
        let left = Interval::new(a, b, e1).unwrap();
        let right = Interval::new(c, d, e2).unwrap();
        prop_assert_eq!(left.is_equal(&right), right.is_equal(&left));
        prop_assert!(left.is_equal(&left.clone()));
        if left.is_equal(&right) {
            prop_assert_eq!(left.hash_code(), right.hash_code());
        }
        let set: HashSet<Interval<i64>> = [left.clone(), right.clone()].into_iter().collect();
        prop_assert_eq!(set.len(), if left == right { 1 } else { 2 });
    }

    #[test]
    fn last_n_is_the_tail_of_iteration(
        a in small(),
        b in small(),
        k in 0_usize..50,
        exclusive in any::<bool>(),
    ) {
        let interval = Interval::new(a, b, exclusive).unwrap();
        let all: Vec<i64> = interval.iter().unwrap().collect();
        let tail = &all[all.len().saturating_sub(k)..];
        prop_assert_eq!(interval.last_n(k).unwrap(), tail.to_vec());
    }

    #[test]
    fn step_samples_iteration(a in small(), b in small(), n in 1_i64..20) {
        let interval = Interval::inclusive(a, b).unwrap();
        let stepped: Vec<i64> = interval.step(n).unwrap().collect();
        let sampled: Vec<i64> = interval
            .iter()
            .unwrap()
            .step_by(usize::try_from(n).unwrap())
            .collect();
        prop_assert_eq!(stepped, sampled);
    }
}
