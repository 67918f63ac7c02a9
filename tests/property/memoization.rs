// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Memoized Derivations

use cim_hooks::derive::clamp;
use cim_hooks::{Derived, Memo};
use proptest::prelude::*;

proptest! {
    /// Property: the derivation runs once per change of dependencies
    #[test]
    fn prop_recomputes_once_per_change(deps in prop::collection::vec(0u8..4, 1..64)) {
        let mut memo: Memo<u8, u16> = Memo::new();
        let mut expected = 0u64;
        let mut previous = None;

        for dep in deps {
            if previous != Some(dep) {
                expected += 1;
            }
            previous = Some(dep);
            let value = memo.get(dep, |d| Ok(u16::from(*d) * 10)).unwrap();
            prop_assert_eq!(value, u16::from(dep) * 10);
        }
        prop_assert_eq!(memo.recompute_count(), expected);
    }

    /// Property: memoized results equal direct computation
    #[test]
    fn prop_memo_matches_direct(
        inputs in prop::collection::vec((-100.0..100.0f64, -50.0..0.0f64, 0.0..50.0f64), 1..32)
    ) {
        let mut clamped = Derived::new(|&(v, lo, hi): &(f64, f64, f64)| clamp(v, lo, hi));
        for (v, lo, hi) in inputs {
            prop_assert_eq!(clamped.get((v, lo, hi)).unwrap(), clamp(v, lo, hi).unwrap());
        }
    }
}
