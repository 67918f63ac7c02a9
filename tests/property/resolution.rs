// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Value Resolution

use cim_hooks::resolvable::{resolve, resolve_all};
use cim_hooks::Resolvable;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

proptest! {
    /// Property: resolving a literal yields exactly the literal
    #[test]
    fn prop_literal_resolves_to_itself(value in any::<i64>()) {
        prop_assert_eq!(resolve(&Resolvable::literal(value)).unwrap(), value);
    }

    /// Property: a producer resolves to what it returns, once per call
    #[test]
    fn prop_producer_called_once_per_resolve(value in any::<i64>(), times in 1usize..20) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let input = Resolvable::from_fn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        for _ in 0..times {
            prop_assert_eq!(resolve(&input).unwrap(), value);
        }
        prop_assert_eq!(calls.load(Ordering::SeqCst), times);
    }

    /// Property: resolve_all preserves order for any mix of literals and producers
    #[test]
    fn prop_resolve_all_preserves_order(
        items in prop::collection::vec((any::<i32>(), any::<bool>()), 0..32)
    ) {
        let inputs: Vec<Resolvable<i32>> = items
            .iter()
            .map(|&(value, lazy)| {
                if lazy {
                    Resolvable::from_fn(move || value)
                } else {
                    Resolvable::literal(value)
                }
            })
            .collect();
        let expected: Vec<i32> = items.iter().map(|(value, _)| *value).collect();
        prop_assert_eq!(resolve_all(&inputs).unwrap(), expected);
    }

    /// Property: the reported index is the first failing producer
    #[test]
    fn prop_resolve_all_reports_first_failure(
        len in 1usize..32,
        failing in prop::collection::btree_set(0usize..32, 1..4),
    ) {
        let failing: Vec<usize> = failing.into_iter().filter(|i| *i < len).collect();
        prop_assume!(!failing.is_empty());

        let inputs: Vec<Resolvable<usize>> = (0..len)
            .map(|i| {
                if failing.contains(&i) {
                    Resolvable::try_from_fn(move || Err(anyhow::anyhow!("element {i} failed")))
                } else {
                    Resolvable::literal(i)
                }
            })
            .collect();

        let err = resolve_all(&inputs).unwrap_err();
        prop_assert_eq!(err.index(), Some(failing[0]));
    }
}
