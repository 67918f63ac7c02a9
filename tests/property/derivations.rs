// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Pure Derivations
//!
//! Range, aggregate and rounding properties checked over generated finite
//! inputs.

use cim_hooks::derive::{average, clamp, max, min, projection, round, sum};
use cim_hooks::{ErrorKind, NumberPolicy};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Finite values in a range where sums cannot overflow
fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

/// Ordered (min, max) pair
fn bounds() -> impl Strategy<Value = (f64, f64)> {
    (finite(), finite()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

/// Non-degenerate source interval with a value inside it
fn value_in_interval() -> impl Strategy<Value = (f64, (f64, f64))> {
    (finite(), 1.0e-3..1.0e6f64, 0.0..=1.0f64)
        .prop_map(|(lo, width, t)| (lo + t * width, (lo, lo + width)))
}

fn non_empty_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(finite(), 1..64)
}

// ============================================================================
// Range Properties
// ============================================================================

proptest! {
    /// Property: clamp always lands inside [min, max]
    #[test]
    fn prop_clamp_within_bounds(value in finite(), (lo, hi) in bounds()) {
        let result = clamp(value, lo, hi).unwrap();
        prop_assert!(lo <= result && result <= hi, "{} not in [{}, {}]", result, lo, hi);
    }

    /// Property: values already inside the interval are returned unchanged
    #[test]
    fn prop_clamp_identity_inside((lo, hi) in bounds(), t in 0.0..=1.0f64) {
        let value = (lo + t * (hi - lo)).clamp(lo, hi);
        prop_assert_eq!(clamp(value, lo, hi).unwrap(), value);
    }

    /// Property: clamp is idempotent
    #[test]
    fn prop_clamp_idempotent(value in finite(), (lo, hi) in bounds()) {
        let once = clamp(value, lo, hi).unwrap();
        let twice = clamp(once, lo, hi).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: inverted bounds are always rejected
    #[test]
    fn prop_clamp_inverted_bounds_rejected(value in finite(), (lo, hi) in bounds()) {
        prop_assume!(lo < hi);
        let err = clamp(value, hi, lo).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidDomain);
    }

    /// Property: projection of an in-range value lands in the target range
    #[test]
    fn prop_projection_lands_in_target(
        (value, from) in value_in_interval(),
        (to_lo, to_hi) in bounds(),
    ) {
        let result = projection(value, from, (to_lo, to_hi)).unwrap();
        let slack = 1e-6 * (1.0 + to_hi.abs().max(to_lo.abs()));
        prop_assert!(
            result >= to_lo - slack && result <= to_hi + slack,
            "{} not in [{}, {}]",
            result,
            to_lo,
            to_hi
        );
    }

    /// Property: projection maps the source endpoints onto the target endpoints
    #[test]
    fn prop_projection_endpoints((_, from) in value_in_interval(), (to_lo, to_hi) in bounds()) {
        let low = projection(from.0, from, (to_lo, to_hi)).unwrap();
        prop_assert_eq!(low, to_lo);
        let high = projection(from.1, from, (to_lo, to_hi)).unwrap();
        let slack = 1e-6 * (1.0 + to_hi.abs());
        prop_assert!((high - to_hi).abs() <= slack, "{} != {}", high, to_hi);
    }
}

// ============================================================================
// Aggregate Properties
// ============================================================================

proptest! {
    /// Property: the average lies between min and max
    #[test]
    fn prop_average_between_min_and_max(values in non_empty_values()) {
        let mean = average(&values).unwrap();
        let lo = min(&values).unwrap();
        let hi = max(&values).unwrap();
        let slack = 1e-9 * (1.0 + lo.abs().max(hi.abs()));
        prop_assert!(mean >= lo - slack && mean <= hi + slack);
    }

    /// Property: average times length equals the sum
    #[test]
    fn prop_average_matches_sum(values in non_empty_values()) {
        let total = sum(&values).unwrap();
        let mean = average(&values).unwrap();
        let slack = 1e-6 * (1.0 + total.abs());
        prop_assert!((mean * values.len() as f64 - total).abs() <= slack);
    }

    /// Property: a single NaN anywhere makes the aggregate fail
    #[test]
    fn prop_nan_poisons_aggregate(
        mut values in non_empty_values(),
        at in any::<prop::sample::Index>(),
    ) {
        let index = at.index(values.len());
        values[index] = f64::NAN;
        let err = average(&values).unwrap_err();
        prop_assert_eq!(err.index(), Some(index));
    }
}

// ============================================================================
// Rounding Properties
// ============================================================================

proptest! {
    /// Property: round is idempotent and within 0.5 of its input
    #[test]
    fn prop_round_idempotent(value in finite()) {
        let once = round(value, NumberPolicy::Finite).unwrap();
        prop_assert_eq!(round(once, NumberPolicy::Finite).unwrap(), once);
        prop_assert!((once - value).abs() <= 0.5);
    }
}
