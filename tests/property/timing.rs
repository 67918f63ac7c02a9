// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Timing Control
//!
//! Random call schedules against a [`ManualHost`].

use cim_hooks::timing::{debounce, throttle, ManualHost, TimerHost};
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

/// Gaps between successive calls, in milliseconds
fn call_gaps() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..150, 1..40)
}

type Emissions = Arc<Mutex<Vec<(u64, usize)>>>;

fn recorder(host: &ManualHost) -> (Emissions, impl Fn(usize) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let clock = host.clone();
    (seen, move |value: usize| sink.lock().push((clock.now().as_millis() as u64, value)))
}

proptest! {
    /// Property: throttle emissions are at least one window apart and end
    /// with the last value offered
    #[test]
    fn prop_throttle_spacing_and_last_value(gaps in call_gaps(), delay in 1u64..200) {
        let host = ManualHost::new();
        let (seen, sink) = recorder(&host);
        let throttled = throttle(host.clone(), sink, Duration::from_millis(delay));

        for (i, gap) in gaps.iter().enumerate() {
            host.advance(Duration::from_millis(*gap));
            throttled.call(i);
        }
        host.advance(Duration::from_millis(delay * 2));

        let emissions = seen.lock().clone();
        prop_assert!(!emissions.is_empty());
        for pair in emissions.windows(2) {
            prop_assert!(pair[1].0 - pair[0].0 >= delay, "emissions too close: {:?}", emissions);
        }
        prop_assert_eq!(emissions.last().map(|(_, v)| *v), Some(gaps.len() - 1));
    }

    /// Property: debounce emits once per burst, each time with the burst's last value
    #[test]
    fn prop_debounce_one_emission_per_burst(gaps in call_gaps(), delay in 1u64..200) {
        let host = ManualHost::new();
        let (seen, sink) = recorder(&host);
        let debounced = debounce(host.clone(), sink, Duration::from_millis(delay));

        // A call ends a burst when the next call comes at least `delay` later
        let mut expected = Vec::new();
        let mut clock = 0u64;
        for (i, gap) in gaps.iter().enumerate() {
            host.advance(Duration::from_millis(*gap));
            clock += gap;
            debounced.call(i);
            let next_gap = gaps.get(i + 1).copied();
            if next_gap.map_or(true, |g| g >= delay) {
                expected.push((clock + delay, i));
            }
        }
        host.advance(Duration::from_millis(delay * 2));

        prop_assert_eq!(seen.lock().clone(), expected);
    }
}
