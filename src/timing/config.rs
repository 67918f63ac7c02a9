// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timing configuration
//!
//! Plain serde structs with defaults, loadable from JSON.

use crate::errors::HookResult;
use crate::resolvable::Resolvable;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options for [`interval_loop`](super::interval::interval_loop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalOptions {
    /// Start ticking as soon as the loop is created
    pub immediate: bool,
    /// Invoke the callback right away on every start and resume
    pub immediate_callback: bool,
}

impl Default for IntervalOptions {
    fn default() -> Self {
        Self {
            immediate: true,
            immediate_callback: false,
        }
    }
}

/// Default cadences for throttle, debounce and interval instances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Throttle window in milliseconds
    pub throttle_delay_ms: u64,
    /// Debounce quiet period in milliseconds
    pub debounce_delay_ms: u64,
    /// Interval cadence in milliseconds
    pub interval_cadence_ms: f64,
    /// Interval start behavior
    pub interval: IntervalOptions,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            throttle_delay_ms: 200,
            debounce_delay_ms: 200,
            interval_cadence_ms: 1000.0,
            interval: IntervalOptions::default(),
        }
    }
}

impl TimingConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> HookResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Throttle window
    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.throttle_delay_ms)
    }

    /// Debounce quiet period
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    /// Interval cadence as a literal resolvable
    pub fn cadence(&self) -> Resolvable<f64> {
        Resolvable::literal(self.interval_cadence_ms)
    }
}
