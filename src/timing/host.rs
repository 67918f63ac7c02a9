// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timer Hosts
//!
//! A [`TimerHost`] owns the timer queue and the monotonic clock. The timing
//! facility never sleeps or spawns on its own; it asks the host to run a task
//! later and cancels through the handle the host returned.
//!
//! # Implementations
//!
//! - [`ManualHost`](super::manual::ManualHost): virtual clock advanced by hand
//! - [`TokioHost`](super::tokio_host::TokioHost): tokio runtime timers

use std::fmt;
use std::time::Duration;

/// Deferred callback owned by a host until it fires or is cancelled
pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Opaque handle to one scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Clock and timer queue used by throttle, debounce and interval instances
pub trait TimerHost: Clone + Send + Sync + 'static {
    /// Monotonic time since the host's origin
    fn now(&self) -> Duration;

    /// Run `task` once after `delay`
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId;

    /// Invalidate a scheduled task
    ///
    /// Once this returns, the task will not start. Returns `false` when the
    /// task already started or was already cancelled.
    fn cancel(&self, id: TimerId) -> bool;
}
