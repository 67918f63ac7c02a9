// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host for cancellation races
//!
//! Queued tasks run only when a test says so, and a test can claim a task
//! the way a worker thread takes it off the queue before running it. A
//! claimed task can no longer be cancelled, so `cancel` returns `false` for
//! it, as [`TimerHost::cancel`] allows.

use super::host::{TimerHost, TimerId, TimerTask};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct ClaimQueue {
    next_id: u64,
    tasks: BTreeMap<TimerId, TimerTask>,
}

#[derive(Clone, Default)]
pub(crate) struct ClaimingHost {
    queue: Arc<Mutex<ClaimQueue>>,
}

impl ClaimingHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Take the oldest queued task out of the queue without running it
    pub(crate) fn claim_oldest(&self) -> Option<TimerTask> {
        self.queue.lock().tasks.pop_first().map(|(_, task)| task)
    }

    /// Run the oldest queued task
    pub(crate) fn run_next(&self) -> bool {
        match self.claim_oldest() {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Number of queued tasks
    pub(crate) fn live(&self) -> usize {
        self.queue.lock().tasks.len()
    }
}

impl TimerHost for ClaimingHost {
    fn now(&self) -> Duration {
        Duration::ZERO
    }

    fn schedule(&self, _delay: Duration, task: TimerTask) -> TimerId {
        let mut queue = self.queue.lock();
        queue.next_id += 1;
        let id = TimerId::new(queue.next_id);
        queue.tasks.insert(id, task);
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        self.queue.lock().tasks.remove(&id).is_some()
    }
}
