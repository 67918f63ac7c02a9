// Copyright (c) 2025 - Cowboy AI, Inc.
//! Manual Timer Host
//!
//! A deterministic host with a virtual clock. Time only moves when the owner
//! calls [`ManualHost::advance`]; due tasks then run in deadline order, FIFO
//! among equal deadlines. Tasks run without the host lock held, so they may
//! schedule or cancel other tasks.

use super::host::{TimerHost, TimerId, TimerTask};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_id: u64,
    /// Keyed by (deadline, id); ids increase so equal deadlines stay FIFO
    tasks: BTreeMap<(Duration, TimerId), TimerTask>,
    deadlines: HashMap<TimerId, Duration>,
}

/// Virtual-clock timer host
#[derive(Clone, Default)]
pub struct ManualHost {
    queue: Arc<Mutex<ManualQueue>>,
}

impl ManualHost {
    /// Create a host with its clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `duration`, running every task that falls due
    ///
    /// Returns the number of tasks that ran.
    pub fn advance(&self, duration: Duration) -> usize {
        let target = self.queue.lock().now + duration;
        self.advance_to(target)
    }

    /// Move the clock to `target`, running every task that falls due
    ///
    /// The clock never moves backwards; a `target` in the past only runs
    /// tasks already due.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut ran = 0;
        loop {
            let next = {
                let mut queue = self.queue.lock();
                let due = queue
                    .tasks
                    .keys()
                    .next()
                    .copied()
                    .filter(|(deadline, _)| *deadline <= target);

                match due {
                    Some(key) => {
                        let (deadline, id) = key;
                        queue.deadlines.remove(&id);
                        queue.now = queue.now.max(deadline);
                        queue.tasks.remove(&key).map(|task| (id, task))
                    }
                    None => {
                        queue.now = queue.now.max(target);
                        None
                    }
                }
            };

            match next {
                Some((id, task)) => {
                    trace!(%id, "Running manual timer");
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }

    /// Run tasks already due at the current time (zero-delay tasks)
    pub fn run_pending(&self) -> usize {
        let now = self.queue.lock().now;
        self.advance_to(now)
    }

    /// Number of scheduled tasks
    pub fn pending_count(&self) -> usize {
        self.queue.lock().tasks.len()
    }
}

impl TimerHost for ManualHost {
    fn now(&self) -> Duration {
        self.queue.lock().now
    }

    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId {
        let mut queue = self.queue.lock();
        queue.next_id += 1;
        let id = TimerId::new(queue.next_id);
        let deadline = queue.now + delay;
        queue.tasks.insert((deadline, id), task);
        queue.deadlines.insert(id, deadline);
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        let mut queue = self.queue.lock();
        match queue.deadlines.remove(&id) {
            Some(deadline) => queue.tasks.remove(&(deadline, id)).is_some(),
            None => false,
        }
    }
}

impl fmt::Debug for ManualHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.lock();
        f.debug_struct("ManualHost")
            .field("now", &queue.now)
            .field("pending", &queue.tasks.len())
            .finish()
    }
}
