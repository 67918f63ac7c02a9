// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tokio Timer Host
//!
//! Each scheduled task is a spawned tokio task that sleeps for the delay and
//! then runs the callback. The host keeps a registry of live tasks:
//!
//! - `cancel` removes the registry entry and aborts the tokio task
//! - a woken task claims its own entry first and only runs the callback if
//!   the entry was still there
//!
//! Claiming and cancelling both happen under the registry lock, so once
//! `cancel` returns `true` the callback cannot start.
//!
//! The clock is [`tokio::time::Instant`], so paused-time tests
//! (`#[tokio::test(start_paused = true)]`) drive this host deterministically.

use super::host::{TimerHost, TimerId, TimerTask};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

#[derive(Default)]
struct Registry {
    next_id: u64,
    live: HashMap<TimerId, JoinHandle<()>>,
}

/// Timer host backed by a tokio runtime
#[derive(Clone)]
pub struct TokioHost {
    handle: Handle,
    origin: Instant,
    registry: Arc<Mutex<Registry>>,
}

impl TokioHost {
    /// Create a host that spawns onto `handle`
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            origin: Instant::now(),
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    /// Create a host on the runtime of the calling context
    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }

    /// Number of tasks scheduled and not yet started or cancelled
    pub fn pending_count(&self) -> usize {
        self.registry.lock().live.len()
    }
}

impl TimerHost for TokioHost {
    fn now(&self) -> Duration {
        Instant::now().saturating_duration_since(self.origin)
    }

    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId {
        // Held across spawn so the task cannot look itself up before it is registered
        let mut registry = self.registry.lock();
        registry.next_id += 1;
        let id = TimerId::new(registry.next_id);

        let claims = Arc::clone(&self.registry);
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let live = claims.lock().live.remove(&id).is_some();
            if live {
                trace!(%id, "Running tokio timer");
                task();
            }
        });
        registry.live.insert(id, join);
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        match self.registry.lock().live.remove(&id) {
            Some(join) => {
                join.abort();
                debug!(%id, "Cancelled tokio timer");
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for TokioHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioHost")
            .field("pending", &self.pending_count())
            .finish()
    }
}
