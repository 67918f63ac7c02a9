// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timing Control
//!
//! Throttle, debounce and interval loops that run on a pluggable
//! [`TimerHost`] instead of a UI framework's effect cycle.
//!
//! # Ownership Model
//!
//! ```text
//! Throttle / Debounce / IntervalLoop
//!   └── Mutex<state>
//!         ├── TimingState   (Idle | Scheduled | Paused)
//!         ├── TimerSlot     (at most one live TimerId)
//!         └── pending value / last emission / tick count
//! ```
//!
//! - Each instance owns exactly one timer slot. Scheduling replaces the
//!   previous timer through the host's own cancellation.
//! - User callbacks always run with the instance lock released, so they may
//!   call back into the instance.
//! - Dropping the last handle cancels the pending timer.
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_hooks::timing::{debounce, ManualHost};
//! use std::time::Duration;
//!
//! let host = ManualHost::new();
//! let search = debounce(
//!     host.clone(),
//!     |query: String| run_search(&query),
//!     Duration::from_millis(300),
//! );
//!
//! search.call("r".into());
//! search.call("ru".into());
//! search.call("rust".into());
//! host.advance(Duration::from_millis(300)); // run_search("rust")
//! ```

#[cfg(test)]
pub(crate) mod claiming;
pub mod config;
pub mod debounce;
pub mod host;
pub mod interval;
pub mod manual;
pub mod slot;
pub mod throttle;
pub mod tokio_host;

use std::sync::Arc;

pub use config::{IntervalOptions, TimingConfig};
pub use debounce::{debounce, Debounce};
pub use host::{TimerHost, TimerId, TimerTask};
pub use interval::{interval_loop, resolve_cadence, IntervalLoop};
pub use manual::ManualHost;
pub use slot::{TimerSlot, TimerTicket};
pub use throttle::{throttle, Throttle};
pub use tokio_host::TokioHost;

/// Shared emit callback of a throttle or debounce instance
pub type Emit<T> = Arc<dyn Fn(T) + Send + Sync>;
