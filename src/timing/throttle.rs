// Copyright (c) 2025 - Cowboy AI, Inc.
//! Throttle
//!
//! Emits at most once per `delay` window, always ending with the most recent
//! value.
//!
//! ```text
//! calls:  a   b  c          d
//! time:   0  50  90        400
//! emits:  a         c(200)  d(400)
//! ```
//!
//! - Leading edge: a call in a quiet period emits at once and opens a window.
//! - Inside a window: the value is queued (latest wins); the window timer is
//!   not reset.
//! - Trailing edge: when the window closes, a queued value is emitted and a
//!   new window opens; with nothing queued the throttle goes idle.

use super::host::TimerHost;
use super::slot::{Lifecycle, TimerTicket};
use super::Emit;
use crate::state_machine::{TimingInput, TimingState};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

struct ThrottleState<T, H: TimerHost> {
    lifecycle: Lifecycle<H>,
    /// Host time of the last emission
    last_emit: Option<Duration>,
    pending: Option<T>,
}

struct ThrottleInner<T, H: TimerHost> {
    host: H,
    delay: Duration,
    emit: Emit<T>,
    state: Mutex<ThrottleState<T, H>>,
}

/// Throttled emitter; clones share the same window
pub struct Throttle<T, H: TimerHost> {
    inner: Arc<ThrottleInner<T, H>>,
}

/// Wrap `emit` so it runs at most once per `delay`
pub fn throttle<T, H, F>(host: H, emit: F, delay: Duration) -> Throttle<T, H>
where
    T: Send + 'static,
    H: TimerHost,
    F: Fn(T) + Send + Sync + 'static,
{
    Throttle {
        inner: Arc::new(ThrottleInner {
            host: host.clone(),
            delay,
            emit: Arc::new(emit),
            state: Mutex::new(ThrottleState {
                lifecycle: Lifecycle::new(host),
                last_emit: None,
                pending: None,
            }),
        }),
    }
}

impl<T: Send + 'static, H: TimerHost> ThrottleInner<T, H> {
    /// Time left in the window opened by the last emission
    fn remaining(&self, state: &ThrottleState<T, H>) -> Duration {
        match state.last_emit {
            Some(at) => {
                let elapsed = self.host.now().saturating_sub(at);
                self.delay.saturating_sub(elapsed)
            }
            None => Duration::ZERO,
        }
    }

    fn arm(self: &Arc<Self>, state: &mut ThrottleState<T, H>, delay: Duration) {
        let weak = Arc::downgrade(self);
        state.lifecycle.slot.schedule(delay, move |ticket| {
            if let Some(inner) = weak.upgrade() {
                inner.window_closed(ticket);
            }
        });
    }

    fn window_closed(self: &Arc<Self>, ticket: TimerTicket) {
        let mut state = self.state.lock();
        if !state.lifecycle.slot.release_if(ticket) || !state.lifecycle.state.is_scheduled() {
            return;
        }

        let value = state.pending.take();
        if state.lifecycle.step(TimingInput::Fire {
            rearm: value.is_some(),
        }) {
            state.last_emit = Some(self.host.now());
            self.arm(&mut state, self.delay);
        }
        drop(state);

        if let Some(value) = value {
            trace!("Throttle emitting trailing value");
            (self.emit)(value);
        }
    }
}

impl<T: Send + 'static, H: TimerHost> Throttle<T, H> {
    /// Offer a new value
    pub fn call(&self, value: T) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        if state.lifecycle.disposed {
            debug!("Throttle stopped, dropping value");
            return;
        }

        let wait = inner.remaining(&state);
        if !state.lifecycle.step(TimingInput::Arm { restart: false }) {
            // Window already open (or paused): queue for the trailing edge
            state.pending = Some(value);
            return;
        }

        if wait.is_zero() {
            state.last_emit = Some(inner.host.now());
            inner.arm(&mut state, inner.delay);
            drop(state);
            trace!("Throttle emitting leading value");
            (inner.emit)(value);
        } else {
            state.pending = Some(value);
            inner.arm(&mut state, wait);
        }
    }

    /// Emit the queued value now and restart the window
    pub fn flush(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        let Some(value) = state.pending.take() else {
            return;
        };

        state.last_emit = Some(inner.host.now());
        if state.lifecycle.state.is_scheduled()
            && state.lifecycle.step(TimingInput::Arm { restart: true })
        {
            inner.arm(&mut state, inner.delay);
        }
        drop(state);
        (inner.emit)(value);
    }

    /// Drop the queued value and forget the open window
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        state.pending = None;
        state.last_emit = None;
        state.lifecycle.step(TimingInput::Cancel);
    }

    /// Suspend; values offered while paused are queued, not emitted
    pub fn pause(&self) {
        let mut state = self.inner.state.lock();
        if !state.lifecycle.disposed {
            state.lifecycle.step(TimingInput::Pause);
        }
    }

    /// Resume; a queued value is emitted once the current window has elapsed
    pub fn resume(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        if state.lifecycle.disposed {
            return;
        }
        let rearm = state.pending.is_some();
        if state.lifecycle.step(TimingInput::Resume { rearm }) {
            let wait = inner.remaining(&state);
            inner.arm(&mut state, wait);
        }
    }

    /// Cancel everything and ignore further calls
    pub fn stop(&self) {
        let mut state = self.inner.state.lock();
        state.pending = None;
        state.lifecycle.step(TimingInput::Stop);
    }

    /// Current lifecycle state
    pub fn state(&self) -> TimingState {
        self.inner.state.lock().lifecycle.state
    }

    /// Whether a value waits for the trailing edge
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }

    /// Window length
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}

impl<T, H: TimerHost> Clone for Throttle<T, H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, H: TimerHost> fmt::Debug for Throttle<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Throttle")
            .field("delay", &self.inner.delay)
            .field("state", &state.lifecycle.state)
            .field("pending", &state.pending.is_some())
            .finish()
    }
}

impl<T, H: TimerHost> Drop for ThrottleInner<T, H> {
    fn drop(&mut self) {
        self.state.get_mut().lifecycle.slot.cancel();
    }
}
