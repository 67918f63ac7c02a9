// Copyright (c) 2025 - Cowboy AI, Inc.
//! Debounce
//!
//! Emits the latest value once `delay` has passed without another call.
//!
//! ```text
//! calls:  a  b  c
//! time:   0 30 60
//! emits:            c(60 + delay)
//! ```
//!
//! Every call restarts the single pending timer. A zero delay emits on the
//! host's next turn.

use super::host::TimerHost;
use super::slot::{Lifecycle, TimerTicket};
use super::Emit;
use crate::state_machine::{TimingInput, TimingState};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

struct DebounceState<T, H: TimerHost> {
    lifecycle: Lifecycle<H>,
    pending: Option<T>,
}

struct DebounceInner<T, H: TimerHost> {
    delay: Duration,
    emit: Emit<T>,
    state: Mutex<DebounceState<T, H>>,
}

/// Debounced emitter; clones share the same pending timer
pub struct Debounce<T, H: TimerHost> {
    inner: Arc<DebounceInner<T, H>>,
}

/// Wrap `emit` so it only runs after `delay` of quiet
pub fn debounce<T, H, F>(host: H, emit: F, delay: Duration) -> Debounce<T, H>
where
    T: Send + 'static,
    H: TimerHost,
    F: Fn(T) + Send + Sync + 'static,
{
    Debounce {
        inner: Arc::new(DebounceInner {
            delay,
            emit: Arc::new(emit),
            state: Mutex::new(DebounceState {
                lifecycle: Lifecycle::new(host),
                pending: None,
            }),
        }),
    }
}

impl<T: Send + 'static, H: TimerHost> DebounceInner<T, H> {
    fn arm(self: &Arc<Self>, state: &mut DebounceState<T, H>) {
        let weak = Arc::downgrade(self);
        state.lifecycle.slot.schedule(self.delay, move |ticket| {
            if let Some(inner) = weak.upgrade() {
                inner.settled(ticket);
            }
        });
    }

    fn settled(&self, ticket: TimerTicket) {
        let mut state = self.state.lock();
        if !state.lifecycle.slot.release_if(ticket) || !state.lifecycle.state.is_scheduled() {
            return;
        }

        let value = state.pending.take();
        state.lifecycle.step(TimingInput::Fire { rearm: false });
        drop(state);

        if let Some(value) = value {
            trace!("Debounce emitting settled value");
            (self.emit)(value);
        }
    }
}

impl<T: Send + 'static, H: TimerHost> Debounce<T, H> {
    /// Offer a new value, restarting the quiet period
    pub fn call(&self, value: T) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        if state.lifecycle.disposed {
            debug!("Debounce stopped, dropping value");
            return;
        }

        state.pending = Some(value);
        if state.lifecycle.step(TimingInput::Arm { restart: true }) {
            inner.arm(&mut state);
        }
    }

    /// Emit the pending value now
    pub fn flush(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        let Some(value) = state.pending.take() else {
            return;
        };
        if state.lifecycle.state.is_scheduled() {
            state.lifecycle.step(TimingInput::Cancel);
        }
        drop(state);
        (inner.emit)(value);
    }

    /// Drop the pending value
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        state.pending = None;
        state.lifecycle.step(TimingInput::Cancel);
    }

    /// Suspend; calls while paused replace the pending value silently
    pub fn pause(&self) {
        let mut state = self.inner.state.lock();
        if !state.lifecycle.disposed {
            state.lifecycle.step(TimingInput::Pause);
        }
    }

    /// Resume; a pending value gets a fresh quiet period
    pub fn resume(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        if state.lifecycle.disposed {
            return;
        }
        let rearm = state.pending.is_some();
        if state.lifecycle.step(TimingInput::Resume { rearm }) {
            inner.arm(&mut state);
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

    /// Whether a value waits to be emitted
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }

    /// Quiet period
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}

impl<T, H: TimerHost> Clone for Debounce<T, H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, H: TimerHost> fmt::Debug for Debounce<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Debounce")
            .field("delay", &self.inner.delay)
            .field("state", &state.lifecycle.state)
            .field("pending", &state.pending.is_some())
            .finish()
    }
}

impl<T, H: TimerHost> Drop for DebounceInner<T, H> {
    fn drop(&mut self) {
        self.state.get_mut().lifecycle.slot.cancel();
    }
}
