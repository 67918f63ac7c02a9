// Copyright (c) 2025 - Cowboy AI, Inc.
//! Interval Loop
//!
//! Invokes a callback every `cadence` milliseconds while active. The cadence
//! is a [`Resolvable`], re-resolved before every reschedule, so a producer
//! cadence changes the loop's speed from one tick to the next.
//!
//! # Control
//!
//! - `pause` cancels the pending tick; nothing fires until `resume`
//! - `resume` resolves the cadence and schedules the next tick one cadence
//!   from now; a cadence failure is returned to the caller
//! - `stop` cancels and disposes the loop
//!
//! # Tick-time failures
//!
//! A cadence that fails to resolve while rescheduling from inside a tick has
//! no caller to return to. The loop logs the error, pauses itself and keeps
//! the error for [`IntervalLoop::take_error`].

use super::config::IntervalOptions;
use super::host::TimerHost;
use super::slot::{Lifecycle, TimerTicket};
use crate::errors::{HookError, HookResult};
use crate::resolvable::Resolvable;
use crate::state_machine::{TimingInput, TimingState};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, trace};

/// Resolve a cadence in milliseconds into a positive, non-zero duration
///
/// The shortest cadence is 1ns (`1e-6` ms); anything positive below that
/// fails with [`HookError::CadenceTooSmall`].
pub fn resolve_cadence(cadence: &Resolvable<f64>) -> HookResult<Duration> {
    let ms = cadence.resolve()?;
    if !ms.is_finite() || ms <= 0.0 {
        return Err(HookError::InvalidCadence(ms));
    }
    match Duration::try_from_secs_f64(ms / 1000.0) {
        Ok(duration) if duration.is_zero() => Err(HookError::CadenceTooSmall(ms)),
        Ok(duration) => Ok(duration),
        Err(_) => Err(HookError::InvalidCadence(ms)),
    }
}

type Callback = Arc<dyn Fn() + Send + Sync>;

struct IntervalState<H: TimerHost> {
    lifecycle: Lifecycle<H>,
    ticks: u64,
    last_error: Option<HookError>,
}

struct IntervalInner<H: TimerHost> {
    callback: Callback,
    cadence: Resolvable<f64>,
    options: IntervalOptions,
    state: Mutex<IntervalState<H>>,
}

/// Handle to a running (or paused) interval loop
pub struct IntervalLoop<H: TimerHost> {
    inner: Arc<IntervalInner<H>>,
}

/// Create an interval loop
///
/// With `options.immediate` the loop starts right away and a bad cadence is
/// returned here; otherwise it waits for [`IntervalLoop::resume`].
pub fn interval_loop<H, F>(
    host: H,
    callback: F,
    cadence: impl Into<Resolvable<f64>>,
    options: IntervalOptions,
) -> HookResult<IntervalLoop<H>>
where
    H: TimerHost,
    F: Fn() + Send + Sync + 'static,
{
    let interval = IntervalLoop {
        inner: Arc::new(IntervalInner {
            callback: Arc::new(callback),
            cadence: cadence.into(),
            options,
            state: Mutex::new(IntervalState {
                lifecycle: Lifecycle::new(host),
                ticks: 0,
                last_error: None,
            }),
        }),
    };

    if options.immediate {
        interval.resume()?;
    }
    Ok(interval)
}

impl<H: TimerHost> IntervalInner<H> {
    fn arm(self: &Arc<Self>, state: &mut IntervalState<H>, cadence: Duration) {
        let weak = Arc::downgrade(self);
        state.lifecycle.slot.schedule(cadence, move |ticket| {
            if let Some(inner) = weak.upgrade() {
                inner.tick(ticket);
            }
        });
    }

    fn tick(self: &Arc<Self>, ticket: TimerTicket) {
        let tick = {
            let mut state = self.state.lock();
            if !state.lifecycle.slot.release_if(ticket) || !state.lifecycle.state.is_scheduled() {
                return;
            }
            state.ticks += 1;
            state.ticks
        };

        // Producer cadences run without the lock held
        let next = resolve_cadence(&self.cadence);
        {
            let mut state = self.state.lock();
            if state.lifecycle.state.is_scheduled() && !state.lifecycle.slot.is_armed() {
                match next {
                    Ok(cadence) => {
                        if state.lifecycle.step(TimingInput::Fire { rearm: true }) {
                            self.arm(&mut state, cadence);
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "Interval cadence failed to resolve, pausing loop");
                        state.lifecycle.step(TimingInput::Pause);
                        state.last_error = Some(e);
                    }
                }
            }
        }

        trace!(tick, "Interval tick");
        (self.callback)();
    }
}

impl<H: TimerHost> IntervalLoop<H> {
    /// Suspend the loop; the pending tick is cancelled
    pub fn pause(&self) {
        let mut state = self.inner.state.lock();
        if !state.lifecycle.disposed {
            state.lifecycle.step(TimingInput::Pause);
            debug!("Interval paused");
        }
    }

    /// Start or resume the loop
    ///
    /// The cadence is resolved now; a failure leaves the loop untouched and
    /// is returned unchanged. Resuming an active or stopped loop does nothing.
    pub fn resume(&self) -> HookResult<()> {
        let inner = &self.inner;
        {
            let state = inner.state.lock();
            if state.lifecycle.disposed || state.lifecycle.state.is_scheduled() {
                return Ok(());
            }
        }

        let cadence = resolve_cadence(&inner.cadence)?;
        {
            let mut state = inner.state.lock();
            if state.lifecycle.disposed || state.lifecycle.state.is_scheduled() {
                return Ok(());
            }
            let input = match state.lifecycle.state {
                TimingState::Paused => TimingInput::Resume { rearm: true },
                _ => TimingInput::Arm { restart: true },
            };
            if state.lifecycle.step(input) {
                inner.arm(&mut state, cadence);
            }
            state.last_error = None;
            debug!(cadence_ms = cadence.as_millis() as u64, "Interval active");
        }

        if inner.options.immediate_callback {
            (inner.callback)();
        }
        Ok(())
    }

    /// Whether a tick is scheduled
    pub fn is_active(&self) -> bool {
        self.inner.state.lock().lifecycle.state.is_scheduled()
    }

    /// Cancel the pending tick and dispose the loop
    pub fn stop(&self) {
        self.inner.state.lock().lifecycle.step(TimingInput::Stop);
    }

    /// Current lifecycle state
    pub fn state(&self) -> TimingState {
        self.inner.state.lock().lifecycle.state
    }

    /// Number of ticks fired so far
    pub fn tick_count(&self) -> u64 {
        self.inner.state.lock().ticks
    }

    /// Take the error that paused the loop from inside a tick, if any
    pub fn take_error(&self) -> Option<HookError> {
        self.inner.state.lock().last_error.take()
    }
}

impl<H: TimerHost> Clone for IntervalLoop<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: TimerHost> fmt::Debug for IntervalLoop<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("IntervalLoop")
            .field("state", &state.lifecycle.state)
            .field("ticks", &state.ticks)
            .field("options", &self.inner.options)
            .finish()
    }
}

impl<H: TimerHost> Drop for IntervalInner<H> {
    fn drop(&mut self) {
        self.state.get_mut().lifecycle.slot.cancel();
    }
}
