// Copyright (c) 2025 - Cowboy AI, Inc.
//! Single Timer Slot
//!
//! Every timing instance owns exactly one [`TimerSlot`]. Scheduling into an
//! occupied slot cancels the previous handle through the host first, so at
//! most one timer per instance is ever live.
//!
//! [`Lifecycle`] pairs the slot with the [`TimingState`] machine: feeding it
//! an input performs the transition and applies the cancel half of the
//! resulting [`TimerAction`]. Scheduling needs the caller's delay and task,
//! so that half is reported back instead.

use super::host::{TimerHost, TimerId};
use crate::state_machine::{StateMachine, TimerAction, TimingInput, TimingState};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Identifies one scheduling of a [`TimerSlot`]
///
/// The task scheduled through [`TimerSlot::schedule`] receives its ticket and
/// hands it back to [`TimerSlot::release_if`] when it fires. A task whose
/// cancel lost the race with its own start holds a stale ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket(u64);

/// Holder of at most one live timer
#[derive(Debug)]
pub struct TimerSlot<H: TimerHost> {
    host: H,
    current: Option<(TimerId, TimerTicket)>,
    generation: u64,
}

impl<H: TimerHost> TimerSlot<H> {
    /// Create an empty slot
    pub fn new(host: H) -> Self {
        Self {
            host,
            current: None,
            generation: 0,
        }
    }

    /// Schedule `task`, cancelling whatever the slot held
    pub fn schedule<F>(&mut self, delay: Duration, task: F) -> TimerId
    where
        F: FnOnce(TimerTicket) + Send + 'static,
    {
        self.cancel();
        self.generation += 1;
        let ticket = TimerTicket(self.generation);
        let id = self.host.schedule(delay, Box::new(move || task(ticket)));
        debug!(%id, delay_ms = delay.as_millis() as u64, "Scheduled timer");
        self.current = Some((id, ticket));
        id
    }

    /// Cancel the live timer, if any
    ///
    /// Returns `false` when the host had already started the task; the task
    /// then finds its ticket stale.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some((id, _)) => {
                let cancelled = self.host.cancel(id);
                debug!(%id, cancelled, "Cancelled timer");
                cancelled
            }
            None => false,
        }
    }

    /// Forget the live timer if `ticket` is the current one
    ///
    /// Returns `false` for a stale ticket and leaves the slot untouched.
    pub fn release_if(&mut self, ticket: TimerTicket) -> bool {
        match self.current {
            Some((_, current)) if current == ticket => {
                self.current = None;
                true
            }
            _ => {
                trace!(?ticket, "Ignoring stale timer");
                false
            }
        }
    }

    /// Whether a timer is live
    pub fn is_armed(&self) -> bool {
        self.current.is_some()
    }
}

/// Lifecycle state plus timer slot of one timing instance
#[derive(Debug)]
pub(crate) struct Lifecycle<H: TimerHost> {
    pub(crate) state: TimingState,
    pub(crate) slot: TimerSlot<H>,
    pub(crate) disposed: bool,
}

impl<H: TimerHost> Lifecycle<H> {
    pub(crate) fn new(host: H) -> Self {
        Self {
            state: TimingState::Idle,
            slot: TimerSlot::new(host),
            disposed: false,
        }
    }

    /// Apply `input`; returns `true` when the caller must schedule a timer
    pub(crate) fn step(&mut self, input: TimingInput) -> bool {
        match self.state.transition(&input) {
            Ok((next, action)) => {
                self.state = next;
                if input == TimingInput::Stop {
                    self.disposed = true;
                }
                match action {
                    TimerAction::Schedule => true,
                    TimerAction::Cancel => {
                        self.slot.cancel();
                        false
                    }
                    TimerAction::Keep => false,
                }
            }
            Err(e) => {
                warn!(error = %e, "Ignoring timing input");
                false
            }
        }
    }
}
