// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timing Lifecycle State Machine
//!
//! Shared lifecycle of every throttle, debounce and interval instance.
//!
//! # States
//!
//! - Idle: no timer scheduled
//! - Scheduled: exactly one timer pending
//! - Paused: explicitly suspended, no timer pending, callback suppressed
//!
//! # Inputs
//!
//! - Arm: a value arrives (throttle/debounce) or the loop starts (interval)
//! - Fire: the pending timer fired
//! - Pause / Resume: explicit suspension
//! - Cancel: drop pending work, instance stays usable
//! - Stop: drop pending work, instance is disposed
//!
//! # Outputs
//!
//! The [`TimerAction`] the owner must apply to its timer slot.

use super::{StateMachine, TransitionError, TransitionResult};

/// Lifecycle state of a timing instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimingState {
    /// No timer scheduled
    #[default]
    Idle,
    /// One timer pending
    Scheduled,
    /// Suspended by an explicit pause
    Paused,
}

/// Lifecycle input (FSM input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingInput {
    /// New work arrived; `restart` replaces a pending timer (debounce)
    /// instead of keeping it (throttle)
    Arm { restart: bool },

    /// Pending timer fired; `rearm` when another window or tick follows
    Fire { rearm: bool },

    /// Explicit suspension
    Pause,

    /// Explicit resumption; `rearm` when there is work to schedule
    Resume { rearm: bool },

    /// Drop pending work
    Cancel,

    /// Drop pending work and dispose
    Stop,
}

/// What to do with the timer slot after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Schedule a new timer, replacing any pending one
    Schedule,
    /// Cancel the pending timer
    Cancel,
    /// Leave the slot as it is
    Keep,
}

impl StateMachine for TimingState {
    type Input = TimingInput;
    type Output = TimerAction;

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use TimingInput::*;
        use TimingState::*;

        match (self, input) {
            // Arming
            (Idle, Arm { .. }) => Ok((Scheduled, TimerAction::Schedule)),
            (Scheduled, Arm { restart: true }) => Ok((Scheduled, TimerAction::Schedule)),
            (Scheduled, Arm { restart: false }) => Ok((Scheduled, TimerAction::Keep)),
            (Paused, Arm { .. }) => Ok((Paused, TimerAction::Keep)),

            // Firing
            (Scheduled, Fire { rearm: true }) => Ok((Scheduled, TimerAction::Schedule)),
            (Scheduled, Fire { rearm: false }) => Ok((Idle, TimerAction::Keep)),
            (Idle | Paused, Fire { .. }) => Err(TransitionError::InvalidTransition {
                from: format!("{self:?}"),
                input: "Fire".to_string(),
            }),

            // Suspension
            (_, Pause) => Ok((Paused, TimerAction::Cancel)),
            (Paused, Resume { rearm: true }) => Ok((Scheduled, TimerAction::Schedule)),
            (Paused, Resume { rearm: false }) => Ok((Idle, TimerAction::Keep)),
            (Idle | Scheduled, Resume { .. }) => Ok((*self, TimerAction::Keep)),

            // Teardown
            (_, Cancel) | (_, Stop) => Ok((Idle, TimerAction::Cancel)),
        }
    }
}

impl TimingState {
    /// Whether a timer is pending
    pub fn is_scheduled(&self) -> bool {
        matches!(self, TimingState::Scheduled)
    }
}
