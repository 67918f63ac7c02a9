// Copyright (c) 2025 - Cowboy AI, Inc.
//! Finite State Machine Abstractions
//!
//! Generic, pure state machine types. Transitions are deterministic functions
//! with no side effects; the caller performs whatever the output describes.
//!
//! # Mealy Machine
//!
//! Output depends on both current state and input:
//! ```text
//! (State, Input) → (State, Output)
//! ```
//!
//! The timing facility uses a Mealy machine whose output is the
//! [`TimerAction`] to apply to the instance's timer slot.
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_hooks::state_machine::*;
//!
//! let (next, action) = TimingState::Idle.transition(&TimingInput::Arm { restart: true })?;
//! assert_eq!(next, TimingState::Scheduled);
//! assert_eq!(action, TimerAction::Schedule);
//! ```

pub mod timing_lifecycle;

pub use timing_lifecycle::{TimerAction, TimingInput, TimingState};

/// Result of a state transition
pub type TransitionResult<S> = Result<S, TransitionError>;

/// Errors that can occur during state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Transition from current state with the given input is not allowed
    #[error("Invalid transition from {from} on {input}")]
    InvalidTransition { from: String, input: String },
}

/// Trait for finite state machines
///
/// Implement this trait to define a state machine with typed states,
/// inputs, and outputs.
pub trait StateMachine: Sized + Clone {
    /// Input type that triggers transitions
    type Input;

    /// Output type produced by transitions (use () if none)
    type Output;

    /// Attempt to transition to a new state given an input
    ///
    /// # Returns
    /// - Ok((new_state, output)) if transition is valid
    /// - Err(TransitionError) if transition is invalid
    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)>;
}
