// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reactive hook primitives for the Composable Information Machine
//!
//! Two independent facilities, free of any UI framework:
//!
//! - **Resolvable values**: inputs that are either literals or producer
//!   functions ([`resolvable`]), validated and fed to pure derivations
//!   ([`derive`]) whose results are memoized by dependency ([`memo`]).
//! - **Timing control**: throttle, debounce and interval loops with
//!   pause/resume/cancel, driven by a pluggable timer host ([`timing`]) and
//!   a pure lifecycle state machine ([`state_machine`]).

pub mod derive;
pub mod errors;
pub mod memo;
pub mod resolvable;
pub mod state_machine;
pub mod timing;

// Re-export commonly used types
pub use errors::{ErrorKind, HookError, HookResult};
pub use memo::{Dependency, Derived, Memo};
pub use resolvable::{resolve, resolve_all, NumberPolicy, Resolvable};
pub use state_machine::TimingState;
pub use timing::{
    debounce, interval_loop, throttle, Debounce, IntervalLoop, IntervalOptions, ManualHost,
    Throttle, TimerHost, TimingConfig, TokioHost,
};
