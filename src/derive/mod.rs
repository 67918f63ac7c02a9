// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Derivations
//!
//! Deterministic functions from resolved inputs to a result. Every function
//! validates its inputs, checks its preconditions and returns a typed error
//! on violation. None of them hold state.
//!
//! # Derivation Categories
//!
//! 1. **Rounding**: `abs`, `ceil`, `floor`, `round`, `trunc`, `round_to`
//! 2. **Aggregates**: `max`, `min`, `sum`, `average`
//! 3. **Ranges**: `clamp`, `projection`
//! 4. **Statistics**: `covariance`
//!
//! # Lenient Variants
//!
//! Derivations never substitute a default on failure. A caller that wants a
//! fallback wraps the call in [`recover_with`] or [`recover_with_else`]:
//!
//! ```rust,ignore
//! use cim_hooks::derive::{average, recover_with};
//!
//! let mean = recover_with(average(&samples), 0.0);
//! ```

pub mod aggregate;
pub mod lenient;
pub mod range;
pub mod rounding;
pub mod stats;

pub use aggregate::{average, max, min, sum};
pub use lenient::{recover_with, recover_with_else};
pub use range::{clamp, projection};
pub use rounding::{abs, ceil, floor, round, round_to, trunc};
pub use stats::covariance;

use crate::errors::{HookError, HookResult};
use crate::resolvable::validate_number;

/// Validate every value as finite, reporting the index of the first failure
pub(crate) fn finite_all(values: &[f64]) -> HookResult<()> {
    values
        .iter()
        .enumerate()
        .try_for_each(|(index, value)| {
            validate_number(value)
                .map(|_| ())
                .map_err(|e| HookError::at(index, e))
        })
}

/// Reject empty input for operations that need at least one value
pub(crate) fn non_empty(operation: &'static str, values: &[f64]) -> HookResult<()> {
    if values.is_empty() {
        return Err(HookError::EmptyInput { operation });
    }
    Ok(())
}
