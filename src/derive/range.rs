// Copyright (c) 2025 - Cowboy AI, Inc.
//! Range Derivations
//!
//! Clamping into an interval and linear projection between intervals.

use super::finite_all;
use crate::errors::{HookError, HookResult};

/// Restrict `value` to `[min, max]`
///
/// # Rules
/// - All arguments must be finite
/// - `min <= max`, otherwise [`HookError::InvalidDomain`]
/// - A value inside the interval is returned unchanged
pub fn clamp(value: f64, min: f64, max: f64) -> HookResult<f64> {
    finite_all(&[value, min, max])?;
    if min > max {
        return Err(HookError::domain(
            "clamp",
            format!("min {min} is greater than max {max}"),
        ));
    }
    Ok(value.clamp(min, max))
}

/// Map `value` linearly from the `from` interval onto the `to` interval
///
/// ```text
/// to.0 + (value - from.0) * (to.1 - to.0) / (from.1 - from.0)
/// ```
///
/// # Rules
/// - All arguments must be finite
/// - The source interval must be non-degenerate: `from.0 < from.1`
/// - `value` must lie within `[from.0, from.1]`, otherwise
///   [`HookError::OutOfRange`]
/// - The target interval may be reversed (`to.0 > to.1`) to invert the mapping
pub fn projection(value: f64, from: (f64, f64), to: (f64, f64)) -> HookResult<f64> {
    finite_all(&[value, from.0, from.1, to.0, to.1])?;

    let (from_min, from_max) = from;
    if from_min >= from_max {
        return Err(HookError::domain(
            "projection",
            format!("source interval [{from_min}, {from_max}] is empty or degenerate"),
        ));
    }
    if value < from_min || value > from_max {
        return Err(HookError::OutOfRange {
            value,
            min: from_min,
            max: from_max,
        });
    }

    let (to_min, to_max) = to;
    Ok(to_min + (value - from_min) * (to_max - to_min) / (from_max - from_min))
}
