// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rounding Derivations
//!
//! `ceil`, `floor`, `round` and `trunc` take a [`NumberPolicy`]. Under
//! [`NumberPolicy::AllowInfinite`] an infinite input is returned unchanged;
//! under [`NumberPolicy::Finite`] it is rejected.

use crate::errors::{HookError, HookResult};
use crate::resolvable::{validate_number, validate_number_with, NumberPolicy};

/// Absolute value of a finite number
pub fn abs(value: f64) -> HookResult<f64> {
    Ok(validate_number(&value)?.abs())
}

/// Smallest integer greater than or equal to `value`
pub fn ceil(value: f64, policy: NumberPolicy) -> HookResult<f64> {
    Ok(validate_number_with(&value, policy)?.ceil())
}

/// Largest integer less than or equal to `value`
pub fn floor(value: f64, policy: NumberPolicy) -> HookResult<f64> {
    Ok(validate_number_with(&value, policy)?.floor())
}

/// Nearest integer, halfway cases rounded away from zero
pub fn round(value: f64, policy: NumberPolicy) -> HookResult<f64> {
    Ok(validate_number_with(&value, policy)?.round())
}

/// Integer part of `value`
pub fn trunc(value: f64, policy: NumberPolicy) -> HookResult<f64> {
    Ok(validate_number_with(&value, policy)?.trunc())
}

/// Round to a fixed number of decimal places
///
/// # Rules
/// - `value` must be finite
/// - `digits` above 15 exceeds `f64` precision and is rejected
pub fn round_to(value: f64, digits: u32) -> HookResult<f64> {
    let value = validate_number(&value)?;
    if digits > 15 {
        return Err(HookError::domain(
            "round_to",
            format!("{digits} decimal places exceed f64 precision"),
        ));
    }

    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return Ok(value);
    }
    Ok(scaled.round() / factor)
}
