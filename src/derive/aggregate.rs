// Copyright (c) 2025 - Cowboy AI, Inc.
//! Aggregate Derivations over a list of numbers
//!
//! `max`, `min` and `average` have no meaningful value for an empty list and
//! fail with [`HookError::EmptyInput`]. `sum` of an empty list is `0`.

use super::{finite_all, non_empty};
use crate::errors::HookResult;

/// Largest value
pub fn max(values: &[f64]) -> HookResult<f64> {
    non_empty("max", values)?;
    finite_all(values)?;
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Smallest value
pub fn min(values: &[f64]) -> HookResult<f64> {
    non_empty("min", values)?;
    finite_all(values)?;
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Sum of all values
pub fn sum(values: &[f64]) -> HookResult<f64> {
    finite_all(values)?;
    Ok(values.iter().sum())
}

/// Arithmetic mean
pub fn average(values: &[f64]) -> HookResult<f64> {
    non_empty("average", values)?;
    let total = sum(values)?;
    Ok(total / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorKind, HookError};

    #[test]
    fn test_average() {
        assert_eq!(average(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_average_of_empty_fails() {
        let err = average(&[]).unwrap_err();
        assert!(matches!(err, HookError::EmptyInput { operation: "average" }));
    }

    #[test]
    fn test_max_min() {
        let values = [3.0, -1.5, 9.25, 0.0];
        assert_eq!(max(&values).unwrap(), 9.25);
        assert_eq!(min(&values).unwrap(), -1.5);
    }

    #[test]
    fn test_nan_element_is_indexed() {
        let err = max(&[1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.index(), Some(1));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        assert_eq!(sum(&[]).unwrap(), 0.0);
    }
}
