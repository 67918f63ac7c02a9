// Copyright (c) 2025 - Cowboy AI, Inc.
//! Statistical Derivations

use super::finite_all;
use crate::errors::{HookError, HookResult};

/// Sample covariance of two paired data sets (divisor `n - 1`)
///
/// # Rules
/// - Both sets must have the same length
/// - At least two pairs are required
/// - Every value must be finite
pub fn covariance(xs: &[f64], ys: &[f64]) -> HookResult<f64> {
    if xs.len() != ys.len() {
        return Err(HookError::domain(
            "covariance",
            format!("data sets differ in length ({} vs {})", xs.len(), ys.len()),
        ));
    }
    if xs.len() < 2 {
        return Err(HookError::domain(
            "covariance",
            format!("at least 2 paired samples required, got {}", xs.len()),
        ));
    }
    finite_all(xs)?;
    finite_all(ys)?;

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let co_moment: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    Ok(co_moment / (n - 1.0))
}
