// Copyright (c) 2025 - Cowboy AI, Inc.
//! Numeric Validation
//!
//! Numeric derivations only accept finite, non-NaN numbers by default.
//! Rounding derivations may opt into passing ±∞ through unchanged with
//! [`NumberPolicy::AllowInfinite`]; the choice is always explicit at the
//! call site.

use super::Resolvable;
use crate::errors::{HookError, HookResult};
use serde::{Deserialize, Serialize};

/// Which non-finite values a derivation accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Reject NaN and ±∞
    #[default]
    Finite,
    /// Reject NaN, pass ±∞ through
    AllowInfinite,
}

/// Values that may or may not hold a number
pub trait NumericInput {
    /// Numeric reading of the value, `None` when it is not a number
    fn as_number(&self) -> Option<f64>;

    /// Short rendering used in error messages
    fn describe(&self) -> String;
}

macro_rules! numeric_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumericInput for $ty {
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

numeric_primitive!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl NumericInput for serde_json::Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            serde_json::Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<V: NumericInput + ?Sized> NumericInput for &V {
    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Accept only finite, non-NaN numbers
pub fn validate_number<V: NumericInput + ?Sized>(value: &V) -> HookResult<f64> {
    validate_number_with(value, NumberPolicy::Finite)
}

/// Validate a number under an explicit policy
pub fn validate_number_with<V: NumericInput + ?Sized>(
    value: &V,
    policy: NumberPolicy,
) -> HookResult<f64> {
    let number = value.as_number().ok_or_else(|| {
        HookError::InvalidInput(format!("expected a number, got {}", value.describe()))
    })?;

    if number.is_nan() {
        return Err(HookError::InvalidInput("NaN is not a valid number".to_string()));
    }
    if number.is_infinite() && policy == NumberPolicy::Finite {
        return Err(HookError::InvalidInput(format!(
            "{number} is not a finite number"
        )));
    }
    Ok(number)
}

/// Resolve an input and validate it as a number
pub fn resolve_number<V>(input: &Resolvable<V>, policy: NumberPolicy) -> HookResult<f64>
where
    V: NumericInput + Clone,
{
    let value = input.resolve()?;
    validate_number_with(&value, policy)
}

/// Resolve and validate every input in order, failing at the first bad one
pub fn resolve_numbers<V>(inputs: &[Resolvable<V>], policy: NumberPolicy) -> HookResult<Vec<f64>>
where
    V: NumericInput + Clone,
{
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| resolve_number(input, policy).map_err(|e| HookError::at(index, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_accepts_finite_numbers() {
        assert_eq!(validate_number(&3.5).unwrap(), 3.5);
        assert_eq!(validate_number(&-7i32).unwrap(), -7.0);
        assert_eq!(validate_number(&json!(12)).unwrap(), 12.0);
    }

    #[test]
    fn test_rejects_nan_and_infinity_by_default() {
        assert_eq!(validate_number(&f64::NAN).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(validate_number(&f64::INFINITY).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_allow_infinite_policy() {
        let value = validate_number_with(&f64::NEG_INFINITY, NumberPolicy::AllowInfinite).unwrap();
        assert_eq!(value, f64::NEG_INFINITY);
        assert!(validate_number_with(&f64::NAN, NumberPolicy::AllowInfinite).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_json() {
        let err = validate_number(&json!("12")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: expected a number, got \"12\"");
        assert!(validate_number(&json!(null)).is_err());
    }

    #[test]
    fn test_resolve_numbers_indexes_failure() {
        let inputs = vec![
            Resolvable::literal(1.0),
            Resolvable::literal(2.0),
            Resolvable::from_fn(|| f64::NAN),
        ];
        let err = resolve_numbers(&inputs, NumberPolicy::Finite).unwrap_err();
        assert_eq!(err.index(), Some(2));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
