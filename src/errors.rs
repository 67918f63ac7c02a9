// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for value resolution, derivations and timing control
//!
//! Every failure is raised synchronously at the point of resolution or
//! derivation. Callers that want a fallback instead of an error must opt in
//! through [`crate::derive::recover_with`].

use thiserror::Error;

/// Classification of a [`HookError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A resolved value failed type or domain validation
    InvalidInput,
    /// A derivation's parameter preconditions were violated
    InvalidDomain,
    /// An input lies outside its required interval
    OutOfRange,
    /// A timing cadence is not a positive finite number
    InvalidCadence,
    /// A producer function failed
    Producer,
}

/// Errors raised by the resolvable value engine and the timing facility
#[derive(Debug, Error)]
pub enum HookError {
    /// Value is not a finite number (or not a number at all)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An operation that needs at least one element received none
    #[error("Invalid input: {operation} requires at least one value")]
    EmptyInput { operation: &'static str },

    /// Derivation parameters violate the derivation's preconditions
    #[error("Invalid domain for {operation}: {reason}")]
    InvalidDomain {
        operation: &'static str,
        reason: String,
    },

    /// Value lies outside the declared interval
    #[error("Value {value} is out of range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    /// Resolved cadence is not a positive finite number of milliseconds
    #[error("Invalid cadence: {0} ms (expected a positive finite number)")]
    InvalidCadence(f64),

    /// Cadence is positive but shorter than the 1ns timer resolution
    #[error("Invalid cadence: {0} ms is below the 1 ns timer resolution")]
    CadenceTooSmall(f64),

    /// Failure of one element while resolving a list
    #[error("Element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<HookError>,
    },

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error raised by a producer function, forwarded unchanged
    #[error(transparent)]
    Producer(#[from] anyhow::Error),
}

impl HookError {
    /// Taxonomy kind of this error
    ///
    /// Indexed element failures report the kind of the wrapped error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HookError::InvalidInput(_)
            | HookError::EmptyInput { .. }
            | HookError::Configuration(_) => ErrorKind::InvalidInput,
            HookError::InvalidDomain { .. } => ErrorKind::InvalidDomain,
            HookError::OutOfRange { .. } => ErrorKind::OutOfRange,
            HookError::InvalidCadence(_) | HookError::CadenceTooSmall(_) => {
                ErrorKind::InvalidCadence
            }
            HookError::Element { source, .. } => source.kind(),
            HookError::Producer(_) => ErrorKind::Producer,
        }
    }

    /// Index of the failing element, if this error came from a list resolution
    pub fn index(&self) -> Option<usize> {
        match self {
            HookError::Element { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn at(index: usize, source: HookError) -> Self {
        HookError::Element {
            index,
            source: Box::new(source),
        }
    }

    pub(crate) fn domain(operation: &'static str, reason: impl Into<String>) -> Self {
        HookError::InvalidDomain {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result type for resolution, derivation and timing operations
pub type HookResult<T> = Result<T, HookError>;

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        HookError::Configuration(err.to_string())
    }
}
