// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resolvable Values
//!
//! A [`Resolvable<T>`] is either a literal value or a zero-argument producer
//! that yields one when resolved. It is the input type of every derivation
//! and of the interval cadence.
//!
//! ```text
//! Resolvable<T> = Literal(T) | Producer(() → T)
//! ```
//!
//! # Resolution Rules
//!
//! - A literal resolves to a clone of itself, with no side effects.
//! - A producer is invoked exactly once per `resolve` call. The engine never
//!   caches its output; use [`crate::memo::Memo`] for that.
//! - Producer failures are forwarded unchanged to the caller of `resolve`.
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_hooks::resolvable::{resolve, Resolvable};
//!
//! let fixed = Resolvable::literal(5.0);
//! let live = Resolvable::from_fn(|| sensor.read());
//!
//! assert_eq!(resolve(&fixed)?, 5.0);
//! let reading = resolve(&live)?;
//! ```

pub mod validate;

use crate::errors::{HookError, HookResult};
use std::fmt::{self, Debug};
use std::sync::Arc;

pub use validate::{
    resolve_number, resolve_numbers, validate_number, validate_number_with, NumberPolicy,
    NumericInput,
};

/// Shared producer function
pub type ProducerFn<T> = Arc<dyn Fn() -> HookResult<T> + Send + Sync>;

/// A literal value or a function producing one
pub enum Resolvable<T> {
    /// Fixed value
    Literal(T),
    /// Function invoked on every resolution
    Producer(ProducerFn<T>),
}

impl<T> Resolvable<T> {
    /// Wrap a fixed value
    pub fn literal(value: T) -> Self {
        Resolvable::Literal(value)
    }

    /// Wrap an infallible producer
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Resolvable::Producer(Arc::new(move || Ok(f())))
    }

    /// Wrap a producer that may fail
    ///
    /// The producer's error is surfaced as [`HookError::Producer`] without
    /// being inspected or replaced.
    pub fn try_from_fn<F>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<T> + Send + Sync + 'static,
    {
        Resolvable::Producer(Arc::new(move || f().map_err(HookError::Producer)))
    }

    /// Whether this is a literal value
    pub fn is_literal(&self) -> bool {
        matches!(self, Resolvable::Literal(_))
    }

    /// Whether both are the same producer (pointer identity)
    ///
    /// Literals are never pointer-equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Resolvable::Producer(a), Resolvable::Producer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: Clone> Resolvable<T> {
    /// Resolve to a concrete value
    pub fn resolve(&self) -> HookResult<T> {
        match self {
            Resolvable::Literal(value) => Ok(value.clone()),
            Resolvable::Producer(producer) => producer(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Resolvable<T> {
    /// Transform the resolved value
    ///
    /// Literals are mapped eagerly; producers are wrapped so `f` runs on each
    /// resolution.
    pub fn map<U, F>(self, f: F) -> Resolvable<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        match self {
            Resolvable::Literal(value) => Resolvable::Literal(f(value)),
            Resolvable::Producer(producer) => {
                Resolvable::Producer(Arc::new(move || producer().map(&f)))
            }
        }
    }

    /// Combine two resolvables with a binary function
    ///
    /// The result is a literal only when both sides are literals.
    pub fn zip_with<U, V, F>(self, other: Resolvable<U>, f: F) -> Resolvable<V>
    where
        U: Clone + Send + Sync + 'static,
        V: 'static,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        match (self, other) {
            (Resolvable::Literal(a), Resolvable::Literal(b)) => Resolvable::Literal(f(a, b)),
            (left, right) => Resolvable::Producer(Arc::new(move || {
                let a = left.resolve()?;
                let b = right.resolve()?;
                Ok(f(a, b))
            })),
        }
    }
}

impl<T: Clone> Clone for Resolvable<T> {
    fn clone(&self) -> Self {
        match self {
            Resolvable::Literal(value) => Resolvable::Literal(value.clone()),
            Resolvable::Producer(producer) => Resolvable::Producer(Arc::clone(producer)),
        }
    }
}

impl<T: Debug> Debug for Resolvable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolvable::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Resolvable::Producer(_) => write!(f, "Producer<{}>", std::any::type_name::<T>()),
        }
    }
}

impl<T> From<T> for Resolvable<T> {
    fn from(value: T) -> Self {
        Resolvable::Literal(value)
    }
}

/// Resolve a single input
pub fn resolve<T: Clone>(input: &Resolvable<T>) -> HookResult<T> {
    input.resolve()
}

/// Resolve every input in order
///
/// Stops at the first failure and reports its index.
pub fn resolve_all<T: Clone>(inputs: &[Resolvable<T>]) -> HookResult<Vec<T>> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| input.resolve().map_err(|e| HookError::at(index, e)))
        .collect()
}
