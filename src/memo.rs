// Copyright (c) 2025 - Cowboy AI, Inc.
//! Memoized Derivations
//!
//! A [`Memo`] caches the result of a derivation together with the dependency
//! list it was computed from. The derivation runs again if and only if the
//! dependency list changes or the cache is explicitly invalidated.
//!
//! # Dependency Equality
//!
//! | Dependency          | Compared by                          |
//! |---------------------|--------------------------------------|
//! | integers, `bool`    | value                                |
//! | `f32`, `f64`        | bit pattern (NaN == NaN, 0.0 != -0.0) |
//! | `String`, `&str`    | value                                |
//! | `Arc<T>`, `Rc<T>`   | pointer                              |
//! | `Resolvable<T>`     | literal by value, producer by pointer |
//! | tuples, `Vec`, `Option` | element-wise                     |
//!
//! Errors are never cached: a failed computation leaves the previous entry
//! in place and the next call computes again.
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_hooks::memo::Derived;
//! use cim_hooks::derive::clamp;
//!
//! let mut clamped = Derived::new(|&(v, lo, hi): &(f64, f64, f64)| clamp(v, lo, hi));
//! assert_eq!(clamped.get((12.0, 0.0, 10.0))?, 10.0);
//! assert_eq!(clamped.get((12.0, 0.0, 10.0))?, 10.0); // cached
//! ```

use crate::errors::HookResult;
use crate::resolvable::Resolvable;
use std::rc::Rc;
use std::sync::Arc;

/// Equality used to decide whether a memoized value is stale
pub trait Dependency {
    /// Whether `other` is the same dependency as `self`
    fn same_as(&self, other: &Self) -> bool;
}

macro_rules! value_dependency {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dependency for $ty {
                fn same_as(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

value_dependency!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String
);

impl Dependency for f64 {
    fn same_as(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Dependency for f32 {
    fn same_as(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Dependency for &str {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: ?Sized> Dependency for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Dependency for Rc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: Dependency> Dependency for Resolvable<T> {
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Resolvable::Literal(a), Resolvable::Literal(b)) => a.same_as(b),
            _ => self.ptr_eq(other),
        }
    }
}

impl<T: Dependency> Dependency for Option<T> {
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_as(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Dependency> Dependency for Vec<T> {
    fn same_as(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same_as(b))
    }
}

macro_rules! tuple_dependency {
    ($(($($name:ident : $idx:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Dependency),+> Dependency for ($($name,)+) {
                fn same_as(&self, other: &Self) -> bool {
                    $(self.$idx.same_as(&other.$idx))&&+
                }
            }
        )*
    };
}

tuple_dependency!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
);

/// Cache of one derivation result keyed by its dependency list
#[derive(Debug)]
pub struct Memo<D, T> {
    cached: Option<(D, T)>,
    recomputes: u64,
}

impl<D, T> Default for Memo<D, T> {
    fn default() -> Self {
        Self {
            cached: None,
            recomputes: 0,
        }
    }
}

impl<D: Dependency, T: Clone> Memo<D, T> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `deps`, computing it if stale
    pub fn get<F>(&mut self, deps: D, compute: F) -> HookResult<T>
    where
        F: FnOnce(&D) -> HookResult<T>,
    {
        if let Some((previous, value)) = &self.cached {
            if previous.same_as(&deps) {
                return Ok(value.clone());
            }
        }

        let value = compute(&deps)?;
        self.recomputes += 1;
        self.cached = Some((deps, value.clone()));
        Ok(value)
    }

    /// Drop the cached value so the next `get` recomputes
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Cached value, if any, without computing
    pub fn peek(&self) -> Option<&T> {
        self.cached.as_ref().map(|(_, value)| value)
    }

    /// Number of successful computations so far
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}

/// Shared derivation function
pub type DeriveFn<D, T> = Box<dyn Fn(&D) -> HookResult<T> + Send + Sync>;

/// A memo bound to its derivation function
pub struct Derived<D, T> {
    compute: DeriveFn<D, T>,
    memo: Memo<D, T>,
}

impl<D: Dependency, T: Clone> Derived<D, T> {
    /// Bind a derivation function
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn(&D) -> HookResult<T> + Send + Sync + 'static,
    {
        Self {
            compute: Box::new(compute),
            memo: Memo::new(),
        }
    }

    /// Current result for `deps`
    pub fn get(&mut self, deps: D) -> HookResult<T> {
        let compute = &self.compute;
        self.memo.get(deps, |d| compute(d))
    }

    /// Force recomputation on the next `get`
    pub fn invalidate(&mut self) {
        self.memo.invalidate();
    }

    /// Number of successful computations so far
    pub fn recompute_count(&self) -> u64 {
        self.memo.recompute_count()
    }
}

impl<D, T> std::fmt::Debug for Derived<D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Derived")
            .field("recomputes", &self.memo.recomputes)
            .field("cached", &self.memo.cached.is_some())
            .finish()
    }
}
