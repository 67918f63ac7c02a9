// Copyright (c) 2025 - Cowboy AI, Inc.
//! Explicit fallbacks for callers that prefer a default over an error
//!
//! The swallowed error is logged at `warn` level so it stays visible.

use crate::errors::HookResult;
use tracing::warn;

/// Return the value, or `fallback` if the derivation failed
pub fn recover_with<T>(result: HookResult<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, kind = ?e.kind(), "Derivation failed, using fallback value");
            fallback
        }
    }
}

/// Return the value, or compute a fallback from the error
pub fn recover_with_else<T, F>(result: HookResult<T>, fallback: F) -> T
where
    F: FnOnce(&crate::errors::HookError) -> T,
{
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, kind = ?e.kind(), "Derivation failed, computing fallback value");
            fallback(&e)
        }
    }
}
