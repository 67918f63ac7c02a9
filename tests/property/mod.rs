// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Property suites for the resolvable value engine and the timing facility.

mod derivations;
mod memoization;
mod resolution;
mod timing;
