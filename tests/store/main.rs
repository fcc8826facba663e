//! Entity Store Integration Tests
//!
//! Exercises the public surface end to end: identifier resolution, entity
//! lifecycle, field versioning, value conversions and concurrent access.

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod versioning;
