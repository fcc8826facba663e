//! Storage layer for Lightning
//!
//! This crate implements the in-memory entity store:
//! - EntityStore: DashMap registry, at most one entity per identifier
//! - Entity: get-or-create map of named fields
//! - Field: versioned slot enforcing the strictly-increasing write rule
//! - VersionChain: bounded newest-first history behind each field
//! - StoreConfig: stale write policy and history depth
//!
//! # Concurrency
//!
//! Structural operations lock one shard of the identifier map or one
//! entity's field map. Field writes lock only the written field.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod config;
pub mod entity;
pub mod field;
pub mod store;

pub use chain::VersionChain;
pub use config::{StaleWritePolicy, StoreConfig, DEFAULT_HISTORY_DEPTH};
pub use entity::Entity;
pub use field::{Field, WriteOutcome};
pub use store::EntityStore;
