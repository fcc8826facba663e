//! Shared test utilities for integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Arc;

pub use lightning::{
    Entity, EntityStore, Error, Field, Identifier, StaleWritePolicy, StoreConfig, Value,
    ValueTag, Version, WriteOutcome,
};

/// Store with the default configuration, shared across threads.
pub fn shared_store() -> Arc<EntityStore> {
    Arc::new(EntityStore::new())
}

/// Store that drops stale writes instead of failing them.
pub fn ignoring_store() -> EntityStore {
    EntityStore::with_config(StoreConfig::default().with_stale_writes(StaleWritePolicy::Ignore))
        .expect("valid config")
}

/// Shorthand for `Version::new`.
pub fn v(n: u64) -> Version {
    Version::new(n)
}

/// Instantiate `name` and return its field `field`.
pub fn field_of(store: &EntityStore, name: &str, field: &str) -> Field {
    store.instantiate_entity(&Identifier::new(name)).get(field)
}
