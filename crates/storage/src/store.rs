//! EntityStore: registry of entities by identifier
//!
//! # Design
//!
//! - DashMap keyed by `Identifier`: sharded, only the target shard is locked
//! - Instantiate runs through the map's entry API, so two callers racing on
//!   the same identifier always end up with the same entity
//! - The store owns every entity; callers get `Entity` handles sharing it
//!
//! # Thread Safety
//!
//! All operations are thread-safe:
//! - get(): read lock on one shard
//! - instantiate_entity(): write lock on one shard, only on first creation
//! - Different identifiers in different shards never contend
//!
//! # Example
//!
//! ```
//! use lightning_core::{Identifier, Value, Version};
//! use lightning_storage::EntityStore;
//!
//! let store = EntityStore::new();
//! let id = Identifier::new("Model");
//!
//! let entity = store.instantiate_entity(&id);
//! entity.get("name").set_value("darius", Version::new(1)).unwrap();
//!
//! assert_eq!(store.get(&id).unwrap(), entity);
//! assert_eq!(entity.get("name").get_value().unwrap(), Value::from("darius"));
//! ```

use crate::config::StoreConfig;
use crate::entity::Entity;
use dashmap::DashMap;
use lightning_core::{Error, Identifier, Result};
use std::sync::Arc;
use tracing::debug;

/// Registry holding at most one entity per identifier
#[derive(Debug)]
pub struct EntityStore {
    entities: DashMap<Identifier, Entity>,
    config: Arc<StoreConfig>,
}

impl EntityStore {
    /// Create an empty store with the default configuration
    pub fn new() -> Self {
        Self {
            entities: DashMap::new(),
            config: Arc::new(StoreConfig::default()),
        }
    }

    /// Create an empty store with `config`
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the configuration does not validate.
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entities: DashMap::new(),
            config: Arc::new(config),
        })
    }

    /// Configuration shared by every entity of this store
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Return the entity for `identifier`, creating it if absent
    ///
    /// Never resets an existing entity: calling this again returns the same
    /// entity with its fields intact.
    pub fn instantiate_entity(&self, identifier: &Identifier) -> Entity {
        if let Some(existing) = self.entities.get(identifier) {
            return existing.value().clone();
        }

        self.entities
            .entry(identifier.clone())
            .or_insert_with(|| {
                let entity = Entity::new(identifier.clone(), Arc::clone(&self.config));
                debug!(
                    target: "lightning::store",
                    identifier = %identifier,
                    id = %entity.id(),
                    "Entity instantiated"
                );
                entity
            })
            .value()
            .clone()
    }

    /// Get the entity registered for `identifier`
    ///
    /// # Errors
    ///
    /// `EntityNotFound` if nothing was instantiated under `identifier`.
    pub fn get(&self, identifier: &Identifier) -> Result<Entity> {
        self.entities
            .get(identifier)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::EntityNotFound(identifier.clone()))
    }

    /// Unregister the entity for `identifier` and return it
    ///
    /// Handles already held keep working on the detached entity. A later
    /// `instantiate_entity` creates a new, distinct entity.
    pub fn remove(&self, identifier: &Identifier) -> Result<Entity> {
        let (_, entity) = self
            .entities
            .remove(identifier)
            .ok_or_else(|| Error::EntityNotFound(identifier.clone()))?;
        debug!(
            target: "lightning::store",
            identifier = %identifier,
            id = %entity.id(),
            "Entity removed"
        );
        Ok(entity)
    }

    /// Check if an entity is registered for `identifier`
    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.entities.contains_key(identifier)
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if no entity is registered
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<Identifier> {
        let mut ids: Vec<Identifier> = self.entities.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
