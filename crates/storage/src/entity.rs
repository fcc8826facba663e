//! Entity: a named collection of versioned fields
//!
//! An entity is owned by the store and reached through exactly one
//! `Identifier`. Callers hold `Entity` handles; clones share the same
//! underlying entity, and equality is identity of that entity.
//!
//! Fields are created on first access (`get`), so there is no separate
//! declaration step. The field map is guarded by its own lock; field writes
//! take only the lock of the field being written.

use crate::config::StoreConfig;
use crate::field::Field;
use lightning_core::{Identifier, Value, Versioned};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

struct EntityInner {
    id: Uuid,
    identifier: Identifier,
    config: Arc<StoreConfig>,
    fields: RwLock<FxHashMap<String, Field>>,
}

/// Handle to a store-owned entity
#[derive(Clone)]
pub struct Entity {
    inner: Arc<EntityInner>,
}

impl Entity {
    pub(crate) fn new(identifier: Identifier, config: Arc<StoreConfig>) -> Self {
        Entity {
            inner: Arc::new(EntityInner {
                id: Uuid::new_v4(),
                identifier,
                config,
                fields: RwLock::new(FxHashMap::default()),
            }),
        }
    }

    /// Identifier this entity is registered under
    pub fn identifier(&self) -> &Identifier {
        &self.inner.identifier
    }

    /// Random id assigned at creation
    ///
    /// Distinguishes an entity from a later one re-created under the same
    /// identifier after removal.
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Get the field `name`, creating an empty one on first access
    pub fn get(&self, name: &str) -> Field {
        if let Some(field) = self.inner.fields.read().get(name) {
            return field.clone();
        }

        let mut fields = self.inner.fields.write();
        fields
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(
                    target: "lightning::store",
                    entity = %self.inner.identifier,
                    field = name,
                    "Field created"
                );
                Field::new(name, Arc::clone(&self.inner.config))
            })
            .clone()
    }

    /// Get the field `name` without creating it
    pub fn try_get(&self, name: &str) -> Option<Field> {
        self.inner.fields.read().get(name).cloned()
    }

    /// Check if the field `name` was ever addressed
    pub fn contains_field(&self, name: &str) -> bool {
        self.inner.fields.read().contains_key(name)
    }

    /// Number of fields (initialized or not)
    pub fn field_count(&self) -> usize {
        self.inner.fields.read().len()
    }

    /// Field names, sorted
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.fields.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Current value of every initialized field, by name
    ///
    /// Each entry is read atomically; the map as a whole is not a
    /// point-in-time snapshot under concurrent writers.
    pub fn snapshot(&self) -> BTreeMap<String, Versioned<Value>> {
        self.inner
            .fields
            .read()
            .iter()
            .filter_map(|(name, field)| field.get_versioned().ok().map(|v| (name.clone(), v)))
            .collect()
    }

    /// Check if both handles refer to the same entity
    pub fn same_entity(&self, other: &Entity) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.same_entity(other)
    }
}

impl Eq for Entity {}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.inner.id)
            .field("identifier", &self.inner.identifier)
            .field("fields", &self.field_count())
            .finish()
    }
}
