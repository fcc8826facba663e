//! Lightning - in-process entity store
//!
//! Lightning keeps structured entities in memory, one per identifier. Each
//! entity holds named fields, and each field holds a typed value stamped with
//! a caller-supplied version. A write only lands if its version is newer
//! than the field's, so concurrent writers resolve deterministically.
//!
//! # Quick Start
//!
//! ```
//! use lightning::{EntityStore, Identifier, Value, Version};
//!
//! let store = EntityStore::new();
//! let id = Identifier::new("Model");
//!
//! let entity = store.instantiate_entity(&id);
//! entity.get("name").set_value("darius", Version::new(1))?;
//!
//! assert_eq!(entity.get("name").get_value()?, Value::from("darius"));
//! assert_eq!(store.get(&id)?, entity);
//!
//! // Typed defaults and their external rendering
//! assert_eq!(Value::from_tag_name("Number")?.to_string(), "Number(42)");
//! # Ok::<(), lightning::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `lightning-core`: values, identifiers, versions, errors
//! - `lightning-storage`: the store, entities, fields and configuration

pub use lightning_core::*;
pub use lightning_storage::*;
