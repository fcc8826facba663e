//! Entity identifier type
//!
//! Every entity in the store is addressed by exactly one `Identifier`.
//!
//! ## Structure
//!
//! - `name`: caller-chosen name of the logical object
//! - `kind`: optional namespace separating entity types (`"User"`, `"Order"`)
//!
//! Two identifiers are equal iff both attributes are equal, so
//! `Identifier::new("alice")` and `Identifier::with_kind("User", "alice")`
//! address different entities.
//!
//! ## Usage
//!
//! ```
//! use lightning_core::Identifier;
//!
//! let model = Identifier::new("Model");
//! let user = Identifier::with_kind("User", "alice");
//!
//! assert_eq!(model.name(), "Model");
//! assert_eq!(user.kind(), Some("User"));
//! assert_eq!(user.to_string(), "User:alice");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key naming exactly one logical entity
///
/// ## Invariants
///
/// - Immutable after construction
/// - Equality, ordering and hashing cover all attributes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identifier {
    kind: Option<String>,
    name: String,
}

impl Identifier {
    /// Create an identifier without a kind
    pub fn new(name: impl Into<String>) -> Self {
        Identifier {
            kind: None,
            name: name.into(),
        }
    }

    /// Create an identifier namespaced by `kind`
    pub fn with_kind(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Identifier {
            kind: Some(kind.into()),
            name: name.into(),
        }
    }

    /// Entity name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity kind, if namespaced
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Check if this identifier carries a kind
    pub fn has_kind(&self) -> bool {
        self.kind.is_some()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{}:{}", kind, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::new(name)
    }
}
