//! Field: a named, versioned value slot inside an entity
//!
//! ## Write Rule
//!
//! A field starts empty at version 0. The first write is accepted at any
//! version. Every later write must carry a version strictly greater than the
//! stored one; otherwise the field is left untouched and the write is either
//! rejected with `StaleWrite` or reported as ignored, per
//! [`StaleWritePolicy`].
//!
//! The decision is a single comparison made under the field's write lock, so
//! racing writers resolve deterministically: the highest version wins no
//! matter the arrival order.
//!
//! ## Handles
//!
//! `Field` is a cheap handle (`Arc` inside). Clones refer to the same slot,
//! and equality is identity of that slot, never comparison of contents.

use crate::chain::VersionChain;
use crate::config::{StaleWritePolicy, StoreConfig};
use lightning_core::{Error, Result, Value, Version, Versioned, VersionedHistory};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Result of a write that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Write stored at this version
    Applied(Version),
    /// Write dropped under `StaleWritePolicy::Ignore`
    Ignored {
        /// Version the field kept
        current: Version,
    },
}

impl WriteOutcome {
    /// Check if the write was stored
    pub fn is_applied(&self) -> bool {
        matches!(self, WriteOutcome::Applied(_))
    }
}

struct FieldSlot {
    name: String,
    config: Arc<StoreConfig>,
    chain: RwLock<VersionChain>,
}

/// Handle to a field slot
#[derive(Clone)]
pub struct Field {
    slot: Arc<FieldSlot>,
}

impl Field {
    pub(crate) fn new(name: impl Into<String>, config: Arc<StoreConfig>) -> Self {
        Field {
            slot: Arc::new(FieldSlot {
                name: name.into(),
                config,
                chain: RwLock::new(VersionChain::new()),
            }),
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.slot.name
    }

    /// Current version, `Version::ZERO` before the first write
    pub fn version(&self) -> Version {
        self.slot
            .chain
            .read()
            .latest()
            .map_or(Version::ZERO, |e| e.version)
    }

    /// Check if any write was accepted
    pub fn is_initialized(&self) -> bool {
        !self.slot.chain.read().is_empty()
    }

    /// Current value
    ///
    /// # Errors
    ///
    /// `FieldUninitialized` if no write was ever accepted.
    pub fn get_value(&self) -> Result<Value> {
        self.get_versioned().map(Versioned::into_value)
    }

    /// Current value together with its version
    pub fn get_versioned(&self) -> Result<Versioned<Value>> {
        self.slot
            .chain
            .read()
            .latest()
            .cloned()
            .ok_or_else(|| Error::field_uninitialized(self.name()))
    }

    /// Store `value` at `version` if it supersedes the current version
    ///
    /// # Errors
    ///
    /// `StaleWrite` when the field already holds a value at a version
    /// greater than or equal to `version` and the policy is `Reject`.
    pub fn set_value(&self, value: impl Into<Value>, version: Version) -> Result<WriteOutcome> {
        let mut chain = self.slot.chain.write();

        if let Some(current) = chain.latest().map(|e| e.version) {
            if !version.supersedes(current) {
                return match self.slot.config.stale_writes {
                    StaleWritePolicy::Reject => {
                        debug!(
                            target: "lightning::field",
                            field = %self.slot.name,
                            %current,
                            attempted = %version,
                            "Rejected stale write"
                        );
                        Err(Error::StaleWrite {
                            field: self.slot.name.clone(),
                            current,
                            attempted: version,
                        })
                    }
                    StaleWritePolicy::Ignore => {
                        debug!(
                            target: "lightning::field",
                            field = %self.slot.name,
                            %current,
                            attempted = %version,
                            "Ignored stale write"
                        );
                        Ok(WriteOutcome::Ignored { current })
                    }
                };
            }
        }

        chain.push(Versioned::new(value.into(), version));
        chain.truncate(self.slot.config.history_depth);
        trace!(target: "lightning::field", field = %self.slot.name, %version, "Write applied");
        Ok(WriteOutcome::Applied(version))
    }

    /// Value in effect at `version`
    ///
    /// Versions before the first write read the first write. `None` if the
    /// field was never written or the matching entry was dropped from the
    /// retained history.
    pub fn value_at(&self, version: Version) -> Option<Value> {
        self.slot
            .chain
            .read()
            .get_at_version(version)
            .map(|e| e.value.clone())
    }

    /// Value of the first accepted write, kept regardless of history depth
    pub fn initial(&self) -> Option<Value> {
        self.slot.chain.read().first().map(|e| e.value.clone())
    }

    /// Retained writes, newest first
    pub fn history(&self) -> Option<VersionedHistory<Value>> {
        self.slot.chain.read().history()
    }

    /// Check if both handles refer to the same slot
    pub fn same_field(&self, other: &Field) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other)
    }
}

impl Eq for Field {}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.slot.chain.read();
        f.debug_struct("Field")
            .field("name", &self.slot.name)
            .field("current", &chain.latest())
            .finish()
    }
}

impl fmt::Display for Field {
    /// `name=Tag(payload)@vN`, or `name=<unset>` before the first write
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.chain.read().latest() {
            Some(entry) => write!(f, "{}={}@{}", self.slot.name, entry.value, entry.version),
            None => write!(f, "{}=<unset>", self.slot.name),
        }
    }
}
