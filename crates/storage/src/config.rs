//! Store configuration
//!
//! The host builds a `StoreConfig` in code or parses one from TOML text it
//! loaded itself. The store never reads files.
//!
//! ```toml
//! # "reject" (default) or "ignore"
//! stale_writes = "reject"
//! history_depth = 16
//! ```

use lightning_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of accepted writes retained per field
pub const DEFAULT_HISTORY_DEPTH: usize = 16;

/// What a field does with a write whose version is not newer than its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleWritePolicy {
    /// Fail with `Error::StaleWrite`
    #[default]
    Reject,
    /// Drop the write and report `WriteOutcome::Ignored`
    Ignore,
}

/// Configuration shared by every entity and field of one store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Handling of stale writes
    #[serde(default)]
    pub stale_writes: StaleWritePolicy,
    /// Accepted writes retained per field (at least 1)
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

fn default_history_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            stale_writes: StaleWritePolicy::default(),
            history_depth: default_history_depth(),
        }
    }
}

impl StoreConfig {
    /// Set the stale write policy
    pub fn with_stale_writes(mut self, policy: StaleWritePolicy) -> Self {
        self.stale_writes = policy;
        self
    }

    /// Set the per-field history depth
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }

    /// Check the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `history_depth` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.history_depth == 0 {
            return Err(Error::invalid_config(
                "history_depth must be at least 1",
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML, unknown keys or values
    /// that fail [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: StoreConfig =
            toml::from_str(text).map_err(|e| Error::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the default config document with comments.
    pub fn default_toml() -> &'static str {
        r#"# Lightning store configuration
#
# Stale writes: "reject" (default) or "ignore"
#   "reject" = a write whose version is not newer fails with StaleWrite
#   "ignore" = such a write is dropped and reported as ignored
stale_writes = "reject"

# Accepted writes retained per field for historical reads (default: 16)
history_depth = 16
"#
    }
}
