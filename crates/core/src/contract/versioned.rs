//! Generic versioned wrapper type
//!
//! Reads that need to know which write they observed return `Versioned<T>`.
//! The value and version travel together, so a reader never sees the value
//! of one write paired with the version of another.

use super::Version;
use serde::{Deserialize, Serialize};

/// A value with the version of the write that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioned<T> {
    /// The actual value
    pub value: T,

    /// Version identifier
    pub version: Version,
}

impl<T> Versioned<T> {
    /// Create a new versioned value
    pub fn new(value: T, version: Version) -> Self {
        Versioned { value, version }
    }

    /// Get a reference to the inner value
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume and return the inner value
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Get the version
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }
}

// ============================================================================
// Tests
// ============================================================================
