//! Version identifier type
//!
//! Every accepted field write is stamped with a version. The store never
//! generates versions: callers supply them from their own logical clock and
//! the store only compares them.
//!
//! ## Comparison
//!
//! Versions are totally ordered by their numeric value. A field accepts a
//! write only if its version is strictly greater than the stored one
//! (except for the first write, which is accepted at any version).

use serde::{Deserialize, Serialize};

/// Caller-supplied write version
///
/// ## Invariants
///
/// - Totally ordered
/// - The version stored in a field never decreases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// Version of a field that was never written
    pub const ZERO: Version = Version(0);

    /// Create a version
    pub const fn new(v: u64) -> Self {
        Version(v)
    }

    /// Get the numeric value
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Check if this version is zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether a write stamped `self` supersedes `current`
    #[inline]
    pub fn supersedes(&self, current: Version) -> bool {
        *self > current
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u64> for Version {
    fn from(v: u64) -> Self {
        Version(v)
    }
}

impl From<Version> for u64 {
    fn from(v: Version) -> Self {
        v.0
    }
}

// ============================================================================
// Tests
// ============================================================================
