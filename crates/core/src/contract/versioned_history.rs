//! Version history container
//!
//! `VersionedHistory<T>` wraps a non-empty `Vec<Versioned<T>>` ordered
//! newest-first. Users index into it: `h[0]` = latest, `h[1]` = previous,
//! `h.len()` = retained versions.

use super::{Version, Versioned};
use std::ops::Index;

/// A non-empty sequence of versioned values, ordered newest-first.
///
/// Returned by `Field::history()`.
///
/// # Example
///
/// ```ignore
/// let history = entity.get("name").history().unwrap();
/// let latest = &history[0];          // newest version
/// let previous = &history[1];        // one version back
/// println!("retained versions: {}", history.len());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedHistory<T> {
    /// Versions ordered newest-first. Always non-empty.
    versions: Vec<Versioned<T>>,
}

impl<T> VersionedHistory<T> {
    /// Create a new `VersionedHistory` from a list of versioned values.
    ///
    /// Returns `None` if the input is empty (field never written).
    /// The input must be ordered newest-first.
    pub fn new(versions: Vec<Versioned<T>>) -> Option<Self> {
        if versions.is_empty() {
            None
        } else {
            Some(Self { versions })
        }
    }

    /// Get a reference to the latest value.
    pub fn value(&self) -> &T {
        &self.versions[0].value
    }

    /// Get the version identifier of the latest entry.
    pub fn version(&self) -> Version {
        self.versions[0].version
    }

    /// Get the number of versions in the history.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T> Index<usize> for VersionedHistory<T> {
    type Output = Versioned<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.versions[index]
    }
}
