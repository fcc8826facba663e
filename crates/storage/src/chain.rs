//! Per-field version chain
//!
//! Every accepted write to a field lands at the front of its chain, so the
//! chain is ordered newest-first with strictly decreasing versions. Reads of
//! the current value hit the front; reads "as of" an older version scan back
//! until the first entry at or below the requested version.
//!
//! The chain is bounded: after each push the oldest entries beyond the
//! configured depth are dropped. The first accepted write is pinned apart
//! from the bounded window and survives truncation.

use lightning_core::{Value, Version, Versioned, VersionedHistory};
use std::collections::VecDeque;

/// Retained writes of one field, newest first
///
/// Uses VecDeque for O(1) push_front on every accepted write.
#[derive(Debug, Clone, Default)]
pub struct VersionChain {
    first: Option<Versioned<Value>>,
    versions: VecDeque<Versioned<Value>>,
}

impl VersionChain {
    /// Create an empty chain (field never written)
    pub fn new() -> Self {
        Self {
            first: None,
            versions: VecDeque::new(),
        }
    }

    /// Add a new version (must be newer than the current latest)
    #[inline]
    pub fn push(&mut self, entry: Versioned<Value>) {
        debug_assert!(
            self.latest().map_or(true, |l| entry.version > l.version),
            "version chain must stay strictly decreasing"
        );
        if self.first.is_none() {
            self.first = Some(entry.clone());
        }
        self.versions.push_front(entry);
    }

    /// Get the latest entry
    #[inline]
    pub fn latest(&self) -> Option<&Versioned<Value>> {
        self.versions.front()
    }

    /// Get the first entry ever pushed, even if truncated from the window
    #[inline]
    pub fn first(&self) -> Option<&Versioned<Value>> {
        self.first.as_ref()
    }

    /// Get the entry in effect at `max_version`
    ///
    /// The newest retained entry at or below `max_version`. Versions up to
    /// and including the first write resolve to the first write. Versions
    /// that fall in a truncated stretch of history resolve to `None`.
    pub fn get_at_version(&self, max_version: Version) -> Option<&Versioned<Value>> {
        if let Some(entry) = self.versions.iter().find(|e| e.version <= max_version) {
            return Some(entry);
        }
        self.first.as_ref().filter(|f| max_version <= f.version)
    }

    /// Drop the oldest retained entries so at most `depth` remain
    ///
    /// Always keeps the latest entry. The pinned first write is unaffected.
    pub fn truncate(&mut self, depth: usize) {
        self.versions.truncate(depth.max(1));
    }

    /// Number of versions in the retained window
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Copy of the retained window, newest first
    pub fn history(&self) -> Option<VersionedHistory<Value>> {
        VersionedHistory::new(self.versions.iter().cloned().collect())
    }
}
