//! Contract types for API stability
//!
//! This module contains the types that define the store's public contract:
//!
//! 1. **Addressable**: Every entity has a stable identity via `Identifier`
//! 2. **Versioned**: Every accepted write carries a caller-supplied `Version`,
//!    and versioned reads return `Versioned<T>`
//!
//! ## Module Structure
//!
//! - `identifier`: Entity addressing
//! - `version`: Write version stamps
//! - `versioned`: Generic versioned wrapper
//! - `versioned_history`: Newest-first history of versioned values
//!
//! ## Usage
//!
//! ```
//! use lightning_core::contract::{Identifier, Version, Versioned, VersionedHistory};
//! ```

pub mod identifier;
pub mod version;
pub mod versioned;
pub mod versioned_history;

// Re-exports
pub use identifier::Identifier;
pub use version::Version;
pub use versioned::Versioned;
pub use versioned_history::VersionedHistory;
