//! Core types for Lightning
//!
//! This crate defines the foundational types shared by the store:
//! - Identifier: Key naming exactly one entity
//! - Version: Caller-supplied write stamp
//! - Versioned / VersionedHistory: Values paired with their versions
//! - Value / ValueTag: Tagged union of field data and its external names
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod contract;
pub mod error;
pub mod value;

// Re-export commonly used types
pub use error::{Error, Result};
pub use value::{Value, ValueTag};

// Re-export contract types at crate root for convenience
pub use contract::{Identifier, Version, Versioned, VersionedHistory};
