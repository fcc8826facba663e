//! Error types for the entity store
//!
//! This module defines every error the store can report to a host.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Recoverability
//!
//! `StaleWrite` is an expected outcome when several writers race on one
//! field. Callers check for it with [`Error::is_stale_write`] and decide
//! whether to retry with a fresher version or drop the write. No error
//! leaves store-wide state modified.

use crate::contract::{Identifier, Version};
use crate::value::ValueTag;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the entity store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tag name outside the enumerated value kinds
    #[error("Unknown value tag: {tag:?}")]
    UnknownTag {
        /// The name that failed to resolve
        tag: String,
    },

    /// Payload does not fit the domain of the requested tag
    #[error("Invalid payload for {tag}: {payload}")]
    InvalidPayloadForTag {
        /// Tag the payload was meant for
        tag: ValueTag,
        /// Rendering of the rejected payload
        payload: String,
    },

    /// Display string that is not of the form `Tag(payload)`
    #[error("Malformed value: {0:?}")]
    MalformedValue(String),

    /// Field read before any write was accepted
    #[error("Field '{field}' has no value")]
    FieldUninitialized {
        /// Field name
        field: String,
    },

    /// No entity registered under the identifier
    #[error("Entity not found: {0}")]
    EntityNotFound(Identifier),

    /// Write carried a version not newer than the stored one
    #[error("Stale write to field '{field}': attempted {attempted}, current {current}")]
    StaleWrite {
        /// Field name
        field: String,
        /// Version stored in the field
        current: Version,
        /// Version the caller supplied
        attempted: Version,
    },

    /// Store configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an `UnknownTag` error
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Error::UnknownTag { tag: tag.into() }
    }

    /// Build an `InvalidPayloadForTag` error
    pub fn invalid_payload(tag: ValueTag, payload: impl std::fmt::Display) -> Self {
        Error::InvalidPayloadForTag {
            tag,
            payload: payload.to_string(),
        }
    }

    /// Build a `FieldUninitialized` error
    pub fn field_uninitialized(field: impl Into<String>) -> Self {
        Error::FieldUninitialized {
            field: field.into(),
        }
    }

    /// Build an `InvalidConfig` error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Error::InvalidConfig(reason.into())
    }

    /// True for a rejected stale write
    pub fn is_stale_write(&self) -> bool {
        matches!(self, Error::StaleWrite { .. })
    }

    /// True when a lookup found nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::EntityNotFound(_))
    }

    /// Whether a caller can reasonably act on this error and carry on
    ///
    /// Stale writes and lookups of absent entities or empty fields are
    /// ordinary outcomes. Conversion and configuration failures mean the
    /// caller passed bad input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::StaleWrite { .. }
                | Error::EntityNotFound(_)
                | Error::FieldUninitialized { .. }
        )
    }
}
