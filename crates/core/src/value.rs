//! Value types for the entity store
//!
//! This module defines:
//! - Value: tagged union for every datum a field can hold
//! - ValueTag: the enumeration of value kinds and their external names
//!
//! ## Value Model
//!
//! | Tag | Payload | Canonical default |
//! |-----|---------|-------------------|
//! | String | UTF-8 text | `"world"` |
//! | Number | 64-bit signed integer | `42` |
//!
//! ### Type Rules
//!
//! - The tag fully determines the payload; there is no untagged access
//! - No implicit coercions: `String("42") != Number(42)`
//! - Values are replaced wholesale on write, never mutated in place
//!
//! ## External Representation
//!
//! Two formats cross the store boundary:
//! - the tag name (`"String"`, `"Number"`), resolved by [`Value::from_tag_name`]
//!   to the canonical default of that tag
//! - the display string `Tag(payload)`, produced by `Display` and parsed back
//!   by `FromStr`
//!
//! Adding a variant means extending [`ValueTag`], `Value::tag` and the payload
//! rendering in `Display`. Nothing else matches on the variants.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueTag {
    /// UTF-8 text
    String,
    /// 64-bit signed integer
    Number,
}

impl ValueTag {
    /// All tags (for iteration)
    pub const ALL: [ValueTag; 2] = [ValueTag::String, ValueTag::Number];

    /// Get all tags as a slice
    pub fn all() -> &'static [ValueTag] {
        &Self::ALL
    }

    /// External name of the tag
    pub const fn name(&self) -> &'static str {
        match self {
            ValueTag::String => "String",
            ValueTag::Number => "Number",
        }
    }

    /// Parse from external name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(ValueTag::String),
            "Number" => Some(ValueTag::Number),
            _ => None,
        }
    }

    /// Canonical instance of this tag
    pub fn default_value(&self) -> Value {
        match self {
            ValueTag::String => Value::String("world".to_string()),
            ValueTag::Number => Value::Number(42),
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ValueTag::from_name(s).ok_or_else(|| Error::unknown_tag(s))
    }
}

/// A typed datum held by a field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 string
    String(String),
    /// 64-bit signed integer
    Number(i64),
}

impl Value {
    /// Canonical instance for an external tag name
    ///
    /// Fails with `UnknownTag` for names outside [`ValueTag::ALL`].
    pub fn from_tag_name(name: &str) -> Result<Self> {
        Ok(name.parse::<ValueTag>()?.default_value())
    }

    /// Build a value of `tag` from an external JSON payload
    ///
    /// `String` needs a JSON string, `Number` needs a JSON integer that fits
    /// in `i64`. Anything else fails with `InvalidPayloadForTag`.
    pub fn construct(tag: ValueTag, payload: serde_json::Value) -> Result<Self> {
        match (tag, payload) {
            (ValueTag::String, serde_json::Value::String(s)) => Ok(Value::String(s)),
            (ValueTag::Number, serde_json::Value::Number(n)) => n
                .as_i64()
                .map(Value::Number)
                .ok_or_else(|| Error::invalid_payload(tag, n)),
            (tag, other) => Err(Error::invalid_payload(tag, other)),
        }
    }

    /// Build a value of `tag` from a plain text payload
    ///
    /// `Number` expects the integer exactly as `Display` renders it, so
    /// signs, leading zeros and `-0` are rejected; `String` takes the text
    /// as is.
    pub fn from_text(tag: ValueTag, text: &str) -> Result<Self> {
        match tag {
            ValueTag::String => Ok(Value::String(text.to_string())),
            ValueTag::Number => text
                .parse::<i64>()
                .ok()
                .filter(|n| n.to_string() == text)
                .map(Value::Number)
                .ok_or_else(|| Error::invalid_payload(tag, format!("{:?}", text))),
        }
    }

    /// Tag of this value
    pub const fn tag(&self) -> ValueTag {
        match self {
            Value::String(_) => ValueTag::String,
            Value::Number(_) => ValueTag::Number,
        }
    }

    /// Get the type name as a string
    pub const fn type_name(&self) -> &'static str {
        self.tag().name()
    }

    /// Check if this is a string value
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if this is a number value
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64 if this is a Number value
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders `Tag(payload)`, e.g. `String(world)` or `Number(42)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}({})", self.type_name(), s),
            Value::Number(n) => write!(f, "{}({})", self.type_name(), n),
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    /// Parse the display form back into a value
    ///
    /// The payload is everything between the first `(` and the final `)`,
    /// so `String(a(b))` yields the text `a(b)`.
    fn from_str(s: &str) -> Result<Self> {
        let open = s.find('(').ok_or_else(|| Error::MalformedValue(s.to_string()))?;
        let payload = s[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| Error::MalformedValue(s.to_string()))?;
        let tag: ValueTag = s[..open].parse()?;
        Value::from_text(tag, payload)
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => serde_json::Value::String(s),
            Value::Number(n) => serde_json::Value::Number(n.into()),
        }
    }
}
