//! Value Module
//!
//! The two data shapes that cross the binding layer:
//!
//! - [`Value`]: one decoded reply value, as produced by the protocol decoder
//! - [`Arg`]: one command argument, as consumed by the command encoder
//!
//! ## Reply Shapes
//! ```text
//! Nil                      absent value ("skip", never an error)
//! Bulk(bytes)              byte string
//! Int(i64)                 integer reply
//! Array([Value, ...])      nested sequence
//! Error(message)           error reply
//! ```

mod arg;

pub use arg::{Arg, ToArg};

use bytes::Bytes;

/// A decoded reply value
///
/// Immutable once built; the binding layer only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// Null reply
    #[default]
    Nil,

    /// Bulk (byte) string reply
    Bulk(Bytes),

    /// Integer reply
    Int(i64),

    /// Multi-bulk (array) reply
    Array(Vec<Value>),

    /// Error reply carrying the server's message
    Error(String),
}

impl Value {
    /// Create a bulk value from anything byte-like
    pub fn bulk(bytes: impl AsRef<[u8]>) -> Self {
        Value::Bulk(Bytes::copy_from_slice(bytes.as_ref()))
    }

    /// Human readable name of the value's kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bulk(_) => "bulk string",
            Value::Int(_) => "integer",
            Value::Array(_) => "array",
            Value::Error(_) => "error",
        }
    }

    /// Check if this is the null reply
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Get the payload of a bulk value
    pub fn as_bulk(&self) -> Option<&[u8]> {
        match self {
            Value::Bulk(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::bulk(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bulk(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::bulk(bytes)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bulk(Bytes::from(bytes))
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::Bulk(bytes)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}
