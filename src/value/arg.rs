//! Command arguments
//!
//! Flattened struct fields become a sequence of these.

use bytes::Bytes;

use super::Value;

/// One argument of an outgoing command
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// No value; encoded as an empty bulk string
    Nil,
    Str(String),
    Bytes(Bytes),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),

    /// Sequence field; each element converted on its own
    Array(Vec<Arg>),

    /// Opaque reply value, passed through as-is
    Value(Value),
}

impl Arg {
    /// Render the argument the way a command encoder writes it on the wire
    ///
    /// Integers are decimal, booleans are `1`/`0`, floats use the shortest
    /// text that parses back to the same value.
    pub fn to_bulk(&self) -> Bytes {
        match self {
            Arg::Nil => Bytes::new(),
            Arg::Str(s) => Bytes::copy_from_slice(s.as_bytes()),
            Arg::Bytes(b) => b.clone(),
            Arg::Int(n) => Bytes::from(n.to_string()),
            Arg::UInt(n) => Bytes::from(n.to_string()),
            Arg::Float(f) => Bytes::from(f.to_string()),
            Arg::Bool(true) => Bytes::from_static(b"1"),
            Arg::Bool(false) => Bytes::from_static(b"0"),
            Arg::Array(items) => Bytes::from(bracketed(items.iter().map(Arg::to_bulk))),
            Arg::Value(value) => value_text(value),
        }
    }

    /// The reply a server would echo back for this argument
    ///
    /// Scalars come back as bulk strings; arrays and opaque values keep
    /// their shape.
    pub fn to_value(&self) -> Value {
        match self {
            Arg::Array(items) => Value::Array(items.iter().map(Arg::to_value).collect()),
            Arg::Value(value) => value.clone(),
            _ => Value::Bulk(self.to_bulk()),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Int(n)
    }
}

/// `[a b c]`, the text form of a sequence argument
fn bracketed(items: impl Iterator<Item = Bytes>) -> Vec<u8> {
    let mut out = vec![b'['];
    for (position, item) in items.enumerate() {
        if position > 0 {
            out.push(b' ');
        }
        out.extend_from_slice(&item);
    }
    out.push(b']');
    out
}

fn value_text(value: &Value) -> Bytes {
    match value {
        Value::Nil => Bytes::new(),
        Value::Bulk(bytes) => bytes.clone(),
        Value::Int(n) => Bytes::from(n.to_string()),
        Value::Array(items) => Bytes::from(bracketed(items.iter().map(value_text))),
        Value::Error(message) => Bytes::copy_from_slice(message.as_bytes()),
    }
}

// =============================================================================
// ToArg
// =============================================================================

/// Types whose values can be emitted as a command argument
pub trait ToArg {
    fn to_arg(&self) -> Arg;
}

macro_rules! impl_to_arg {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl ToArg for $t {
                fn to_arg(&self) -> Arg {
                    Arg::$variant(*self as $wide)
                }
            }
        )*
    };
}

impl_to_arg!(Int as i64: i8, i16, i32, i64, isize);
impl_to_arg!(UInt as u64: u8, u16, u32, u64, usize);
impl_to_arg!(Float as f64: f32, f64);

impl ToArg for bool {
    fn to_arg(&self) -> Arg {
        Arg::Bool(*self)
    }
}

impl ToArg for String {
    fn to_arg(&self) -> Arg {
        Arg::Str(self.clone())
    }
}

impl ToArg for Vec<u8> {
    fn to_arg(&self) -> Arg {
        Arg::Bytes(Bytes::copy_from_slice(self))
    }
}

impl ToArg for Bytes {
    fn to_arg(&self) -> Arg {
        Arg::Bytes(self.clone())
    }
}

impl ToArg for Value {
    fn to_arg(&self) -> Arg {
        Arg::Value(self.clone())
    }
}

impl ToArg for Vec<Value> {
    fn to_arg(&self) -> Arg {
        Arg::Array(self.iter().map(|value| Arg::Value(value.clone())).collect())
    }
}

// `Vec<u8>` is a byte string argument, so sequence arguments are listed per
// element type, matching the sequence scan destinations.
macro_rules! impl_seq_to_arg {
    ($($t:ty),*) => {
        $(
            impl ToArg for Vec<$t> {
                fn to_arg(&self) -> Arg {
                    Arg::Array(self.iter().map(ToArg::to_arg).collect())
                }
            }
        )*
    };
}

impl_seq_to_arg!(
    i8, i16, i32, i64, isize, u16, u32, u64, usize, f32, f64, bool, String, Vec<u8>
);
