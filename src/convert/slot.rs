//! Destination descriptors
//!
//! `Slot` is the tagged union the conversion engine dispatches on.

use std::num::ParseIntError;

use crate::value::Value;

/// A mutable destination for one reply value
pub enum Slot<'a> {
    /// Consume the value without converting it
    Discard,

    /// Any signed integer width
    Signed(&'a mut dyn SignedInt),

    /// Any unsigned integer width
    Unsigned(&'a mut dyn UnsignedInt),

    F32(&'a mut f32),
    F64(&'a mut f64),
    Bool(&'a mut bool),

    /// Text destination; invalid UTF-8 is replaced with U+FFFD, so payloads
    /// that must survive byte for byte belong in `Vec<u8>`
    Str(&'a mut String),

    Bytes(&'a mut Vec<u8>),

    /// Opaque destination; takes the reply value as-is
    Any(&'a mut Value),

    /// Opaque sequence destination; takes an array reply as-is
    Values(&'a mut Vec<Value>),

    /// Typed sequence destination, filled element by element
    Seq(&'a mut dyn SeqSlot),
}

impl Slot<'_> {
    /// Name of the destination type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Discard => "skip",
            Slot::Signed(d) => d.type_name(),
            Slot::Unsigned(d) => d.type_name(),
            Slot::F32(_) => "f32",
            Slot::F64(_) => "f64",
            Slot::Bool(_) => "bool",
            Slot::Str(_) => "String",
            Slot::Bytes(_) => "Vec<u8>",
            Slot::Any(_) => "Value",
            Slot::Values(_) => "Vec<Value>",
            Slot::Seq(d) => d.type_name(),
        }
    }
}

// =============================================================================
// Scan
// =============================================================================

/// A type that can be used as a scan destination
pub trait Scan {
    fn slot(&mut self) -> Slot<'_>;
}

/// Destination marker that consumes a value and throws it away
#[derive(Debug, Clone, Copy, Default)]
pub struct Skip;

impl Scan for Skip {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Discard
    }
}

impl<T: Scan + ?Sized> Scan for &mut T {
    fn slot(&mut self) -> Slot<'_> {
        (**self).slot()
    }
}

// =============================================================================
// Integer destinations
// =============================================================================

/// A signed integer of some width
pub trait SignedInt {
    fn type_name(&self) -> &'static str;

    /// Store `value` if it fits; returns false and leaves `self` untouched otherwise
    fn store(&mut self, value: i64) -> bool;

    /// Parse base-10 text of this width
    fn parse_from(&mut self, text: &str) -> Result<(), ParseIntError>;
}

/// An unsigned integer of some width
pub trait UnsignedInt {
    fn type_name(&self) -> &'static str;

    /// Store `value` if it fits; returns false and leaves `self` untouched otherwise
    fn store(&mut self, value: u64) -> bool;

    /// Parse base-10 text of this width
    fn parse_from(&mut self, text: &str) -> Result<(), ParseIntError>;
}

macro_rules! impl_int_slot {
    ($trait:ident, $variant:ident, $wide:ty: $($t:ty),*) => {
        $(
            impl $trait for $t {
                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }

                fn store(&mut self, value: $wide) -> bool {
                    match <$t>::try_from(value) {
                        Ok(v) => {
                            *self = v;
                            true
                        }
                        Err(_) => false,
                    }
                }

                fn parse_from(&mut self, text: &str) -> Result<(), ParseIntError> {
                    *self = text.parse::<$t>()?;
                    Ok(())
                }
            }

            impl Scan for $t {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

impl_int_slot!(SignedInt, Signed, i64: i8, i16, i32, i64, isize);
impl_int_slot!(UnsignedInt, Unsigned, u64: u8, u16, u32, u64, usize);

// =============================================================================
// Scalar destinations
// =============================================================================

impl Scan for f32 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::F32(self)
    }
}

impl Scan for f64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::F64(self)
    }
}

impl Scan for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl Scan for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Str(self)
    }
}

impl Scan for Vec<u8> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bytes(self)
    }
}

impl Scan for Value {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Any(self)
    }
}

impl Scan for Vec<Value> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Values(self)
    }
}

// =============================================================================
// Sequence destinations
// =============================================================================

/// A growable sequence whose elements are scan destinations
pub trait SeqSlot {
    fn type_name(&self) -> &'static str;

    /// Make the sequence exactly `len` elements long
    ///
    /// Reuses the existing allocation when it is large enough (dropping any
    /// trailing elements), otherwise replaces it with one of exactly `len`.
    fn reset(&mut self, len: usize);

    /// Destination for the element at `index`
    fn element(&mut self, index: usize) -> Slot<'_>;
}

impl<T: Scan + Default> SeqSlot for Vec<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn reset(&mut self, len: usize) {
        if len > self.capacity() {
            *self = Vec::with_capacity(len);
        }
        self.truncate(len);
        self.resize_with(len, T::default);
    }

    fn element(&mut self, index: usize) -> Slot<'_> {
        self[index].slot()
    }
}

// `Vec<u8>` is a byte string, not a sequence of integers, so sequence
// destinations are listed per element type.
macro_rules! impl_seq_scan {
    ($($t:ty),*) => {
        $(
            impl Scan for Vec<$t> {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Seq(self)
                }
            }
        )*
    };
}

impl_seq_scan!(
    i8, i16, i32, i64, isize, u16, u32, u64, usize, f32, f64, bool, String, Vec<u8>
);
