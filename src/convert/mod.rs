//! Convert Module
//!
//! Binds one reply [`Value`](crate::Value) into one typed destination.
//!
//! ## Destinations
//! A destination describes itself as a [`Slot`]: a closed set of kinds the
//! engine knows how to fill. Anything that can hand out a `Slot` implements
//! [`Scan`] and can be used as a scan target.
//!
//! ```text
//! i8..i64, isize     -> Slot::Signed
//! u8..u64, usize     -> Slot::Unsigned
//! f32 / f64          -> Slot::F32 / Slot::F64
//! bool               -> Slot::Bool
//! String             -> Slot::Str
//! Vec<u8>            -> Slot::Bytes
//! Value              -> Slot::Any
//! Vec<Value>         -> Slot::Values
//! Vec<scalar>        -> Slot::Seq
//! Skip               -> Slot::Discard
//! ```

mod engine;
mod slot;

pub use engine::{convert, convert_bulk, convert_int, convert_seq};
pub use slot::{Scan, SeqSlot, SignedInt, Skip, Slot, UnsignedInt};
