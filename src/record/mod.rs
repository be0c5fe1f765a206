//! Record Module
//!
//! Describes the field layout of a struct so the binding layer can address
//! its fields by name.
//!
//! ## Responsibilities
//! - Static layout table per struct type ([`Layout`], [`FieldDesc`])
//! - Accessors from field position to a scan destination or argument source
//! - Resolving multi-step accessor paths through embedded structs
//!
//! A struct opts in by implementing [`Record`], either by hand or with the
//! [`record!`](crate::record!) macro:
//!
//! ```
//! use replyscan::record;
//!
//! #[derive(Default)]
//! struct Base {
//!     id: u64,
//! }
//!
//! #[derive(Default)]
//! struct User {
//!     base: Base,
//!     name: String,
//!     visits: i64,
//!     password: String,
//!     scratch: Vec<u32>,
//! }
//!
//! record!(Base {
//!     value id: "id";
//! });
//!
//! record!(User {
//!     embed base: "Base" => Base;
//!     value name: "Name" as "name";
//!     value visits: "Visits" as "visits";
//!     value password: "Password" as "-";
//!     hidden scratch: "scratch";
//! });
//! ```

mod layout;
mod macros;

pub use layout::{FieldDesc, FieldKind, Layout};

use crate::convert::Scan;
use crate::error::{Result, ScanError};
use crate::value::ToArg;

/// A struct whose fields can be bound by name
///
/// `field_mut` and `field_ref` address fields by their position in
/// [`Layout::fields`]; they return `None` for fields that cannot be bound
/// (hidden fields and embeddings behind a reference).
pub trait Record: 'static {
    /// Static description of the struct's fields, in declaration order
    fn layout() -> &'static Layout
    where
        Self: Sized;

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;

    fn field_ref(&self, index: usize) -> Option<FieldRef<'_>>;
}

/// Mutable access to one field
pub enum FieldMut<'a> {
    Value(&'a mut dyn Scan),
    Embedded(&'a mut dyn Record),
}

/// Shared access to one field
pub enum FieldRef<'a> {
    Value(&'a dyn ToArg),
    Embedded(&'a dyn Record),
}

/// Follow an accessor path down to a scan destination
pub fn resolve_mut<'a>(record: &'a mut dyn Record, path: &[usize]) -> Result<&'a mut dyn Scan> {
    let Some((&first, rest)) = path.split_first() else {
        return Err(ScanError::InvalidDestination("empty accessor path".to_string()));
    };

    match (record.field_mut(first), rest.is_empty()) {
        (Some(FieldMut::Value(dest)), true) => Ok(dest),
        (Some(FieldMut::Embedded(inner)), false) => resolve_mut(inner, rest),
        _ => Err(ScanError::InvalidDestination(format!(
            "no value field at position {} (remaining path {:?})",
            first, rest
        ))),
    }
}

/// Follow an accessor path down to an argument source
pub fn resolve_ref<'a>(record: &'a dyn Record, path: &[usize]) -> Result<&'a dyn ToArg> {
    let Some((&first, rest)) = path.split_first() else {
        return Err(ScanError::InvalidDestination("empty accessor path".to_string()));
    };

    match (record.field_ref(first), rest.is_empty()) {
        (Some(FieldRef::Value(src)), true) => Ok(src),
        (Some(FieldRef::Embedded(inner)), false) => resolve_ref(inner, rest),
        _ => Err(ScanError::InvalidDestination(format!(
            "no value field at position {} (remaining path {:?})",
            first, rest
        ))),
    }
}
