//! Spec Module
//!
//! Compiled, name-addressable view of a struct's layout.
//!
//! ## Responsibilities
//! - Resolve each bindable field's key (declared name or tag override)
//! - Record the accessor path to each field, through embedded structs
//! - Apply shadowing between same-named fields at different depths
//!
//! ## Shadowing
//! ```text
//! struct Outer { Inner, name }      Outer.name (depth 0) wins over Inner.name (depth 1)
//! struct Outer { A, B }             A.name and B.name (both depth 1) cancel out:
//!                                   neither is bound
//! ```

mod compiler;
mod tag;

pub use compiler::compile;
pub use tag::{parse_tag, FieldTag};

use std::collections::HashMap;

/// Binding metadata for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key the field is matched and emitted under
    pub name: String,

    /// Field positions from the outer struct down to the field
    pub index: Vec<usize>,

    /// Parsed from tags in the schema but has no effect on binding
    pub omit_empty: bool,
}

/// Compiled field table for one struct type
///
/// `fields` keeps declaration order for flattening; `by_name` indexes the
/// same entries by key. Both always hold exactly the same set of fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructSpec {
    by_name: HashMap<String, usize>,
    fields: Vec<FieldSpec>,
}

impl StructSpec {
    pub(crate) fn from_fields(fields: Vec<FieldSpec>) -> Self {
        let by_name = fields
            .iter()
            .enumerate()
            .map(|(position, field)| (field.name.clone(), position))
            .collect();
        Self { by_name, fields }
    }

    /// Look up a field by its binding key
    pub fn field_spec(&self, name: &[u8]) -> Option<&FieldSpec> {
        let name = std::str::from_utf8(name).ok()?;
        self.by_name.get(name).map(|&position| &self.fields[position])
    }

    /// All fields, in flattening order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Binding keys, in flattening order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
