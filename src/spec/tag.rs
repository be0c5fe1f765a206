//! Field tag parsing
//!
//! Tag format: `name[,flag...]`
//! - empty name keeps the declared field name
//! - `-` excludes the field
//! - no flags are supported yet; any flag is a configuration error

use crate::error::{Result, ScanError};

/// A parsed field tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag<'a> {
    /// Override name, if the tag gave one
    pub name: Option<&'a str>,

    pub omit_empty: bool,
}

/// Parse a field tag
///
/// Returns `Ok(None)` when the field is excluded. `type_name` names the
/// struct declaring the field, for error messages.
pub fn parse_tag<'a>(tag: &'a str, type_name: &'static str) -> Result<Option<FieldTag<'a>>> {
    let mut parts = tag.split(',');
    let name = parts.next().unwrap_or("");

    if name == "-" {
        return Ok(None);
    }

    if let Some(flag) = parts.next() {
        return Err(ScanError::UnsupportedFieldTag {
            flag: flag.to_string(),
            type_name,
        });
    }

    Ok(Some(FieldTag {
        name: (!name.is_empty()).then_some(name),
        omit_empty: false,
    }))
}

