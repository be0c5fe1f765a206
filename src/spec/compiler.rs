//! Field-spec compiler
//!
//! Walks a [`Layout`] depth-first, in declaration order, descending into
//! structs embedded by value.
//!
//! ## Depth Rules (per binding key)
//! - first sighting: recorded at its depth
//! - same depth as the shallowest sighting so far: the key is ambiguous and
//!   removed entirely
//! - shallower: replaces the deeper entry
//! - deeper: ignored

use std::collections::HashMap;

use super::tag::parse_tag;
use super::{FieldSpec, StructSpec};
use crate::config::Config;
use crate::error::{Result, ScanError};
use crate::record::{FieldKind, Layout};

/// Compile the field table for a struct layout
pub fn compile(layout: &'static Layout, config: &Config) -> Result<StructSpec> {
    let mut compiler = Compiler {
        max_depth: config.max_embed_depth,
        depth: HashMap::new(),
        fields: Vec::new(),
    };
    compiler.walk(layout, &mut Vec::new())?;
    Ok(StructSpec::from_fields(compiler.fields))
}

struct Compiler {
    max_depth: usize,

    /// Shallowest depth each key has been seen at
    depth: HashMap<String, usize>,

    /// Surviving fields, in the order they were recorded
    fields: Vec<FieldSpec>,
}

impl Compiler {
    fn walk(&mut self, layout: &'static Layout, index: &mut Vec<usize>) -> Result<()> {
        for (position, field) in layout.fields.iter().enumerate() {
            if !field.exported {
                continue;
            }

            match field.kind {
                // Fields behind a reference are not promoted
                FieldKind::EmbeddedRef => {}
                FieldKind::Embedded(inner) => {
                    if index.len() >= self.max_depth {
                        return Err(ScanError::Config(format!(
                            "{}.{} is embedded deeper than the maximum depth of {}",
                            layout.type_name, field.name, self.max_depth
                        )));
                    }
                    index.push(position);
                    self.walk(inner(), index)?;
                    index.pop();
                }
                FieldKind::Value => {
                    let Some(tag) = parse_tag(field.tag, layout.type_name)? else {
                        continue;
                    };
                    let name = tag.name.unwrap_or(field.name);
                    self.record(name, index, position, tag.omit_empty);
                }
            }
        }

        Ok(())
    }

    fn record(&mut self, name: &str, index: &[usize], position: usize, omit_empty: bool) {
        let depth = index.len();

        match self.depth.get(name).copied() {
            Some(seen) if depth == seen => {
                self.fields.retain(|field| field.name != name);
            }
            Some(seen) if depth > seen => {}
            _ => {
                self.fields.retain(|field| field.name != name);
                self.depth.insert(name.to_string(), depth);

                let mut path = Vec::with_capacity(depth + 1);
                path.extend_from_slice(index);
                path.push(position);

                self.fields.push(FieldSpec {
                    name: name.to_string(),
                    index: path,
                    omit_empty,
                });
            }
        }
    }
}
