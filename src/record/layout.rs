//! Layout tables
//!
//! Plain `const`-constructible data, so layouts can live in statics.

/// Field layout of one struct type
#[derive(Debug)]
pub struct Layout {
    /// Type name, used in error messages
    pub type_name: &'static str,

    /// Fields in declaration order
    pub fields: &'static [FieldDesc],
}

/// Description of one declared field
#[derive(Debug, Clone, Copy)]
pub struct FieldDesc {
    /// Declared field name; the binding key unless the tag overrides it
    pub name: &'static str,

    /// Tag string: `name[,flag...]`, `-` to exclude, empty for none
    pub tag: &'static str,

    /// Hidden fields are never bound
    pub exported: bool,

    pub kind: FieldKind,
}

/// What a field holds
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A scalar or sequence value
    Value,

    /// A struct embedded by value; its fields are promoted into the parent
    Embedded(fn() -> &'static Layout),

    /// A struct embedded behind a reference (`Box`, `Option<Box>`, ...).
    /// Not followed: its fields are not promoted.
    EmbeddedRef,
}

impl FieldDesc {
    /// A bindable value field
    pub const fn value(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            exported: true,
            kind: FieldKind::Value,
        }
    }

    /// A field that is never bound
    pub const fn hidden(name: &'static str) -> Self {
        Self {
            name,
            tag: "",
            exported: false,
            kind: FieldKind::Value,
        }
    }

    /// A struct embedded by value
    pub const fn embedded(name: &'static str, layout: fn() -> &'static Layout) -> Self {
        Self {
            name,
            tag: "",
            exported: true,
            kind: FieldKind::Embedded(layout),
        }
    }

    /// A struct embedded behind a reference
    pub const fn embedded_ref(name: &'static str) -> Self {
        Self {
            name,
            tag: "",
            exported: true,
            kind: FieldKind::EmbeddedRef,
        }
    }

    /// Same field with a tag
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }
}
