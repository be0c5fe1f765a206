//! `record!` macro
//!
//! Generates a [`Record`](crate::Record) impl from a field list.
//!
//! ## Field Entries
//! ```text
//! value     field: "Name" [as "tag"];    bindable field, optional tag
//! hidden    field: "Name";               never bound
//! embed     field: "Name" => Type;       struct embedded by value
//! embed_ref field: "Name";               struct behind a reference (skipped)
//! ```
//!
//! Entries must be listed in declaration order.

#[macro_export]
macro_rules! record {
    // -------------------------------------------------------------------------
    // Layout entries
    // -------------------------------------------------------------------------
    (@desc value $name:literal) => {
        $crate::FieldDesc::value($name, "")
    };
    (@desc value $name:literal as $tag:literal) => {
        $crate::FieldDesc::value($name, $tag)
    };
    (@desc hidden $name:literal $(as $tag:literal)?) => {
        $crate::FieldDesc::hidden($name)
    };
    (@desc embed $name:literal => $inner:ty) => {
        $crate::FieldDesc::embedded($name, <$inner as $crate::Record>::layout)
    };
    (@desc embed_ref $name:literal) => {
        $crate::FieldDesc::embedded_ref($name)
    };

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------
    (@mut value $field:expr) => {
        ::core::option::Option::Some($crate::FieldMut::Value(&mut $field))
    };
    (@mut embed $field:expr) => {
        ::core::option::Option::Some($crate::FieldMut::Embedded(&mut $field))
    };
    (@mut $other:ident $field:expr) => {
        ::core::option::Option::None
    };
    (@ref value $field:expr) => {
        ::core::option::Option::Some($crate::FieldRef::Value(&$field))
    };
    (@ref embed $field:expr) => {
        ::core::option::Option::Some($crate::FieldRef::Embedded(&$field))
    };
    (@ref $other:ident $field:expr) => {
        ::core::option::Option::None
    };

    // -------------------------------------------------------------------------
    // Entry point
    // -------------------------------------------------------------------------
    ($ty:ident {
        $( $kind:ident $field:ident : $name:literal $(as $tag:literal)? $(=> $inner:ty)? ; )*
    }) => {
        impl $crate::Record for $ty {
            fn layout() -> &'static $crate::Layout {
                static LAYOUT: $crate::Layout = $crate::Layout {
                    type_name: ::core::stringify!($ty),
                    fields: &[
                        $( $crate::record!(@desc $kind $name $(as $tag)? $(=> $inner)?) ),*
                    ],
                };
                &LAYOUT
            }

            #[allow(unused_assignments)]
            fn field_mut(&mut self, index: usize) -> ::core::option::Option<$crate::FieldMut<'_>> {
                let mut _position = 0usize;
                $(
                    if _position == index {
                        return $crate::record!(@mut $kind self.$field);
                    }
                    _position += 1;
                )*
                ::core::option::Option::None
            }

            #[allow(unused_assignments)]
            fn field_ref(&self, index: usize) -> ::core::option::Option<$crate::FieldRef<'_>> {
                let mut _position = 0usize;
                $(
                    if _position == index {
                        return $crate::record!(@ref $kind self.$field);
                    }
                    _position += 1;
                )*
                ::core::option::Option::None
            }
        }
    };
}
