//! Declaration macros for reflected types.
//!
//! Rust has no runtime field introspection, so each record type declares its
//! fields once with [`reflect_record!`]. The macro produces the static field
//! descriptors and the name-based accessors the operations dispatch on.
//!
//! ```ignore
//! use fieldwise::reflect_record;
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct Audit {
//!     created_by: String,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct Order {
//!     name: String,
//!     labels: Vec<String>,
//!     audit: Audit,
//! }
//!
//! reflect_record!(Audit { created_by });
//! reflect_record!(Order {
//!     name,
//!     labels: tag = "split_labels",
//!     audit: embedded,
//! });
//! ```

/// Shared `Reflect` plumbing for types that are `Clone + PartialEq + Debug`.
#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_common {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }

        fn into_any(
            self: ::std::boxed::Box<Self>,
        ) -> ::std::boxed::Box<dyn ::std::any::Any> {
            self
        }

        fn clone_reflect(&self) -> ::std::boxed::Box<dyn $crate::Reflect> {
            ::std::boxed::Box::new(::std::clone::Clone::clone(self))
        }

        fn reflect_eq(&self, other: &dyn $crate::Reflect) -> bool {
            other
                .as_any()
                .downcast_ref::<Self>()
                .map_or(false, |other| self == other)
        }

        fn assign(&mut self, value: &dyn $crate::Reflect) -> bool {
            match value.as_any().downcast_ref::<Self>() {
                Some(value) => {
                    *self = ::std::clone::Clone::clone(value);
                    true
                }
                None => false,
            }
        }
    };
}

/// Implement `Reflect` for scalar types (typically caller-defined newtypes).
///
/// The type must be `Debug + Clone + PartialEq + 'static`.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Default)]
/// struct UserId(i64);
///
/// fieldwise::impl_reflect_scalar!(UserId => Int64);
/// ```
#[macro_export]
macro_rules! impl_reflect_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                fn kind(&self) -> $crate::Kind {
                    $crate::Kind::$kind
                }

                $crate::__reflect_common!();
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_descriptor {
    ($field:ident) => {
        $crate::FieldDescriptor::new(stringify!($field))
    };
    ($field:ident : tag = $tag:literal) => {
        $crate::FieldDescriptor::new(stringify!($field)).with_tag($tag)
    };
    ($field:ident : embedded) => {
        $crate::FieldDescriptor::new(stringify!($field)).embedded()
    };
}

/// Implement `Reflect` and `Record` for an existing struct.
///
/// Each listed field may carry one option:
///
/// * `field: tag = "name"` - apply the registered tag parser `name` when this
///   field is a list of strings being transformed
/// * `field: embedded` - the field is an embedded record whose fields are
///   promoted onto this one for name lookup
///
/// Fields left out of the list are invisible to every operation. The struct
/// must be `Debug + Clone + PartialEq + Default`, and every listed field type
/// must implement `Reflect`.
#[macro_export]
macro_rules! reflect_record {
    ($ty:ident { $($field:ident $(: $option:ident $(= $value:literal)?)?),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn kind(&self) -> $crate::Kind {
                $crate::Kind::Record
            }

            $crate::__reflect_common!();

            fn as_record(&self) -> ::std::option::Option<&dyn $crate::Record> {
                ::std::option::Option::Some(self)
            }

            fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn $crate::Record> {
                ::std::option::Option::Some(self)
            }
        }

        impl $crate::Record for $ty {
            fn record_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn descriptors(&self) -> &'static [$crate::FieldDescriptor] {
                const FIELDS: &[$crate::FieldDescriptor] = &[
                    $($crate::__field_descriptor!($field $(: $option $(= $value)?)?)),*
                ];
                FIELDS
            }

            #[allow(unused_variables)]
            fn own_field(&self, name: &str) -> ::std::option::Option<&dyn $crate::Reflect> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(&self.$field as &dyn $crate::Reflect);
                    }
                )*
                ::std::option::Option::None
            }

            #[allow(unused_variables)]
            fn own_field_mut(
                &mut self,
                name: &str,
            ) -> ::std::option::Option<&mut dyn $crate::Reflect> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(
                            &mut self.$field as &mut dyn $crate::Reflect,
                        );
                    }
                )*
                ::std::option::Option::None
            }
        }
    };
}
