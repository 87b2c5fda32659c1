//! Value kinds and the object-safe [`Reflect`] trait.
//!
//! Every value that takes part in a transformation, comparison, filter or
//! summation is seen through `&dyn Reflect`. The trait exposes the structural
//! [`Kind`] of the value, deep equality, type-checked assignment and optional
//! record/list views, which is all the name-driven operations need.

use std::any::Any;
use std::fmt;

use crate::list::List;
use crate::record::Record;

/// Structural category of a value.
///
/// Distinct Rust types can share a kind (a `UserId(i64)` newtype and `i64` are
/// both [`Kind::Int64`]); kind equality is the first check, concrete type
/// equality the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    /// Platform-width signed integer (`isize`)
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Platform-width unsigned integer (`usize`)
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Record,
    List,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Record => "record",
            Kind::List => "list",
        }
    }

    /// True for every signed and unsigned integer kind
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Kind::Int
                | Kind::Int8
                | Kind::Int16
                | Kind::Int32
                | Kind::Int64
                | Kind::Uint
                | Kind::Uint8
                | Kind::Uint16
                | Kind::Uint32
                | Kind::Uint64
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime view of a value taking part in name-driven operations.
///
/// Implemented for the primitive scalars, `String`, `Vec<T>` and, through
/// [`reflect_record!`](crate::reflect_record), for caller-defined structs.
/// Use [`impl_reflect_scalar!`](crate::impl_reflect_scalar) for scalar newtypes.
pub trait Reflect: Any + fmt::Debug {
    /// Structural kind of this value
    fn kind(&self) -> Kind;

    /// Concrete Rust type name, for diagnostics only
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn clone_reflect(&self) -> Box<dyn Reflect>;

    /// Deep equality. Values of different concrete types are never equal.
    fn reflect_eq(&self, other: &dyn Reflect) -> bool;

    /// Overwrite `self` with a copy of `value` if both have the same concrete
    /// type. Returns `false` and leaves `self` untouched otherwise.
    fn assign(&mut self, value: &dyn Reflect) -> bool;

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    fn as_list(&self) -> Option<&dyn List> {
        None
    }

    fn as_list_mut(&mut self) -> Option<&mut dyn List> {
        None
    }

    /// Integer value, when this is an integer representable as `i64`
    fn as_int(&self) -> Option<i64> {
        None
    }

    fn as_str(&self) -> Option<&str> {
        None
    }
}

impl<'a> dyn Reflect + 'a {
    pub fn is<T: Reflect>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl<'a> PartialEq for dyn Reflect + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.reflect_eq(other)
    }
}

impl Clone for Box<dyn Reflect> {
    fn clone(&self) -> Self {
        self.clone_reflect()
    }
}

macro_rules! reflect_integers {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                crate::__reflect_common!();

                fn as_int(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

reflect_integers! {
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
}

crate::impl_reflect_scalar! {
    bool => Bool,
    f32 => Float32,
    f64 => Float64,
}

impl Reflect for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    crate::__reflect_common!();

    fn as_str(&self) -> Option<&str> {
        Some(self)
    }
}
