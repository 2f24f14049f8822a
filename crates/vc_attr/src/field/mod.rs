//! Field values: the [`Typed`] and [`Field`] traits.
//!
//! Every type that may appear as a record field implements [`Typed`]
//! (statically dispatched, one impl per type). [`Field`] is the object-safe
//! face of the same capabilities and is implemented for every [`Typed`] type,
//! so any field can be handled as a `&dyn Field` without knowing its type.
//!
//! [`Typed`] is implemented for:
//!
//! - `bool` `char` `i8`-`i128` `isize` `u8`-`u128` `usize` `f32` `f64`
//! - `String` `&'static str` `core::time::Duration`
//! - `Vec<T>` `VecDeque<T>` `[T; N]`
//! - `BTreeMap<K, V>` `HashMap<K, V>`
//! - `Option<T>` `Box<T>`
//! - every `#[derive(Record)]` type
//!
//! Other leaf types can join with [`impl_opaque_field!`](crate::impl_opaque_field).

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod view;

// -----------------------------------------------------------------------------
// Exports

pub use kind::Kind;
pub use view::{FieldMut, FieldRef};

// -----------------------------------------------------------------------------
// Typed

/// Static capabilities of a field value type.
///
/// This trait is implemented by [`#[derive(Record)]`](crate::derive::Record)
/// for records and by this crate for common std types.
///
/// Records do not need `Clone`, `PartialEq` or `Debug`: the derived
/// implementation goes field by field through the field types' own
/// [`Typed`] impls.
pub trait Typed: Any + Send + Sync + Sized {
    /// The coarse category of this type.
    const KIND: Kind;

    /// Returns a deep copy of the value.
    fn clone_value(&self) -> Self;

    /// Compares two values of this type.
    fn value_eq(&self, other: &Self) -> bool;

    /// Formats the value for debugging.
    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns an immutable structural view of the value.
    fn value_ref(&self) -> FieldRef<'_>;

    /// Returns a mutable structural view of the value.
    #[inline]
    fn value_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Other
    }
}

// -----------------------------------------------------------------------------
// Field

/// A type-erased field value.
///
/// Implemented for every [`Typed`] type; use `&dyn Field` and
/// `Box<dyn Field>` to hold values of unknown type.
///
/// # Examples
///
/// ```
/// use vc_attr::field::{Field, Kind};
///
/// let value: Box<dyn Field> = Box::new(30_i32);
///
/// assert_eq!(value.kind(), Kind::Integer);
/// assert_eq!(value.type_name(), "i32");
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&30));
/// assert_eq!(value.downcast_ref::<i64>(), None);
/// ```
pub trait Field: Any + Send + Sync {
    /// Returns the [`Kind`] of the concrete type.
    fn kind(&self) -> Kind;

    /// Returns the full name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Returns the [`TypeId`] of the concrete type.
    ///
    /// Unlike [`Any::type_id`], calling this on a `Box<dyn Field>` reports
    /// the boxed value, not the box.
    fn ty_id(&self) -> TypeId;

    /// Returns an immutable structural view.
    fn field_ref(&self) -> FieldRef<'_>;

    /// Returns a mutable structural view.
    fn field_mut(&mut self) -> FieldMut<'_>;

    /// Returns a boxed deep copy.
    fn clone_field(&self) -> Box<dyn Field>;

    /// Returns `true` if `other` has the same concrete type and an equal value.
    fn field_eq(&self, other: &dyn Field) -> bool;

    /// Formats the value for debugging.
    fn field_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Replaces `self` with `value` if both have the same concrete type.
    ///
    /// On mismatch `value` is handed back unchanged.
    fn set(&mut self, value: Box<dyn Field>) -> Result<(), Box<dyn Field>>;
}

impl<T: Typed> Field for T {
    #[inline]
    fn kind(&self) -> Kind {
        T::KIND
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    #[inline]
    fn field_ref(&self) -> FieldRef<'_> {
        self.value_ref()
    }

    #[inline]
    fn field_mut(&mut self) -> FieldMut<'_> {
        self.value_mut()
    }

    #[inline]
    fn clone_field(&self) -> Box<dyn Field> {
        Box::new(self.clone_value())
    }

    fn field_eq(&self, other: &dyn Field) -> bool {
        other
            .downcast_ref::<T>()
            .is_some_and(|other| self.value_eq(other))
    }

    #[inline]
    fn field_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value_debug(f)
    }

    fn set(&mut self, value: Box<dyn Field>) -> Result<(), Box<dyn Field>> {
        if !value.is::<T>() {
            return Err(value);
        }
        let value: Box<dyn Any> = value;
        if let Ok(value) = value.downcast::<T>() {
            *self = *value;
        }
        Ok(())
    }
}

impl dyn Field {
    /// Returns `true` if the concrete type is `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts to a shared reference of the concrete type.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Downcasts to a mutable reference of the concrete type.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn Field {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.field_debug(f)
    }
}

impl PartialEq for dyn Field {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.field_eq(other)
    }
}

impl Clone for Box<dyn Field> {
    #[inline]
    fn clone(&self) -> Self {
        (**self).clone_field()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Field, Kind};

    #[test]
    fn boxed_type_identity() {
        let value: Box<dyn Field> = Box::new(String::from("srathi"));
        assert!(value.is::<String>());
        assert!(!value.is::<&'static str>());
        assert_eq!(value.kind(), Kind::String);
    }

    #[test]
    fn set_requires_exact_type() {
        let mut slot = 30_i32;
        let target: &mut dyn Field = &mut slot;

        let rejected = target.set(Box::new(40.5_f64)).unwrap_err();
        assert_eq!(rejected.downcast_ref::<f64>(), Some(&40.5));
        assert!(target.set(Box::new(40_i64)).is_err());
        assert_eq!(slot, 30);

        let target: &mut dyn Field = &mut slot;
        target.set(Box::new(40_i32)).unwrap();
        assert_eq!(slot, 40);
    }

    #[test]
    fn clone_and_compare() {
        let value: Box<dyn Field> = Box::new(vec![1_u8, 2, 3]);
        let copy = value.clone();
        assert!(*value == *copy);
        assert_eq!(copy.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));

        let other: Box<dyn Field> = Box::new(vec![1_u16, 2, 3]);
        assert!(*value != *other);
    }

    #[test]
    fn debug_matches_std() {
        let value: Box<dyn Field> = Box::new(Some(String::from("x")));
        assert_eq!(format!("{value:?}"), "Some(\"x\")");
    }
}
