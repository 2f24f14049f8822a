use alloc::boxed::Box;
use core::fmt;

use crate::field::{FieldMut, FieldRef, Kind, Typed};

// `Box<T>` is the single level of indirection the accessor looks through.
impl<T: Typed> Typed for Box<T> {
    const KIND: Kind = Kind::Reference;

    #[inline]
    fn clone_value(&self) -> Self {
        Box::new((**self).clone_value())
    }

    #[inline]
    fn value_eq(&self, other: &Self) -> bool {
        (**self).value_eq(other)
    }

    #[inline]
    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).value_debug(f)
    }

    #[inline]
    fn value_ref(&self) -> FieldRef<'_> {
        FieldRef::Reference(&**self)
    }

    #[inline]
    fn value_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Reference(&mut **self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::field::{Field, FieldMut, Kind};

    #[test]
    fn boxed_value_is_reachable() {
        let mut value = Box::new(7_i64);
        assert_eq!(value.kind(), Kind::Reference);

        let FieldMut::Reference(inner) = Field::field_mut(&mut value) else {
            panic!("expected a reference");
        };
        inner.set(Box::new(9_i64)).unwrap();
        assert_eq!(*value, 9);
    }
}
