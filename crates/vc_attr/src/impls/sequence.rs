use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::field::{Field, FieldRef, Kind, Typed};

#[inline]
fn sequence_eq<'a, T: Typed>(
    a: impl ExactSizeIterator<Item = &'a T>,
    b: impl ExactSizeIterator<Item = &'a T>,
) -> bool {
    a.len() == b.len() && a.zip(b).all(|(a, b)| a.value_eq(b))
}

#[inline]
fn sequence_debug<'a, T: Typed>(
    items: impl Iterator<Item = &'a T>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_list()
        .entries(items.map(|item| item as &dyn Field))
        .finish()
}

impl<T: Typed> Typed for Vec<T> {
    const KIND: Kind = Kind::Sequence;

    fn clone_value(&self) -> Self {
        self.iter().map(Typed::clone_value).collect()
    }

    fn value_eq(&self, other: &Self) -> bool {
        sequence_eq(self.iter(), other.iter())
    }

    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sequence_debug(self.iter(), f)
    }

    fn value_ref(&self) -> FieldRef<'_> {
        FieldRef::Sequence(Box::new(self.iter().map(|item| item as &dyn Field)))
    }
}

impl<T: Typed> Typed for VecDeque<T> {
    const KIND: Kind = Kind::Sequence;

    fn clone_value(&self) -> Self {
        self.iter().map(Typed::clone_value).collect()
    }

    fn value_eq(&self, other: &Self) -> bool {
        sequence_eq(self.iter(), other.iter())
    }

    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sequence_debug(self.iter(), f)
    }

    fn value_ref(&self) -> FieldRef<'_> {
        FieldRef::Sequence(Box::new(self.iter().map(|item| item as &dyn Field)))
    }
}

impl<T: Typed, const N: usize> Typed for [T; N] {
    const KIND: Kind = Kind::Sequence;

    fn clone_value(&self) -> Self {
        core::array::from_fn(|index| self[index].clone_value())
    }

    fn value_eq(&self, other: &Self) -> bool {
        sequence_eq(self.iter(), other.iter())
    }

    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sequence_debug(self.iter(), f)
    }

    fn value_ref(&self) -> FieldRef<'_> {
        FieldRef::Sequence(Box::new(self.iter().map(|item| item as &dyn Field)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;

    use crate::field::{Field, FieldRef, Kind};

    #[test]
    fn elements_in_order() {
        let value = VecDeque::from([3_u8, 1, 2]);
        let FieldRef::Sequence(items) = value.field_ref() else {
            panic!("expected a sequence");
        };

        assert_eq!(items.len(), 3);
        let items = items
            .map(|item| *item.downcast_ref::<u8>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(items, [3, 1, 2]);
    }

    #[test]
    fn array_value_semantics() {
        let value = [String::from("a"), String::from("b")];
        let copy = value.clone_field();

        assert_eq!(copy.kind(), Kind::Sequence);
        assert!(value.field_eq(&*copy));
        assert!(!value.field_eq(&vec![String::from("a"), String::from("b")]));
        assert_eq!(format!("{copy:?}"), "[\"a\", \"b\"]");
    }
}
