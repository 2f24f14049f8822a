use core::fmt;

use crate::field::{Field, FieldRef, Kind, Typed};

impl<T: Typed> Typed for Option<T> {
    const KIND: Kind = Kind::Option;

    #[inline]
    fn clone_value(&self) -> Self {
        self.as_ref().map(Typed::clone_value)
    }

    fn value_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.value_eq(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&(value as &dyn Field)).finish(),
            None => f.write_str("None"),
        }
    }

    #[inline]
    fn value_ref(&self) -> FieldRef<'_> {
        FieldRef::Option(self.as_ref().map(|value| value as &dyn Field))
    }
}

#[cfg(test)]
mod tests {
    use crate::field::{Field, FieldRef, Kind};

    #[test]
    fn option_view() {
        let some = Some(5_u16);
        let none: Option<u16> = None;

        assert_eq!(some.kind(), Kind::Option);
        assert!(matches!(none.field_ref(), FieldRef::Option(None)));
        let FieldRef::Option(Some(inner)) = some.field_ref() else {
            panic!("expected a value");
        };
        assert_eq!(inner.downcast_ref::<u16>(), Some(&5));
        assert!(!some.field_eq(&none));
        assert_eq!(format!("{:?}", &none as &dyn Field), "None");
    }
}
