use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::field::{Field, FieldRef, Kind, Typed};

#[inline]
fn map_debug<'a, K: Typed, V: Typed>(
    entries: impl Iterator<Item = (&'a K, &'a V)>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_map()
        .entries(entries.map(|(k, v)| (k as &dyn Field, v as &dyn Field)))
        .finish()
}

impl<K: Typed + Ord, V: Typed> Typed for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;

    fn clone_value(&self) -> Self {
        self.iter()
            .map(|(k, v)| (k.clone_value(), v.clone_value()))
            .collect()
    }

    fn value_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.value_eq(o)))
    }

    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        map_debug(self.iter(), f)
    }

    fn value_ref(&self) -> FieldRef<'_> {
        FieldRef::Map(Box::new(
            self.iter().map(|(k, v)| (k as &dyn Field, v as &dyn Field)),
        ))
    }
}

impl<K, V, S> Typed for HashMap<K, V, S>
where
    K: Typed + Eq + Hash,
    V: Typed,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    const KIND: Kind = Kind::Map;

    fn clone_value(&self) -> Self {
        self.iter()
            .map(|(k, v)| (k.clone_value(), v.clone_value()))
            .collect()
    }

    fn value_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.value_eq(o)))
    }

    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        map_debug(self.iter(), f)
    }

    fn value_ref(&self) -> FieldRef<'_> {
        FieldRef::Map(Box::new(
            self.iter().map(|(k, v)| (k as &dyn Field, v as &dyn Field)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::field::{Field, FieldRef, Kind};

    #[test]
    fn entries_are_exposed() {
        let value = BTreeMap::from([(String::from("b"), 2_i64), (String::from("a"), 1)]);
        let FieldRef::Map(entries) = value.field_ref() else {
            panic!("expected a map");
        };

        let keys = entries
            .map(|(k, _)| k.downcast_ref::<String>().unwrap().as_str())
            .collect::<Vec<_>>();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(format!("{:?}", &value as &dyn Field), "{\"a\": 1, \"b\": 2}");
    }

    #[test]
    fn unordered_equality() {
        let a = HashMap::from([(1_u32, 'x'), (2, 'y')]);
        let b = HashMap::from([(2_u32, 'y'), (1, 'x')]);
        let c = HashMap::from([(2_u32, 'y'), (1, 'z')]);

        assert_eq!(a.kind(), Kind::Map);
        assert!(a.field_eq(&b));
        assert!(!a.field_eq(&c));
        assert!(a.field_eq(&*a.clone_field()));
    }
}
