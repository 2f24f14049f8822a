use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use serde_core::ser::{Serialize, SerializeMap, Serializer};

use crate::field::Field;
use crate::serde::FieldSerializer;

// -----------------------------------------------------------------------------
// FieldMap

/// An ordered map from field names to `V`.
///
/// Entries keep the declaration order of the record they were taken from.
/// Lookups are linear; records are small.
///
/// # Examples
///
/// ```
/// use vc_attr::{access, derive::Record};
///
/// #[derive(Record)]
/// struct User {
///     #[tag(json = "username")]
///     pub username: String,
///     pub age: i32,
/// }
///
/// let user = User { username: "srathi".into(), age: 30 };
/// let tags = access::field_tags(&user, "json").unwrap();
///
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags.get("username"), Some(&"username"));
/// assert_eq!(tags.get("age"), Some(&""));
/// assert_eq!(tags.keys().collect::<Vec<_>>(), ["username", "age"]);
/// ```
#[derive(Clone, PartialEq)]
pub struct FieldMap<V> {
    entries: Vec<(&'static str, V)>,
}

impl<V> FieldMap<V> {
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, name: &'static str, value: V) {
        self.entries.push((name, value));
    }

    /// Returns the value stored for `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(value))
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the names, in declaration order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Returns an iterator over the values, in declaration order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over `(name, value)`, in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &V)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }
}

impl<V> IntoIterator for FieldMap<V> {
    type Item = (&'static str, V);
    type IntoIter = alloc::vec::IntoIter<(&'static str, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for FieldMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Serialize> Serialize for FieldMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            state.serialize_entry(name, value)?;
        }
        state.end()
    }
}

impl FieldMap<Box<dyn Field>> {
    /// Returns a view that serializes the values through their structure.
    ///
    /// `Box<dyn Field>` has no `Serialize` impl of its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_attr::{access, derive::Record};
    ///
    /// #[derive(Record)]
    /// struct User {
    ///     pub username: String,
    ///     pub age: i32,
    /// }
    ///
    /// let user = User { username: "srathi".into(), age: 30 };
    /// let values = access::field_values(&user).unwrap();
    /// let json = serde_json::to_string(&values.serializable()).unwrap();
    ///
    /// assert_eq!(json, r#"{"username":"srathi","age":30}"#);
    /// ```
    pub fn serializable(&self) -> SerializeFields<'_> {
        SerializeFields(self)
    }
}

/// Serializes a map of field values; see [`FieldMap::serializable`].
pub struct SerializeFields<'a>(&'a FieldMap<Box<dyn Field>>);

impl Serialize for SerializeFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0.iter() {
            state.serialize_entry(name, &FieldSerializer::new(&**value))?;
        }
        state.end()
    }
}
